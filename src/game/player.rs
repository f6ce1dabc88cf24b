//! Seats at the table.

extern crate alloc;

use alloc::string::String;

use crate::hand::Hand;

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A player deciding between hit and stand, identified by id.
    Human(u8),
    /// The dealer, following the fixed drawing policy.
    Dealer,
}

/// A participant in the round: a named seat holding a hand.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    role: Role,
    pub(super) hand: Hand,
}

impl Player {
    pub(super) fn human(id: u8, name: String) -> Self {
        Self {
            name,
            role: Role::Human(id),
            hand: Hand::new(),
        }
    }

    pub(super) fn dealer() -> Self {
        Self {
            name: String::from("Dealer"),
            role: Role::Dealer,
            hand: Hand::new(),
        }
    }

    /// Returns the player's id, or `None` for the dealer.
    #[must_use]
    pub const fn id(&self) -> Option<u8> {
        match self.role {
            Role::Human(id) => Some(id),
            Role::Dealer => None,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns who controls this seat.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }
}
