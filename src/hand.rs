//! Hand scoring with soft-ace tracking.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total a hand can have without busting.
pub const BLACKJACK: u8 = 21;

/// Value removed from the total when a soft ace is demoted from 11 to 1.
const ACE_DEMOTION: u8 = 10;

/// Running score of a hand.
///
/// `total` counts every ace as 11 until that would bust the hand; each such
/// ace is then demoted to 1 and `soft_aces` drops by one. The demotion runs
/// after every card, so the score is always fully resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    total: u8,
    soft_aces: u8,
}

impl Score {
    /// Creates an empty score.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            soft_aces: 0,
        }
    }

    /// Adds a card to the score, demoting soft aces while the total is over 21.
    pub const fn apply_card(&mut self, card: Card) {
        self.total = self.total.saturating_add(card.value());
        if card.is_ace() {
            self.soft_aces += 1;
        }

        while self.total > BLACKJACK && self.soft_aces > 0 {
            self.total -= ACE_DEMOTION;
            self.soft_aces -= 1;
        }
    }

    /// Returns the current total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the number of aces still counted as 11.
    #[must_use]
    pub const fn soft_aces(&self) -> u8 {
        self.soft_aces
    }

    /// Returns whether the total is over 21 with no soft ace left to demote.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    /// Returns whether an ace is still counted as 11.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is below 21 and can still draw.
    Active,
    /// Hand has stopped drawing, either by choice or by reaching 21.
    Stand,
    /// Hand has busted (over 21).
    Bust,
}

/// Cards held by a player or the dealer, together with their score.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    score: Score,
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            score: Score::new(),
            status: HandStatus::Active,
        }
    }

    /// Adds a card to the hand and updates its status.
    ///
    /// A hand that reaches exactly 21 stands; a hand over 21 busts.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.score.apply_card(card);

        if self.score.is_bust() {
            self.status = HandStatus::Bust;
        } else if self.score.total() == BLACKJACK {
            self.status = HandStatus::Stand;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hand's score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Returns the current total of the hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.score.total()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.score.is_bust()
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.score.is_soft()
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Stops drawing. Has no effect on a busted hand.
    pub fn stand(&mut self) {
        if self.status == HandStatus::Active {
            self.status = HandStatus::Stand;
        }
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.score = Score::new();
        self.status = HandStatus::Active;
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
