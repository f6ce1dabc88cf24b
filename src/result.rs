//! Outcome resolution and round result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::hand::{BLACKJACK, Score};

/// Final total of a hand together with its bust flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    /// The hand total.
    pub total: u8,
    /// Whether the hand busted.
    pub bust: bool,
}

impl FinalScore {
    /// Creates a final score from a total, busting above 21.
    #[must_use]
    pub const fn new(total: u8) -> Self {
        Self {
            total,
            bust: total > BLACKJACK,
        }
    }
}

impl From<Score> for FinalScore {
    fn from(score: Score) -> Self {
        Self {
            total: score.total(),
            bust: score.is_bust(),
        }
    }
}

/// Result of a player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player beat the dealer.
    PlayerWon,
    /// The dealer beat the player.
    DealerWon,
    /// Both finished on the same total.
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerWon => "Player won!",
            Self::DealerWon => "Dealer won!",
            Self::Tie => "Tie!",
        })
    }
}

/// Decides the outcome of a finished hand.
///
/// A player bust loses even when the dealer also busts.
///
/// # Example
///
/// ```
/// use bjsim::{FinalScore, Outcome, resolve};
///
/// let outcome = resolve(FinalScore::new(20), FinalScore::new(19));
/// assert_eq!(outcome, Outcome::PlayerWon);
/// ```
#[must_use]
pub const fn resolve(player: FinalScore, dealer: FinalScore) -> Outcome {
    if player.bust {
        Outcome::DealerWon
    } else if dealer.bust || player.total > dealer.total {
        Outcome::PlayerWon
    } else if player.total < dealer.total {
        Outcome::DealerWon
    } else {
        Outcome::Tie
    }
}

/// Result for a single player after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: u8,
    /// The player's name.
    pub name: String,
    /// The player's final score.
    pub score: FinalScore,
    /// The outcome against the dealer.
    pub outcome: Outcome,
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final score (zero when the dealer never played).
    pub dealer: FinalScore,
}

impl RoundResult {
    /// Returns the result for the given player.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&PlayerResult> {
        self.players.iter().find(|p| p.player_id == player_id)
    }
}
