//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a deck from an explicit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The order does not hold exactly 52 cards.
    #[error("a deck needs exactly 52 cards, got {0}")]
    WrongLength(usize),
    /// The order contains the same card twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur when joining the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Players can only join between rounds.
    #[error("invalid game state for joining")]
    InvalidState,
    /// No more player ids are available.
    #[error("the table is full")]
    TableFull,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Nobody has joined the table.
    #[error("no players at the table")]
    NoPlayers,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Hand is not active.
    #[error("hand is not active")]
    HandNotActive,
}

/// Errors that can occur during dealer play and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Errors that can occur while driving a whole round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Dealing the opening cards failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealer play or showdown failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
