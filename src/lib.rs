//! A single-deck blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Deck`] dealt through a cursor, a soft-ace aware
//! [`Score`], and a [`Game`] type that runs the round: player turns, the
//! fixed dealer policy, and the showdown.
//!
//! # Example
//!
//! ```
//! use bjsim::{Decider, Decision, Game, GameOptions, Player};
//!
//! struct StandOnTwelve;
//!
//! impl Decider for StandOnTwelve {
//!     fn decide(&mut self, player: &Player, _dealer: &Player) -> Decision {
//!         if player.hand().value() < 12 { Decision::Hit } else { Decision::Stand }
//!     }
//! }
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let id = game.join("Player").unwrap();
//! let result = game.play_round(&mut StandOnTwelve).unwrap();
//! assert!(result.player(id).is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError, JoinError, RoundError, ShowdownError};
pub use game::{Decider, Decision, Game, GameState, Player, Role};
pub use hand::{BLACKJACK, Hand, HandStatus, Score};
pub use options::GameOptions;
pub use result::{FinalScore, Outcome, PlayerResult, RoundResult, resolve};
