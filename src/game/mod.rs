//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::{ActionError, JoinError};
use crate::hand::HandStatus;
use crate::options::GameOptions;

mod actions;
mod deal;
mod dealer;
mod player;
mod round;
pub mod state;

pub use player::{Player, Role};
pub use round::{Decider, Decision};
pub use state::GameState;

/// A blackjack table: one deck, the seated players, and the dealer.
///
/// A round moves through [`GameState`]: [`deal`](Self::deal) starts the
/// player turns, [`hit`](Self::hit) and [`stand`](Self::stand) advance them,
/// [`dealer_play`](Self::dealer_play) runs the dealer policy, and
/// [`showdown`](Self::showdown) reports the outcomes.
/// [`play_round`](Self::play_round) drives all of it with a [`Decider`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    deck: Deck,
    state: GameState,
    /// Next player ID to assign; ids above `u8::MAX` mean the table is full.
    next_id: u16,
    /// Human players in seating order.
    players: Vec<Player>,
    dealer: Player,
    /// Seat index of the player whose turn it is.
    current: usize,
}

impl Game {
    /// Creates a new game whose deck is shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForPlayers);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut deck = Deck::new(seed);
        deck.shuffle();
        Self::with_deck(options, deck)
    }

    /// Creates a new game whose deck is shuffled from operating system entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(options: GameOptions) -> Self {
        let mut deck = Deck::from_entropy();
        deck.shuffle();
        Self::with_deck(options, deck)
    }

    /// Creates a new game dealing from the given deck as it is.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            options,
            deck,
            state: GameState::WaitingForPlayers,
            next_id: 0,
            players: Vec::new(),
            dealer: Player::dealer(),
            current: 0,
        }
    }

    /// Joins the table under the given name.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or every id is taken.
    pub fn join(&mut self, name: impl Into<String>) -> Result<u8, JoinError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }

        let id = u8::try_from(self.next_id).map_err(|_| JoinError::TableFull)?;
        self.next_id += 1;

        let player = Player::human(id, name.into());
        log::debug!("{} joined as player {id}", player.name());
        self.players.push(player);
        Ok(id)
    }

    /// Leaves the table.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the player is unknown.
    pub fn leave(&mut self, player_id: u8) -> Result<(), ActionError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(ActionError::InvalidState);
        }

        let index = self.seat_of(player_id)?;
        self.players.remove(index);
        Ok(())
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the seated players in order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given id.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == Some(player_id))
    }

    /// Returns the dealer's seat.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards left before the deck reshuffles.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` outside of the player turns.
    #[must_use]
    pub fn current_player(&self) -> Option<u8> {
        self.current_seat()
            .and_then(|index| self.players.get(index))
            .and_then(Player::id)
    }

    fn current_seat(&self) -> Option<usize> {
        (self.state == GameState::PlayerTurn && self.current < self.players.len())
            .then_some(self.current)
    }

    fn seat_of(&self, player_id: u8) -> Result<usize, ActionError> {
        self.players
            .iter()
            .position(|p| p.id() == Some(player_id))
            .ok_or(ActionError::PlayerNotFound)
    }

    /// Moves the turn to the first active hand at or after seat `from`.
    ///
    /// Ends the player turns when no active hand is left.
    fn seat_next_active(&mut self, from: usize) {
        let next = self
            .players
            .iter()
            .skip(from)
            .position(|p| p.hand.status() == HandStatus::Active);

        if let Some(offset) = next {
            self.current = from + offset;
            log::debug!("turn passes to {}", self.players[self.current].name());
        } else {
            self.finish_player_turns();
        }
    }

    fn finish_player_turns(&mut self) {
        self.current = self.players.len();
        self.state = if self.players.iter().all(|p| p.hand.is_bust()) {
            GameState::Resolved
        } else {
            GameState::DealerTurn
        };
        log::debug!("player turns over, entering {:?}", self.state);
    }

    /// Clears all hands (called at the end of a round).
    ///
    /// The deck keeps its position, so the next round continues dealing
    /// where this one stopped.
    pub fn clear_round(&mut self) {
        for player in &mut self.players {
            player.hand.clear();
        }
        self.dealer.hand.clear();
        self.current = 0;
        self.state = GameState::WaitingForPlayers;
    }
}
