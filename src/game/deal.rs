use crate::error::DealError;

use super::{Game, GameState};

impl Game {
    /// Deals the opening cards and starts the player turns.
    ///
    /// Each pass deals one card to every player in seating order; the dealer
    /// takes a face-up card after the first pass when
    /// [`dealer_up_card`](crate::GameOptions::dealer_up_card) is set, even
    /// when [`initial_cards`](crate::GameOptions::initial_cards) is zero. Players
    /// already on 21 skip their turn, and if nobody is left to act the game
    /// moves straight to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or nobody has joined.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(DealError::InvalidState);
        }

        if self.players.is_empty() {
            return Err(DealError::NoPlayers);
        }

        let passes = self.options.initial_cards;
        // One pass runs even with no opening cards so the up card is still dealt.
        for pass in 0..passes.max(1) {
            if pass < passes {
                for player in &mut self.players {
                    player.hand.add_card(self.deck.deal_next());
                }
            }
            if pass == 0 && self.options.dealer_up_card {
                self.dealer.hand.add_card(self.deck.deal_next());
            }
        }

        log::debug!("dealt opening hands to {} player(s)", self.players.len());
        self.state = GameState::PlayerTurn;
        self.seat_next_active(0);
        Ok(())
    }
}
