use crate::card::Card;
use crate::error::ActionError;
use crate::hand::HandStatus;

use super::{Game, GameState};

impl Game {
    /// Resolves `player_id` to its seat, checking that it may act now.
    fn ensure_player_turn(&self, player_id: u8) -> Result<usize, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let seat = self.seat_of(player_id)?;
        if self.current_seat() != Some(seat) {
            return Err(ActionError::NotYourTurn);
        }

        if self.players[seat].hand.status() != HandStatus::Active {
            return Err(ActionError::HandNotActive);
        }

        Ok(seat)
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching 21 stands the hand and a bust ends it; either way the turn
    /// passes to the next player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the player
    /// cannot be found, it is not the player's turn, or the hand is not
    /// active.
    pub fn hit(&mut self, player_id: u8) -> Result<Card, ActionError> {
        let seat = self.ensure_player_turn(player_id)?;

        let card = self.deck.deal_next();
        let hand = &mut self.players[seat].hand;
        hand.add_card(card);
        log::debug!(
            "player {player_id} hits {card}, total {} ({:?})",
            hand.value(),
            hand.status()
        );

        if hand.status() != HandStatus::Active {
            self.seat_next_active(seat + 1);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the player
    /// cannot be found, it is not the player's turn, or the hand is not
    /// active.
    pub fn stand(&mut self, player_id: u8) -> Result<(), ActionError> {
        let seat = self.ensure_player_turn(player_id)?;

        self.players[seat].hand.stand();
        log::debug!(
            "player {player_id} stands on {}",
            self.players[seat].hand.value()
        );

        self.seat_next_active(seat + 1);
        Ok(())
    }
}
