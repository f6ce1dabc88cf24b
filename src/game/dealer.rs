use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{FinalScore, PlayerResult, RoundResult, resolve};

use super::{Game, GameState};

impl Game {
    /// Returns whether the dealer must draw another card.
    fn dealer_must_hit(&self) -> bool {
        let hand = &self.dealer.hand;
        if hand.is_bust() {
            return false;
        }

        let value = hand.value();
        let threshold = self.options.dealer_stands_at;

        value < threshold || (value == threshold && hand.is_soft() && !self.options.stand_on_soft_17)
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer takes one card, then keeps drawing without any decision
    /// while below [`dealer_stands_at`](crate::GameOptions::dealer_stands_at).
    /// If `stand_on_soft_17` is false, a soft total equal to the threshold
    /// also draws. A bust always stops the dealer, whatever the threshold.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        loop {
            let card = self.deck.deal_next();
            self.dealer.hand.add_card(card);
            drawn_cards.push(card);

            if !self.dealer_must_hit() {
                break;
            }
        }

        log::debug!(
            "dealer drew {} card(s), total {}",
            drawn_cards.len(),
            self.dealer.hand.value()
        );
        self.state = GameState::Resolved;

        Ok(drawn_cards)
    }

    /// Compares every player's hand with the dealer's.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not resolved yet.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Resolved {
            return Err(ShowdownError::InvalidState);
        }

        let dealer = FinalScore::from(self.dealer.hand.score());

        let players = self
            .players
            .iter()
            .filter_map(|player| {
                let player_id = player.id()?;
                let score = FinalScore::from(player.hand.score());
                let outcome = resolve(score, dealer);
                log::info!(
                    "{} {} against dealer {}: {outcome}",
                    player.name(),
                    score.total,
                    dealer.total
                );
                Some(PlayerResult {
                    player_id,
                    name: player.name().into(),
                    score,
                    outcome,
                })
            })
            .collect();

        Ok(RoundResult { players, dealer })
    }
}
