use crate::card::Card;
use crate::error::RoundError;
use crate::hand::Score;
use crate::result::RoundResult;

use super::{Game, GameState, Player, Role};

/// A player's choice while their hand is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl Decision {
    /// Parses a `y`/`n` answer from its first non-blank character.
    ///
    /// Returns `None` for anything else, including an empty line.
    ///
    /// ```
    /// use bjsim::Decision;
    ///
    /// assert_eq!(Decision::parse(" yes\n"), Some(Decision::Hit));
    /// assert_eq!(Decision::parse("N"), Some(Decision::Stand));
    /// assert_eq!(Decision::parse("x"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim_start().chars().next()? {
            'y' | 'Y' => Some(Self::Hit),
            'n' | 'N' => Some(Self::Stand),
            _ => None,
        }
    }
}

/// Supplies hit/stand decisions to [`Game::play_round`].
pub trait Decider {
    /// Chooses the next action for `player`, whose hand is still active.
    fn decide(&mut self, player: &Player, dealer: &Player) -> Decision;

    /// Called for every card dealt during the round, with the receiver's score
    /// right after that card.
    fn card_dealt(&mut self, player: &Player, card: Card, score: Score) {
        let _ = (player, card, score);
    }
}

/// Reports the cards of `player`'s hand from index `from` on, replaying the
/// score so each report carries the running total.
fn report_cards<D: Decider + ?Sized>(decider: &mut D, player: &Player, from: usize) {
    let mut score = Score::new();
    for (index, &card) in player.hand.cards().iter().enumerate() {
        score.apply_card(card);
        if index >= from {
            decider.card_dealt(player, card, score);
        }
    }
}

impl Game {
    /// Plays a whole round: deal, player turns, dealer turn, showdown.
    ///
    /// The game is left in [`GameState::Resolved`]; call
    /// [`clear_round`](Self::clear_round) before the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a new round or nobody
    /// has joined.
    pub fn play_round<D: Decider + ?Sized>(
        &mut self,
        decider: &mut D,
    ) -> Result<RoundResult, RoundError> {
        self.deal()?;

        for player in &self.players {
            report_cards(decider, player, 0);
        }
        report_cards(decider, &self.dealer, 0);

        while let Some(seat) = self.current_seat() {
            let player = &self.players[seat];
            let Role::Human(player_id) = player.role() else {
                break;
            };

            match decider.decide(player, &self.dealer) {
                Decision::Hit => {
                    self.hit(player_id)?;
                    let player = &self.players[seat];
                    report_cards(decider, player, player.hand.len() - 1);
                }
                Decision::Stand => self.stand(player_id)?,
            }
        }

        if self.state == GameState::DealerTurn {
            let before = self.dealer.hand.len();
            self.dealer_play()?;
            report_cards(decider, &self.dealer, before);
        }

        Ok(self.showdown()?)
    }
}
