//! A single 52-card deck dealt through a cursor.

use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A standard 52-card deck.
///
/// Cards are never removed: dealing advances a cursor over a fixed
/// permutation of the 52 cards. Once every card has been dealt, the next
/// [`deal_next`](Self::deal_next) reshuffles and starts over.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    cursor: usize,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, unshuffled deck whose shuffles are driven by `seed`.
    ///
    /// Call [`shuffle`](Self::shuffle) before dealing.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a full, unshuffled deck seeded from operating system entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    const fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            cards: Self::canonical(),
            cursor: 0,
            rng,
        }
    }

    /// Creates a deck that deals `order` as given, then reshuffles with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `order` does not hold exactly 52 cards or repeats a
    /// card.
    pub fn from_order(order: &[Card], seed: u64) -> Result<Self, DeckError> {
        if order.len() != DECK_SIZE {
            return Err(DeckError::WrongLength(order.len()));
        }

        let mut seen = [false; DECK_SIZE];
        let mut deck = Self::new(seed);
        for (slot, &card) in deck.cards.iter_mut().zip(order) {
            let ordinal = card.ordinal();
            if seen[ordinal] {
                return Err(DeckError::DuplicateCard(card));
            }
            seen[ordinal] = true;
            *slot = card;
        }

        Ok(deck)
    }

    /// Creates a deck that deals `front` first, followed by the remaining
    /// cards in canonical order.
    ///
    /// # Errors
    ///
    /// Returns an error if `front` repeats a card.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Card, Deck, Rank, Suit};
    ///
    /// let ace = Card::new(Suit::Spades, Rank::Ace);
    /// let mut deck = Deck::stacked(&[ace], 7).unwrap();
    /// assert_eq!(deck.deal_next(), ace);
    /// ```
    pub fn stacked(front: &[Card], seed: u64) -> Result<Self, DeckError> {
        let mut order = front.to_vec();
        order.extend(
            Self::canonical()
                .into_iter()
                .filter(|card| !front.contains(card)),
        );
        Self::from_order(&order, seed)
    }

    const fn canonical() -> [Card; DECK_SIZE] {
        let mut cards = [Card::new(Suit::Clubs, Rank::Two); DECK_SIZE];
        let mut s = 0;
        while s < Suit::ALL.len() {
            let mut r = 0;
            while r < Rank::ALL.len() {
                cards[s * Rank::ALL.len() + r] = Card::new(Suit::ALL[s], Rank::ALL[r]);
                r += 1;
            }
            s += 1;
        }
        cards
    }

    /// Shuffles the whole deck and rewinds the cursor.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.cursor = 0;
        log::debug!("deck shuffled");
    }

    /// Deals the card under the cursor and advances it.
    ///
    /// When all 52 cards have already been dealt the deck is reshuffled first,
    /// so dealing never runs out.
    pub fn deal_next(&mut self) -> Card {
        if self.cursor >= DECK_SIZE {
            log::debug!("deck exhausted, reshuffling");
            self.shuffle();
        }

        let card = self.cards[self.cursor];
        self.cursor += 1;
        log::trace!("dealt {card} ({} left)", self.remaining());
        card
    }

    /// Returns the index of the next card to deal.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns how many cards are left before the next reshuffle.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.cursor
    }

    /// Returns the cards in dealing order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str("\t")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
