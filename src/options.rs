//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_stands_at(18)
///     .with_stand_on_soft_17(false)
///     .with_dealer_up_card(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// The dealer keeps drawing while below this total.
    pub dealer_stands_at: u8,
    /// Whether the dealer stands on a soft total equal to `dealer_stands_at`.
    ///
    /// Named after the classic 17 threshold, but it applies at whatever
    /// total `dealer_stands_at` holds.
    pub stand_on_soft_17: bool,
    /// Cards dealt to each player before their turn.
    pub initial_cards: u8,
    /// Whether the dealer receives a face-up card during the deal.
    pub dealer_up_card: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: 17,
            stand_on_soft_17: true,
            initial_cards: 2,
            dealer_up_card: false,
        }
    }
}

impl GameOptions {
    /// Sets the total at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(16);
    /// assert_eq!(options.dealer_stands_at, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, total: u8) -> Self {
        self.dealer_stands_at = total;
        self
    }

    /// Sets whether the dealer stands on a soft total equal to the threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets how many cards each player receives before their turn.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_cards(1);
    /// assert_eq!(options.initial_cards, 1);
    /// ```
    #[must_use]
    pub const fn with_initial_cards(mut self, cards: u8) -> Self {
        self.initial_cards = cards;
        self
    }

    /// Sets whether the dealer shows a card during the deal.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_up_card(true);
    /// assert!(options.dealer_up_card);
    /// ```
    #[must_use]
    pub const fn with_dealer_up_card(mut self, up_card: bool) -> Self {
        self.dealer_up_card = up_card;
        self
    }
}
