//! Deck tests.

use std::collections::HashSet;

use bjsim::{Card, DECK_SIZE, Deck, DeckError, Rank, Suit};
use proptest::prelude::*;

fn is_full_deck(cards: &[Card]) -> bool {
    cards.len() == DECK_SIZE && cards.iter().collect::<HashSet<_>>().len() == DECK_SIZE
}

#[test]
fn new_deck_is_canonical() {
    let deck = Deck::new(0);
    assert_eq!(deck.cursor(), 0);
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(deck.cards()[0], Card::new(Suit::Clubs, Rank::Two));
    assert_eq!(deck.cards()[12], Card::new(Suit::Clubs, Rank::Ace));
    assert_eq!(deck.cards()[13], Card::new(Suit::Diamonds, Rank::Two));
    assert_eq!(deck.cards()[51], Card::new(Suit::Spades, Rank::Ace));
    assert!(is_full_deck(deck.cards()));
}

#[test]
fn shuffle_is_seeded_and_fresh_each_call() {
    let mut a = Deck::new(7);
    let mut b = Deck::new(7);
    a.shuffle();
    b.shuffle();
    assert_eq!(a.cards(), b.cards());

    let first = *a.cards();
    a.shuffle();
    assert_ne!(&first, a.cards());
    assert!(is_full_deck(a.cards()));
}

#[test]
fn shuffle_rewinds_cursor() {
    let mut deck = Deck::new(1);
    deck.shuffle();
    deck.deal_next();
    deck.deal_next();
    assert_eq!(deck.cursor(), 2);

    deck.shuffle();
    assert_eq!(deck.cursor(), 0);
}

#[test]
fn deals_in_order_then_reshuffles() {
    let mut deck = Deck::new(3);
    deck.shuffle();
    let order = *deck.cards();

    let dealt: Vec<Card> = (0..DECK_SIZE).map(|_| deck.deal_next()).collect();
    assert_eq!(dealt, order);
    assert_eq!(deck.remaining(), 0);

    // The 53rd deal reshuffles first and still yields a real card.
    let next = deck.deal_next();
    assert_eq!(deck.cursor(), 1);
    assert_eq!(deck.cards()[0], next);
    assert!(is_full_deck(deck.cards()));
}

#[test]
fn every_cycle_is_a_full_deck() {
    let mut deck = Deck::new(5);
    deck.shuffle();

    let dealt: Vec<Card> = (0..DECK_SIZE * 2).map(|_| deck.deal_next()).collect();
    assert!(is_full_deck(&dealt[..DECK_SIZE]));
    assert!(is_full_deck(&dealt[DECK_SIZE..]));
}

#[test]
fn stacked_deck_deals_front_first() {
    let front = [
        Card::new(Suit::Hearts, Rank::Ace),
        Card::new(Suit::Clubs, Rank::Two),
    ];
    let mut deck = Deck::stacked(&front, 1).unwrap();
    assert!(is_full_deck(deck.cards()));

    assert_eq!(deck.deal_next(), front[0]);
    assert_eq!(deck.deal_next(), front[1]);
    // Canonical order resumes, skipping the stacked Two of Clubs.
    assert_eq!(deck.deal_next(), Card::new(Suit::Clubs, Rank::Three));
}

#[test]
fn explicit_orders_are_validated() {
    let canonical = *Deck::new(0).cards();

    assert_eq!(
        Deck::from_order(&canonical[..51], 0).unwrap_err(),
        DeckError::WrongLength(51)
    );

    let mut repeated = canonical;
    repeated[51] = repeated[0];
    assert_eq!(
        Deck::from_order(&repeated, 0).unwrap_err(),
        DeckError::DuplicateCard(canonical[0])
    );

    let twice = [Card::new(Suit::Hearts, Rank::Nine); 2];
    assert_eq!(
        Deck::stacked(&twice, 0).unwrap_err(),
        DeckError::DuplicateCard(twice[0])
    );

    let mut reversed = canonical;
    reversed.reverse();
    let deck = Deck::from_order(&reversed, 0).unwrap();
    assert_eq!(deck.cards(), &reversed);
}

#[test]
fn display_lists_every_card() {
    let deck = Deck::new(0);
    let printed = deck.to_string();
    let symbols: Vec<&str> = printed.split('\t').collect();
    assert_eq!(symbols.len(), DECK_SIZE);
    assert_eq!(symbols[0], "2C");
    assert_eq!(symbols[51], "AS");
}

proptest! {
    #[test]
    fn shuffles_are_permutations(seed in any::<u64>(), shuffles in 1usize..4) {
        let mut deck = Deck::new(seed);
        for _ in 0..shuffles {
            deck.shuffle();
        }
        prop_assert!(is_full_deck(deck.cards()));
    }

    #[test]
    fn dealing_never_runs_out(seed in any::<u64>(), deals in 0usize..200) {
        let mut deck = Deck::new(seed);
        deck.shuffle();
        for _ in 0..deals {
            deck.deal_next();
        }
        prop_assert!(deck.cursor() <= DECK_SIZE);
        prop_assert!(is_full_deck(deck.cards()));
    }
}
