use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use zenji_engine::cards::{full_deck, Card, DECK_SIZE};
use zenji_engine::deck::{shuffle_pile, Deck};

#[test]
fn deck_deals_61_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    let mut seen = HashSet::new();
    for i in 0..DECK_SIZE {
        let c = deck.deal_card().expect("should have 61 cards");
        assert!(seen.insert(c.id.clone()), "card {} duplicated at position {}", c.name, i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 61 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = d1.deal(10);
    let b: Vec<Card> = d2.deal(10);
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = d1.deal(10);
    let b: Vec<Card> = d2.deal(10);
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn into_pile_returns_exactly_the_undealt_remainder() {
    let mut deck = Deck::new_with_seed(7);
    deck.shuffle();
    let dealt = deck.deal(8);
    assert_eq!(deck.remaining(), DECK_SIZE - 8);

    let pile = deck.into_pile();
    assert_eq!(pile.len(), DECK_SIZE - 8);

    let mut ids: HashSet<String> = dealt.iter().map(|c| c.id.clone()).collect();
    for c in &pile {
        assert!(ids.insert(c.id.clone()), "{} dealt and in the pile", c.name);
    }
    assert_eq!(ids.len(), DECK_SIZE);
}

#[test]
fn shuffle_pile_permutes_without_losing_cards() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let pile = full_deck();
    let before: HashSet<String> = pile.iter().map(|c| c.id.clone()).collect();

    let shuffled = shuffle_pile(pile, &mut rng);
    let after: HashSet<String> = shuffled.iter().map(|c| c.id.clone()).collect();
    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_eq!(before, after);
}
