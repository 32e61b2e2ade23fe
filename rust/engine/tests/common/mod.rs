#![allow(dead_code)]

use zenji_engine::cards::{full_deck, Card, DECK_SIZE};
use zenji_engine::game::{MatchState, MatchStatus};
use zenji_engine::player::Player;

/// Removes the first card with the given name from a pile.
pub fn pick(pool: &mut Vec<Card>, name: &str) -> Card {
    let i = pool
        .iter()
        .position(|c| c.name == name)
        .unwrap_or_else(|| panic!("{name} not available"));
    pool.remove(i)
}

/// A conserved two-seat active match with rigged hands, an optional Past Pile
/// top card and everything else left in the Future Pile.
pub fn rigged(p1_hand: &[&str], p2_hand: &[&str], past_top: Option<&str>) -> MatchState {
    let mut pool = full_deck();
    let h1: Vec<Card> = p1_hand.iter().map(|n| pick(&mut pool, n)).collect();
    let h2: Vec<Card> = p2_hand.iter().map(|n| pick(&mut pool, n)).collect();
    let past_pile = past_top.map(|n| vec![pick(&mut pool, n)]).unwrap_or_default();

    let mut p1 = Player::new("player_1", "P1", false);
    p1.monkey_mind = h1;
    let mut p2 = Player::new("player_2", "P2", false);
    p2.monkey_mind = h2;

    MatchState {
        players: vec![p1, p2],
        current_turn: 0,
        future_pile: pool,
        past_pile,
        status: MatchStatus::Active,
        round_number: 1,
        zenji_lock: None,
        winner: None,
    }
}

/// Sorted ids of every card anywhere in the state, plus any cards in transit.
pub fn all_ids(state: &MatchState, in_transit: &[Card]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::with_capacity(DECK_SIZE);
    for p in &state.players {
        ids.extend(p.monkey_mind.iter().map(|c| c.id.clone()));
        ids.extend(p.higher_mind.iter().map(|c| c.id.clone()));
        ids.extend(p.scorecard.iter().map(|c| c.id.clone()));
    }
    ids.extend(state.future_pile.iter().map(|c| c.id.clone()));
    ids.extend(state.past_pile.iter().map(|c| c.id.clone()));
    ids.extend(in_transit.iter().map(|c| c.id.clone()));
    ids.sort();
    ids
}

/// Sorted ids of the full 61-card deck.
pub fn full_deck_ids() -> Vec<String> {
    let mut ids: Vec<String> = full_deck().into_iter().map(|c| c.id).collect();
    ids.sort();
    ids
}
