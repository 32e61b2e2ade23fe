use std::collections::HashSet;

use crate::cards::{Card, CardKind, Element};
use crate::player::Player;

/// Scorecard total at which the match ends.
pub const WINNING_SCORE: i32 = 15;

fn avatar_elements(player: &Player) -> Vec<Element> {
    player
        .higher_mind
        .iter()
        .filter(|c| c.kind == CardKind::Avatar)
        .map(|c| c.element)
        .collect()
}

/// Value a card contributes to its owner's Monkey Mind score: the face value,
/// or 0 while an avatar of the same element sits in the owner's Higher Mind.
pub fn effective_card_value(player: &Player, card: &Card) -> i32 {
    if avatar_elements(player).contains(&card.element) {
        0
    } else {
        card.value
    }
}

/// Sum of effective values over the whole Monkey Mind. Lower is better; this
/// is the metric the round-end comparison runs on. Pure in the player state.
pub fn monkey_mind_score(player: &Player) -> i32 {
    let avatars = avatar_elements(player);
    player
        .monkey_mind
        .iter()
        .map(|c| if avatars.contains(&c.element) { 0 } else { c.value })
        .sum()
}

pub fn scorecard_total(scorecard: &[Card]) -> i32 {
    scorecard.iter().map(|c| c.value).sum()
}

/// EP cards scoreable under the one-per-distinct-value rule, in Higher Mind
/// order (the first card of each value wins, which keeps the pick
/// deterministic for a given state).
fn one_ep_per_value(higher_mind: &[Card]) -> Vec<Card> {
    let mut seen_values = HashSet::new();
    higher_mind
        .iter()
        .filter(|c| c.is_ep() && seen_values.insert(c.value))
        .cloned()
        .collect()
}

/// Highest-value EP card in a Higher Mind; ties go to the first occurrence.
fn highest_ep(higher_mind: &[Card]) -> Option<&Card> {
    let mut best: Option<&Card> = None;
    for card in higher_mind.iter().filter(|c| c.is_ep()) {
        if best.is_none_or(|b| card.value > b.value) {
            best = Some(card);
        }
    }
    best
}

/// Moves the chosen cards from Higher Mind to Scorecard and recomputes the
/// player's score from the Scorecard sum.
fn bank_cards(player: &mut Player, cards: Vec<Card>) {
    player
        .higher_mind
        .retain(|c| !cards.iter().any(|banked| banked.id == c.id));
    player.scorecard.extend(cards);
    player.score = scorecard_total(&player.scorecard);
}

/// Satori: a Monkey Mind just emptied, so the player immediately banks EP
/// cards from their own Higher Mind under the one-per-value rule, independent
/// of turn or round status.
pub(crate) fn apply_satori_scoring(player: &mut Player) {
    let scored = one_ep_per_value(&player.higher_mind);
    bank_cards(player, scored);
}

/// Round-end distribution. The caller banks one EP per distinct value if
/// their Monkey Mind score is the minimum, nothing on a failed Zenji; every
/// other player at or below the caller's score (or at exactly 0) banks their
/// single highest EP. All scores are recomputed from Scorecards and the Zenji
/// flags cleared. Returns the winner: the first player in seating order at or
/// above [`WINNING_SCORE`].
pub(crate) fn distribute_round_scores(players: &mut [Player], caller_index: usize) -> Option<String> {
    let scores: Vec<i32> = players.iter().map(monkey_mind_score).collect();
    let min_score = scores.iter().copied().min().unwrap_or(0);
    let caller_score = scores[caller_index];

    for (i, player) in players.iter_mut().enumerate() {
        if i == caller_index {
            if caller_score == min_score {
                let scored = one_ep_per_value(&player.higher_mind);
                bank_cards(player, scored);
            }
            // failed Zenji: the caller banks nothing this round
        } else if scores[i] <= caller_score || scores[i] == 0 {
            if let Some(best) = highest_ep(&player.higher_mind).cloned() {
                bank_cards(player, vec![best]);
            }
        }
        player.score = scorecard_total(&player.scorecard);
        player.has_called_zenji = false;
    }

    players
        .iter()
        .find(|p| p.score >= WINNING_SCORE)
        .map(|p| p.id.clone())
}
