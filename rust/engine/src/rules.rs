//! Turn engine: one pure transition function per player action.
//!
//! Every function takes the current [`MatchState`] by reference and returns a
//! freshly built state (or a [`GameError`] with the input untouched). Nothing
//! here blocks or retries; serializing actions is the caller's job. Functions
//! that may reshuffle a pile take the match RNG explicitly.

use rand_chacha::ChaCha20Rng;

use crate::cards::{Card, DECK_SIZE};
use crate::deck::shuffle_pile;
use crate::errors::GameError;
use crate::game::{MatchState, MatchStatus};
use crate::player::{HIGHER_MIND_CAPACITY, MONKEY_MIND_SIZE};
use crate::scoring::{self, WINNING_SCORE};

fn require_player(state: &MatchState, player_id: &str) -> Result<usize, GameError> {
    state.player_index(player_id).ok_or_else(|| GameError::PlayerNotFound {
        id: player_id.to_string(),
    })
}

/// Flips a waiting match to active. No other field changes.
pub fn start_match(state: &MatchState) -> MatchState {
    let mut next = state.clone();
    next.status = MatchStatus::Active;
    next
}

/// One-time reveal of a player's own Monkey Mind.
///
/// Fails with [`GameError::AlreadyChecked`] on a second attempt in the same
/// round; the flag is cleared again when the next round is dealt.
pub fn check_cards(state: &MatchState, player_id: &str) -> Result<MatchState, GameError> {
    let idx = require_player(state, player_id)?;
    if state.players[idx].has_checked_cards {
        return Err(GameError::AlreadyChecked);
    }

    let mut next = state.clone();
    let player = &mut next.players[idx];
    let ids: Vec<String> = player.monkey_mind.iter().map(|c| c.id.clone()).collect();
    player.visible_cards.extend(ids);
    player.has_checked_cards = true;
    Ok(next)
}

/// Closes a peek window: re-hides the player's Monkey Mind except for cards
/// of value 5, which stay face-up.
pub fn update_card_visibility(state: &MatchState, player_id: &str) -> Result<MatchState, GameError> {
    let idx = require_player(state, player_id)?;

    let mut next = state.clone();
    let player = &mut next.players[idx];
    let mut show = Vec::new();
    let mut hide = Vec::new();
    for card in &player.monkey_mind {
        if card.value == 5 {
            show.push(card.id.clone());
        } else {
            hide.push(card.id.clone());
        }
    }
    for id in hide {
        player.visible_cards.remove(&id);
    }
    player.visible_cards.extend(show);
    Ok(next)
}

/// Removes and returns the top card of the Future Pile for the player whose
/// turn it is. An empty Future Pile is first refilled by shuffling the entire
/// Past Pile; the drawn card is in transit until the caller routes it via
/// [`discard_to_past`] or [`exchange_monkey_mind_card`].
pub fn draw_from_future(
    state: &MatchState,
    player_id: &str,
    rng: &mut ChaCha20Rng,
) -> Result<(MatchState, Card), GameError> {
    let idx = require_player(state, player_id)?;
    if idx != state.current_turn || state.status != MatchStatus::Active {
        return Err(GameError::NotYourTurn {
            id: player_id.to_string(),
        });
    }

    let mut next = state.clone();
    if next.future_pile.is_empty() {
        let past = std::mem::take(&mut next.past_pile);
        next.future_pile = shuffle_pile(past, rng);
    }
    if next.future_pile.is_empty() {
        // 61 cards circulate and hands hold at most 48, so both piles can
        // only be empty on a state the engine never produces itself
        return Err(GameError::EmptyPastPile);
    }
    let card = next.future_pile.remove(0);
    Ok((next, card))
}

/// Prepends a card in transit to the Past Pile. The caller is trusted to pass
/// a card already removed from its previous location.
pub fn discard_to_past(state: &MatchState, card: Card) -> MatchState {
    let mut next = state.clone();
    next.past_pile.insert(0, card);
    next
}

/// Swaps `new_card` into the Monkey Mind at `replace_index` and returns the
/// replaced card for further routing. The incoming card is immediately
/// visible to its owner.
pub fn exchange_monkey_mind_card(
    state: &MatchState,
    player_id: &str,
    new_card: Card,
    replace_index: usize,
) -> Result<(MatchState, Card), GameError> {
    let idx = require_player(state, player_id)?;
    let hand_len = state.players[idx].monkey_mind.len();
    if replace_index >= hand_len {
        return Err(GameError::InvalidCardIndex {
            index: replace_index,
            len: hand_len,
        });
    }

    let mut next = state.clone();
    let player = &mut next.players[idx];
    player.visible_cards.insert(new_card.id.clone());
    let replaced = std::mem::replace(&mut player.monkey_mind[replace_index], new_card);
    Ok((next, replaced))
}

/// Appends a card to the player's Higher Mind. Only EP cards (element kind,
/// value 1-4), avatars and magic cards are eligible, and the Higher Mind
/// holds at most [`HIGHER_MIND_CAPACITY`] cards.
pub fn add_to_higher_mind(
    state: &MatchState,
    player_id: &str,
    card: Card,
) -> Result<MatchState, GameError> {
    let idx = require_player(state, player_id)?;
    if !card.higher_mind_eligible() {
        return Err(GameError::IneligibleCard { name: card.name });
    }
    if state.players[idx].higher_mind.len() >= HIGHER_MIND_CAPACITY {
        return Err(GameError::HigherMindFull);
    }

    let mut next = state.clone();
    next.players[idx].higher_mind.push(card);
    Ok(next)
}

/// Advances the turn pointer. Deliberately unvalidated: the caller decides
/// when a turn is over.
pub fn end_turn(state: &MatchState) -> MatchState {
    let mut next = state.clone();
    next.current_turn = (next.current_turn + 1) % next.players.len();
    next
}

/// Declares Zenji: a one-way trigger that ends the active-play phase of the
/// round. Only the player whose turn it is may call.
pub fn call_zenji(state: &MatchState, player_id: &str) -> Result<MatchState, GameError> {
    let idx = require_player(state, player_id)?;
    if idx != state.current_turn {
        return Err(GameError::NotYourTurn {
            id: player_id.to_string(),
        });
    }

    let mut next = state.clone();
    next.players[idx].has_called_zenji = true;
    next.zenji_lock = Some(player_id.to_string());
    next.status = MatchStatus::RoundEnd;
    Ok(next)
}

/// Attempts to knock a Monkey Mind card out against the top of the Past Pile.
///
/// On a value match the card moves to the Past Pile; emptying the hand this
/// way is Satori and banks the player's Higher Mind EPs on the spot, ending
/// the game at [`WINNING_SCORE`]. On a mismatch the player draws a penalty
/// card into the Monkey Mind, or into the Higher Mind when the hand is full
/// (the one path that skips the eligibility filter). Zero Mind cards cannot
/// be knocked out at all.
pub fn knock_out_card(
    state: &MatchState,
    player_id: &str,
    card_index: usize,
    rng: &mut ChaCha20Rng,
) -> Result<MatchState, GameError> {
    let idx = require_player(state, player_id)?;
    let top_value = state
        .past_pile
        .first()
        .map(|c| c.value)
        .ok_or(GameError::EmptyPastPile)?;
    let hand_len = state.players[idx].monkey_mind.len();
    if card_index >= hand_len {
        return Err(GameError::InvalidCardIndex {
            index: card_index,
            len: hand_len,
        });
    }
    let target = &state.players[idx].monkey_mind[card_index];
    if target.is_zero_mind() {
        return Err(GameError::CardProtected);
    }

    let mut next = state.clone();
    if target.value != top_value {
        // Wrong call: the offender draws a penalty card. The Past Pile holds
        // at least the comparison card, so the recycle always yields a draw.
        if next.future_pile.is_empty() {
            let past = std::mem::take(&mut next.past_pile);
            next.future_pile = shuffle_pile(past, rng);
        }
        let penalty = next.future_pile.remove(0);
        let player = &mut next.players[idx];
        if player.monkey_mind.len() < MONKEY_MIND_SIZE {
            player.monkey_mind.push(penalty);
        } else {
            player.higher_mind.push(penalty);
        }
        return Ok(next);
    }

    let card = next.players[idx].monkey_mind.remove(card_index);
    next.past_pile.insert(0, card);

    if next.players[idx].monkey_mind.is_empty() {
        scoring::apply_satori_scoring(&mut next.players[idx]);
        if next.players[idx].score >= WINNING_SCORE {
            next.winner = Some(next.players[idx].id.clone());
            next.status = MatchStatus::GameEnd;
        }
    }
    Ok(next)
}

/// Settles the round the Zenji call locked in: runs the score distribution,
/// then either ends the game or sweeps every card outside the Scorecards into
/// a fresh shuffled deck, deals new 4-card Monkey Minds, clears Higher Minds
/// and the per-round flags, and hands the first turn to the player after the
/// caller.
pub fn end_round(state: &MatchState, rng: &mut ChaCha20Rng) -> Result<MatchState, GameError> {
    let caller_id = state.zenji_lock.clone().ok_or(GameError::NoZenjiCaller)?;
    let caller_idx = state
        .player_index(&caller_id)
        .ok_or(GameError::PlayerNotFound { id: caller_id })?;

    let mut next = state.clone();
    if let Some(winner_id) = scoring::distribute_round_scores(&mut next.players, caller_idx) {
        next.winner = Some(winner_id);
        next.status = MatchStatus::GameEnd;
        return Ok(next);
    }

    // Sweep the table; banked Scorecard cards stay out of circulation
    let mut all_cards = Vec::with_capacity(DECK_SIZE);
    all_cards.append(&mut next.future_pile);
    all_cards.append(&mut next.past_pile);
    for player in &mut next.players {
        all_cards.append(&mut player.monkey_mind);
        all_cards.append(&mut player.higher_mind);
    }
    let mut fresh = shuffle_pile(all_cards, rng);

    for player in &mut next.players {
        player.monkey_mind = fresh.drain(..MONKEY_MIND_SIZE).collect();
        player.visible_cards.clear();
        player.has_checked_cards = false;
    }
    next.future_pile = fresh;
    next.status = MatchStatus::Active;
    next.round_number += 1;
    next.zenji_lock = None;
    next.current_turn = (caller_idx + 1) % next.players.len();
    Ok(next)
}
