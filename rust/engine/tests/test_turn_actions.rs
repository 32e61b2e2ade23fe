mod common;

use common::{pick, rigged};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use zenji_engine::cards::full_deck;
use zenji_engine::engine::Engine;
use zenji_engine::errors::GameError;
use zenji_engine::game::MatchStatus;
use zenji_engine::rules;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0)
}

const P2_HAND: [&str; 4] = ["Air 5", "Air 6", "Air 7", "Air 8"];

#[test]
fn check_cards_reveals_the_whole_hand_once() {
    let state = rigged(&["Earth 12", "Fire 9", "Water 6", "Zero Mind"], &P2_HAND, None);

    let checked = rules::check_cards(&state, "player_1").unwrap();
    let p1 = &checked.players[0];
    assert!(p1.has_checked_cards);
    assert!(p1.monkey_mind.iter().all(|c| p1.can_see(&c.id)));
    // the opponent's view is untouched
    assert!(checked.players[1].visible_cards.is_empty());
    // and so is the caller's input snapshot
    assert!(!state.players[0].has_checked_cards);

    assert_eq!(
        rules::check_cards(&checked, "player_1").unwrap_err(),
        GameError::AlreadyChecked
    );
}

#[test]
fn unknown_players_are_rejected() {
    let state = rigged(&["Earth 12", "Fire 9", "Water 6", "Zero Mind"], &P2_HAND, None);
    assert!(matches!(
        rules::check_cards(&state, "ghost"),
        Err(GameError::PlayerNotFound { .. })
    ));
    assert!(matches!(
        rules::update_card_visibility(&state, "ghost"),
        Err(GameError::PlayerNotFound { .. })
    ));
    assert!(matches!(
        rules::draw_from_future(&state, "ghost", &mut rng()),
        Err(GameError::PlayerNotFound { .. })
    ));
}

#[test]
fn closing_the_peek_window_keeps_only_fives_visible() {
    // the avatar is worth 5, so it stays face up alongside the Air 5
    let state = rigged(
        &["Air 5", "Fire 9", "Water Avatar", "Zero Mind"],
        &["Earth 5", "Earth 6", "Earth 7", "Earth 8"],
        None,
    );

    let checked = rules::check_cards(&state, "player_1").unwrap();
    let hidden = rules::update_card_visibility(&checked, "player_1").unwrap();
    let p1 = &hidden.players[0];
    assert!(p1.can_see(&p1.monkey_mind[0].id), "Air 5 stays visible");
    assert!(!p1.can_see(&p1.monkey_mind[1].id), "Fire 9 is re-hidden");
    assert!(p1.can_see(&p1.monkey_mind[2].id), "the avatar is worth 5");
    assert!(!p1.can_see(&p1.monkey_mind[3].id), "Zero Mind is re-hidden");
}

#[test]
fn draw_requires_the_active_player_on_an_active_match() {
    let state = rigged(&["Earth 12", "Fire 9", "Water 6", "Zero Mind"], &P2_HAND, None);

    assert!(matches!(
        rules::draw_from_future(&state, "player_2", &mut rng()),
        Err(GameError::NotYourTurn { .. })
    ));

    let mut waiting = state.clone();
    waiting.status = MatchStatus::Waiting;
    assert!(matches!(
        rules::draw_from_future(&waiting, "player_1", &mut rng()),
        Err(GameError::NotYourTurn { .. })
    ));
}

#[test]
fn draw_takes_the_top_of_the_future_pile() {
    let state = rigged(&["Earth 12", "Fire 9", "Water 6", "Zero Mind"], &P2_HAND, None);
    let expected = state.future_pile[0].clone();

    let (next, card) = rules::draw_from_future(&state, "player_1", &mut rng()).unwrap();
    assert_eq!(card, expected);
    assert_eq!(next.future_pile.len(), state.future_pile.len() - 1);
    assert!(next.future_pile.iter().all(|c| c.id != card.id));
    // the old snapshot still owns its top card
    assert_eq!(state.future_pile[0], card);
}

#[test]
fn draw_recycles_a_shuffled_past_pile_when_future_runs_dry() {
    let mut state = rigged(&["Earth 12", "Fire 9", "Water 6", "Zero Mind"], &P2_HAND, None);
    state.past_pile = std::mem::take(&mut state.future_pile);
    let circulating = state.past_pile.len();

    let (next, card) = rules::draw_from_future(&state, "player_1", &mut rng()).unwrap();
    assert!(next.past_pile.is_empty(), "the past pile was recycled");
    assert_eq!(next.future_pile.len(), circulating - 1);
    assert!(state.past_pile.iter().any(|c| c.id == card.id));
}

#[test]
fn discard_prepends_to_the_past_pile() {
    let state = rigged(&["Earth 12", "Fire 9", "Water 6", "Zero Mind"], &P2_HAND, Some("Air 12"));
    let (drawn_state, card) = rules::draw_from_future(&state, "player_1", &mut rng()).unwrap();

    let next = rules::discard_to_past(&drawn_state, card.clone());
    assert_eq!(next.past_pile.len(), 2);
    assert_eq!(next.past_pile[0].id, card.id, "discards go on top");
    assert_eq!(next.past_pile[1].name, "Air 12");
}

#[test]
fn exchange_swaps_in_place_and_reveals_the_new_card() {
    let state = rigged(&["Earth 12", "Fire 9", "Water 6", "Zero Mind"], &P2_HAND, None);
    let (state, drawn) = rules::draw_from_future(&state, "player_1", &mut rng()).unwrap();

    let (next, replaced) =
        rules::exchange_monkey_mind_card(&state, "player_1", drawn.clone(), 2).unwrap();
    assert_eq!(replaced.name, "Water 6");
    assert_eq!(next.players[0].monkey_mind[2].id, drawn.id);
    assert_eq!(next.players[0].monkey_mind.len(), 4);
    assert!(next.players[0].can_see(&drawn.id), "incoming cards are face up");

    assert_eq!(
        rules::exchange_monkey_mind_card(&state, "player_1", drawn, 7).unwrap_err(),
        GameError::InvalidCardIndex { index: 7, len: 4 }
    );
}

#[test]
fn higher_mind_takes_only_scoring_cards_and_four_at_most() {
    let state = rigged(&["Earth 12", "Fire 9", "Water 6", "Zero Mind"], &P2_HAND, None);
    let mut pool = full_deck();

    let junk = pick(&mut pool, "Fire 9");
    assert_eq!(
        rules::add_to_higher_mind(&state, "player_1", junk).unwrap_err(),
        GameError::IneligibleCard {
            name: "Fire 9".to_string()
        }
    );

    let mut state = state;
    for name in ["Earth EP 1", "Fire EP 2", "Water EP 3", "Earth Avatar"] {
        state = rules::add_to_higher_mind(&state, "player_1", pick(&mut pool, name)).unwrap();
    }
    assert_eq!(state.players[0].higher_mind.len(), 4);

    let fifth = pick(&mut pool, "Air EP 4");
    assert_eq!(
        rules::add_to_higher_mind(&state, "player_1", fifth).unwrap_err(),
        GameError::HigherMindFull
    );
}

#[test]
fn end_turn_wraps_around() {
    let names: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
    let mut engine = Engine::new(Some(2));
    let state = engine.initialize_match(&names, false);

    let state = rules::end_turn(&state);
    assert_eq!(state.current_turn, 1);
    let state = rules::end_turn(&state);
    assert_eq!(state.current_turn, 2);
    let state = rules::end_turn(&state);
    assert_eq!(state.current_turn, 0, "the pointer wraps to the first seat");
}

#[test]
fn call_zenji_locks_the_round() {
    let state = rigged(&["Earth 12", "Fire 9", "Water 6", "Zero Mind"], &P2_HAND, None);

    assert!(matches!(
        rules::call_zenji(&state, "player_2"),
        Err(GameError::NotYourTurn { .. })
    ));

    let next = rules::call_zenji(&state, "player_1").unwrap();
    assert_eq!(next.status, MatchStatus::RoundEnd);
    assert_eq!(next.zenji_lock.as_deref(), Some("player_1"));
    assert!(next.players[0].has_called_zenji);
}
