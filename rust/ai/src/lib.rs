//! # zenji-ai: AI Opponent System for Zenji
//!
//! Provides AI opponent implementations for Zenji gameplay. Supports multiple
//! AI strategies behind a common trait; policies compose the engine's own
//! action dispatch, so an AI turn obeys exactly the same rules as a human one.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for playing a full turn
//! - [`baseline`] - Single-pass greedy policy used as the default opponent
//! - [`create_ai`] - Factory function for creating AI opponents
//! - [`take_turn_or_pass`] - Caller-side fallback that forfeits a failed turn
//!
//! ## Quick Start
//!
//! ```rust
//! use zenji_ai::{create_ai, take_turn_or_pass};
//! use zenji_engine::engine::{Action, Engine};
//!
//! let mut engine = Engine::new(Some(42));
//! let state = engine.initialize_match(&["Mira".to_string()], true);
//! let (state, _) = engine.apply(&state, Action::Start).unwrap();
//!
//! // hand the first turn over so an AI seat is up
//! let (state, _) = engine.apply(&state, Action::EndTurn).unwrap();
//! let ai_id = state.current_player().id.clone();
//! assert!(state.current_player().is_ai);
//!
//! let ai = create_ai("baseline");
//! let state = take_turn_or_pass(ai.as_ref(), &mut engine, &state, &ai_id);
//! // the turn has passed on, whatever the AI managed to do
//! assert_ne!(state.current_player().id, ai_id);
//! ```

use zenji_engine::engine::Engine;
use zenji_engine::errors::GameError;
use zenji_engine::game::MatchState;
use zenji_engine::rules;

pub mod baseline;

/// Interface for AI opponents. A policy plays one complete turn for
/// `player_id` by composing engine actions, returning the resulting state.
///
/// Implementations must not bypass the engine: any rule violation surfaces as
/// the same [`GameError`] a human caller would get, and the input state stays
/// authoritative in that case.
pub trait AIOpponent: Send + Sync {
    /// Play one full turn for `player_id` on `state`.
    ///
    /// # Errors
    ///
    /// Propagates the first engine error hit while composing the turn. The
    /// expected caller reaction is to treat the turn as forfeited; see
    /// [`take_turn_or_pass`].
    fn take_turn(
        &self,
        engine: &mut Engine,
        state: &MatchState,
        player_id: &str,
    ) -> Result<MatchState, GameError>;

    /// Name/identifier of this AI implementation.
    fn name(&self) -> &str;
}

/// Factory function to create AI opponents by type string.
///
/// # Supported AI Types
///
/// - `"baseline"` - single-pass greedy policy
///
/// # Example
///
/// ```rust
/// use zenji_ai::create_ai;
///
/// let ai = create_ai("baseline");
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
///
/// # Panics
///
/// Panics if an unknown AI type is requested.
pub fn create_ai(ai_type: &str) -> Box<dyn AIOpponent> {
    match ai_type {
        "baseline" => Box::new(baseline::BaselineAI::new()),
        _ => panic!("Unknown AI type: {}", ai_type),
    }
}

/// Runs an AI turn with the documented fallback: if the policy errors out,
/// the turn is simply ended on the caller's previous state so the table
/// cannot stall on a confused opponent.
pub fn take_turn_or_pass(
    ai: &dyn AIOpponent,
    engine: &mut Engine,
    state: &MatchState,
    player_id: &str,
) -> MatchState {
    match ai.take_turn(engine, state, player_id) {
        Ok(next) => next,
        Err(_) => rules::end_turn(state),
    }
}
