//! # zenji-engine: Zenji Card Game Rules Core
//!
//! A deterministic rules engine for the Zenji card game: match state
//! management, turn-by-turn action validation, round and Satori scoring,
//! and match journaling with reproducible RNG for replay and debugging.
//!
//! The engine is synchronous and value-oriented: every action is a pure
//! transition from one [`game::MatchState`] snapshot to the next. Rendering,
//! transport and persistence live in the surrounding application; this crate
//! only requires that the state round-trips faithfully through serde.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Element, CardKind, Power, Card) and the
//!   canonical 61-card deck
//! - [`deck`] - Deterministic shuffling and dealing with ChaCha20 RNG
//! - [`engine`] - Match initialization and typed action dispatch
//! - [`game`] - Match state and lifecycle status
//! - [`player`] - Player state: Monkey Mind, Higher Mind, Scorecard
//! - [`rules`] - Turn engine, one pure function per action
//! - [`scoring`] - Monkey Mind scoring, round-end and Satori distribution
//! - [`logger`] - Action journal and MatchRecord serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use zenji_engine::engine::{Action, ActionOutcome, Engine};
//!
//! let mut engine = Engine::new(Some(42));
//! let state = engine.initialize_match(&["Mira".to_string()], true);
//!
//! // one human seat plus two AI seats
//! assert_eq!(state.players.len(), 3);
//!
//! let (state, _) = engine.apply(&state, Action::Start).unwrap();
//! let first = state.players[0].id.clone();
//!
//! // draw, then route the drawn card somewhere
//! let (state, outcome) = engine
//!     .apply(&state, Action::DrawFromFuture { player_id: first })
//!     .unwrap();
//! if let ActionOutcome::CardDrawn(card) = outcome {
//!     let (state, _) = engine.apply(&state, Action::DiscardToPast { card }).unwrap();
//!     assert_eq!(state.past_pile.len(), 1);
//! }
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All shuffles are reproducible from the engine seed:
//!
//! ```rust
//! use zenji_engine::engine::Engine;
//!
//! let names = vec!["A".to_string(), "B".to_string()];
//! let s1 = Engine::new(Some(7)).initialize_match(&names, false);
//! let s2 = Engine::new(Some(7)).initialize_match(&names, false);
//! assert_eq!(s1, s2);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
pub mod scoring;
