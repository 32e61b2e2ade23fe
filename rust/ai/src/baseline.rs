//! Baseline AI implementation for Zenji gameplay.
//!
//! A deterministic, single-pass greedy policy: good enough to keep a table
//! moving and predictable enough to use as a benchmark opponent in tests.

use zenji_engine::cards::{Card, CardKind};
use zenji_engine::engine::{Action, ActionOutcome, Engine};
use zenji_engine::errors::GameError;
use zenji_engine::game::MatchState;
use zenji_engine::player::Player;
use zenji_engine::scoring::effective_card_value;

use crate::AIOpponent;

/// Single-pass greedy opponent.
///
/// # Strategy
///
/// 1. Draw from the Future Pile.
/// 2. If the draw is an EP card or an avatar, exchange it for the Monkey
///    Mind card with the highest *effective* value (ties go to the first
///    occurrence), then route the replaced card to the Higher Mind when it
///    is eligible and there is room, otherwise discard it.
/// 3. Any other draw is discarded unseen.
/// 4. End the turn.
///
/// No look-ahead, no knock-out attempts, no Zenji calls. Every step goes
/// through [`Engine::apply`], so rule violations surface as ordinary
/// [`GameError`]s for the caller to handle.
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// Draws worth working into the Monkey Mind: scoring currency only.
    fn keepable(card: &Card) -> bool {
        card.is_ep() || card.kind == CardKind::Avatar
    }

    /// Index of the Monkey Mind card contributing the most to the score,
    /// avatars in the Higher Mind taken into account. `None` on an empty
    /// hand (possible after Satori).
    fn highest_effective_index(player: &Player) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (i, card) in player.monkey_mind.iter().enumerate() {
            let value = effective_card_value(player, card);
            if best.is_none_or(|(_, v)| value > v) {
                best = Some((i, value));
            }
        }
        best.map(|(i, _)| i)
    }
}

impl AIOpponent for BaselineAI {
    fn take_turn(
        &self,
        engine: &mut Engine,
        state: &MatchState,
        player_id: &str,
    ) -> Result<MatchState, GameError> {
        let (state, outcome) = engine.apply(
            state,
            Action::DrawFromFuture {
                player_id: player_id.to_string(),
            },
        )?;
        let drawn = match outcome {
            ActionOutcome::CardDrawn(card) => card,
            _ => unreachable!("drawing hands back a card"),
        };

        let player = state
            .player(player_id)
            .ok_or_else(|| GameError::PlayerNotFound {
                id: player_id.to_string(),
            })?;

        let state = match Self::highest_effective_index(player) {
            Some(replace_index) if Self::keepable(&drawn) => {
                let (state, outcome) = engine.apply(
                    &state,
                    Action::ExchangeMonkeyMind {
                        player_id: player_id.to_string(),
                        card: drawn,
                        replace_index,
                    },
                )?;
                let replaced = match outcome {
                    ActionOutcome::CardReplaced(card) => card,
                    _ => unreachable!("exchanging hands back the replaced card"),
                };
                let has_room = state
                    .player(player_id)
                    .is_some_and(|p| p.higher_mind_has_room());
                if Self::keepable(&replaced) && has_room {
                    engine
                        .apply(
                            &state,
                            Action::AddToHigherMind {
                                player_id: player_id.to_string(),
                                card: replaced,
                            },
                        )?
                        .0
                } else {
                    engine
                        .apply(&state, Action::DiscardToPast { card: replaced })?
                        .0
                }
            }
            _ => {
                engine
                    .apply(&state, Action::DiscardToPast { card: drawn })?
                    .0
            }
        };

        Ok(engine.apply(&state, Action::EndTurn)?.0)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
