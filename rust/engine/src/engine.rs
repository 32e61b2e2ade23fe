use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{MatchState, MatchStatus};
use crate::logger::ActionRecord;
use crate::player::{Player, MONKEY_MIND_SIZE};
use crate::rules;

/// Hard cap on seats at the table.
pub const MAX_PLAYERS: usize = 4;

/// At most this many AI seats are appended when requested.
pub const MAX_AI_PLAYERS: usize = 2;

/// Every request the engine accepts, one variant per action with its own
/// typed payload. Cards riding in a request (`DiscardToPast`,
/// `ExchangeMonkeyMind`, `AddToHigherMind`) are cards in transit: already
/// removed from their previous location by an earlier action.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Start,
    CheckCards { player_id: String },
    UpdateCardVisibility { player_id: String },
    DrawFromFuture { player_id: String },
    DiscardToPast { card: Card },
    ExchangeMonkeyMind { player_id: String, card: Card, replace_index: usize },
    AddToHigherMind { player_id: String, card: Card },
    EndTurn,
    CallZenji { player_id: String },
    KnockOutCard { player_id: String, card_index: usize },
    EndRound,
}

/// What an applied action handed back besides the new state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ActionOutcome {
    /// Pure state transition
    Applied,
    /// The drawn card, in transit until discarded or exchanged
    CardDrawn(Card),
    /// The replaced Monkey Mind card, in transit
    CardReplaced(Card),
}

/// Orchestrates matches: builds the initial deal, dispatches [`Action`]s to
/// the rule functions, owns the match RNG and journals every applied action.
///
/// The engine holds no match state of its own. Callers thread a
/// [`MatchState`] value through [`Engine::apply`]; on error the passed state
/// is still authoritative.
///
/// # Examples
///
/// ```
/// use zenji_engine::engine::{Action, Engine};
/// use zenji_engine::game::MatchStatus;
///
/// let mut engine = Engine::new(Some(42));
/// let state = engine.initialize_match(&["Mira".to_string()], true);
/// assert_eq!(state.status, MatchStatus::Waiting);
///
/// let (state, _) = engine.apply(&state, Action::Start).unwrap();
/// assert_eq!(state.status, MatchStatus::Active);
/// assert!(state.players.iter().all(|p| p.monkey_mind.len() == 4));
/// ```
#[derive(Debug)]
pub struct Engine {
    rng: ChaCha20Rng,
    seed: u64,
    journal: Vec<ActionRecord>,
}

impl Engine {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(0x5E2E_0061);
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            journal: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Builds a fresh match: one seat per name, up to [`MAX_AI_PLAYERS`] AI
    /// seats appended while the table stays under [`MAX_PLAYERS`], four cards
    /// dealt to every Monkey Mind and the rest of the shuffled deck as the
    /// Future Pile. The match starts waiting with the first seat active.
    pub fn initialize_match(&mut self, player_names: &[String], include_ai: bool) -> MatchState {
        let mut deck = Deck::new_with_seed(self.rng.next_u64());
        deck.shuffle();

        let mut players: Vec<Player> = player_names
            .iter()
            .enumerate()
            .map(|(i, name)| Player::new(format!("player_{}", i + 1), name.clone(), false))
            .collect();
        if include_ai && players.len() < MAX_PLAYERS {
            let ai_count = (MAX_PLAYERS - players.len()).min(MAX_AI_PLAYERS);
            for i in 1..=ai_count {
                players.push(Player::new(format!("ai_{i}"), format!("AI Player {i}"), true));
            }
        }

        for player in &mut players {
            player.monkey_mind = deck.deal(MONKEY_MIND_SIZE);
        }

        MatchState {
            players,
            current_turn: 0,
            future_pile: deck.into_pile(),
            past_pile: Vec::new(),
            status: MatchStatus::Waiting,
            round_number: 1,
            zenji_lock: None,
            winner: None,
        }
    }

    /// Dispatches one action. Successful applies are appended to the journal;
    /// failed ones leave both the journal and the caller's state untouched.
    pub fn apply(
        &mut self,
        state: &MatchState,
        action: Action,
    ) -> Result<(MatchState, ActionOutcome), GameError> {
        let (next, outcome) = match action.clone() {
            Action::Start => (rules::start_match(state), ActionOutcome::Applied),
            Action::CheckCards { player_id } => {
                (rules::check_cards(state, &player_id)?, ActionOutcome::Applied)
            }
            Action::UpdateCardVisibility { player_id } => (
                rules::update_card_visibility(state, &player_id)?,
                ActionOutcome::Applied,
            ),
            Action::DrawFromFuture { player_id } => {
                let (next, card) = rules::draw_from_future(state, &player_id, &mut self.rng)?;
                (next, ActionOutcome::CardDrawn(card))
            }
            Action::DiscardToPast { card } => {
                (rules::discard_to_past(state, card), ActionOutcome::Applied)
            }
            Action::ExchangeMonkeyMind {
                player_id,
                card,
                replace_index,
            } => {
                let (next, replaced) =
                    rules::exchange_monkey_mind_card(state, &player_id, card, replace_index)?;
                (next, ActionOutcome::CardReplaced(replaced))
            }
            Action::AddToHigherMind { player_id, card } => (
                rules::add_to_higher_mind(state, &player_id, card)?,
                ActionOutcome::Applied,
            ),
            Action::EndTurn => (rules::end_turn(state), ActionOutcome::Applied),
            Action::CallZenji { player_id } => {
                (rules::call_zenji(state, &player_id)?, ActionOutcome::Applied)
            }
            Action::KnockOutCard {
                player_id,
                card_index,
            } => (
                rules::knock_out_card(state, &player_id, card_index, &mut self.rng)?,
                ActionOutcome::Applied,
            ),
            Action::EndRound => (rules::end_round(state, &mut self.rng)?, ActionOutcome::Applied),
        };

        self.journal.push(ActionRecord {
            player_id: acting_player(state, &action),
            round: state.round_number,
            action,
        });
        Ok((next, outcome))
    }

    /// Applied actions since the last [`Engine::take_journal`].
    pub fn journal(&self) -> &[ActionRecord] {
        &self.journal
    }

    /// Drains the journal, e.g. to assemble a
    /// [`MatchRecord`](crate::logger::MatchRecord) once a match ends.
    pub fn take_journal(&mut self) -> Vec<ActionRecord> {
        std::mem::take(&mut self.journal)
    }
}

/// Journal attribution: the player named by the action, or whoever's turn it
/// was for table-level actions.
fn acting_player(state: &MatchState, action: &Action) -> String {
    match action {
        Action::CheckCards { player_id }
        | Action::UpdateCardVisibility { player_id }
        | Action::DrawFromFuture { player_id }
        | Action::ExchangeMonkeyMind { player_id, .. }
        | Action::AddToHigherMind { player_id, .. }
        | Action::CallZenji { player_id }
        | Action::KnockOutCard { player_id, .. } => player_id.clone(),
        Action::Start | Action::DiscardToPast { .. } | Action::EndTurn | Action::EndRound => state
            .players
            .get(state.current_turn)
            .map(|p| p.id.clone())
            .unwrap_or_default(),
    }
}
