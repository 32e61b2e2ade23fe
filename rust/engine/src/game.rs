use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::Player;

/// Lifecycle of a match: `Waiting -> Active -> {RoundEnd -> Active}* -> GameEnd`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Waiting,
    Active,
    RoundEnd,
    GameEnd,
}

/// The authoritative state of one in-progress match. A value type: every rule
/// function consumes a reference and returns a fresh state, so a caller's
/// previous snapshot stays valid whether the call succeeds or fails.
///
/// Pile ordering: index 0 is the top of both the Future Pile (next draw) and
/// the Past Pile (most recent discard).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Seating order; fixed for the whole match
    pub players: Vec<Player>,
    /// Index into `players` of the seat whose turn it is
    pub current_turn: usize,
    pub future_pile: Vec<Card>,
    pub past_pile: Vec<Card>,
    pub status: MatchStatus,
    pub round_number: u32,
    /// Id of the player who called Zenji this round, if any
    pub zenji_lock: Option<String>,
    pub winner: Option<String>,
}

impl MatchState {
    pub fn player_index(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn]
    }
}
