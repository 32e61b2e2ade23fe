use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Cards dealt to each Monkey Mind at the start of a round.
pub const MONKEY_MIND_SIZE: usize = 4;

/// Maximum cards a Higher Mind may hold.
pub const HIGHER_MIND_CAPACITY: usize = 4;

/// One seat at the table. The Monkey Mind is the hand being minimized, the
/// Higher Mind stages cards for scoring and the Scorecard holds banked points.
///
/// `score` is always a recompute of the Scorecard sum, never incremented in
/// place. `visible_cards` tracks which of the player's own cards are currently
/// face-up to that player; opponents never see non-edge cards regardless.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub is_ai: bool,
    pub monkey_mind: Vec<Card>,
    pub higher_mind: Vec<Card>,
    pub scorecard: Vec<Card>,
    pub score: i32,
    pub has_called_zenji: bool,
    /// One-time per-round peek flag
    pub has_checked_cards: bool,
    /// Ids of own cards currently revealed to this player
    pub visible_cards: HashSet<String>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_ai: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_ai,
            monkey_mind: Vec::new(),
            higher_mind: Vec::new(),
            scorecard: Vec::new(),
            score: 0,
            has_called_zenji: false,
            has_checked_cards: false,
            visible_cards: HashSet::new(),
        }
    }

    pub fn can_see(&self, card_id: &str) -> bool {
        self.visible_cards.contains(card_id)
    }

    pub fn higher_mind_has_room(&self) -> bool {
        self.higher_mind.len() < HIGHER_MIND_CAPACITY
    }
}
