use thiserror::Error;

/// Request-level validation failures. Every variant signals a violated
/// precondition on an otherwise well-formed call; none is process-fatal and
/// the input state is left untouched when one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Player '{id}' not found")]
    PlayerNotFound { id: String },
    #[error("It's not player '{id}'s turn")]
    NotYourTurn { id: String },
    #[error("Invalid card index {index} (hand has {len} cards)")]
    InvalidCardIndex { index: usize, len: usize },
    #[error("'{name}' cannot be placed in the Higher Mind")]
    IneligibleCard { name: String },
    #[error("Higher Mind is full")]
    HigherMindFull,
    #[error("Cards have already been checked this round")]
    AlreadyChecked,
    #[error("No cards in the past pile to match against")]
    EmptyPastPile,
    #[error("Zero Mind cards cannot be knocked out")]
    CardProtected,
    #[error("No player has called Zenji")]
    NoZenjiCaller,
}
