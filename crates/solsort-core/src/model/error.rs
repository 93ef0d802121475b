use crate::model::card::Card;
use thiserror::Error;

/// Caller misuse of a stack: pulling cards that are not there, reading the
/// top of an empty pile, overfilling the hand. These indicate a bug in the
/// calling logic and abort the current game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack is empty")]
    Empty,
    #[error("requested {requested} cards but only {available} are present")]
    NotEnoughCards { requested: usize, available: usize },
    #[error("requested {requested} cards but only {face_up} are face-up")]
    NotEnoughFaceUp { requested: usize, face_up: usize },
    #[error("requested to reveal {requested} cards but only {face_down} are face-down")]
    NotEnoughFaceDown { requested: usize, face_down: usize },
    #[error("hand of {size} cards exceeds capacity {capacity}")]
    OverCapacity { size: usize, capacity: usize },
    #[error("hand index {index} out of range for {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("column {index} out of range for {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },
}

/// Failure to append to a foundation. Foundations can never be corrected
/// once cards land on them, so an ordering violation is its own variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoundationError {
    #[error("out of order: {incoming} cannot follow {}", display_top(.top))]
    OutOfOrder { top: Option<Card>, incoming: Card },
    #[error(transparent)]
    Stack(#[from] StackError),
}

fn display_top(top: &Option<Card>) -> String {
    top.map(|card| card.to_string())
        .unwrap_or_else(|| "an empty run".to_string())
}
