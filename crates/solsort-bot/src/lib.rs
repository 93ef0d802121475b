pub mod driver;
pub mod error;
pub mod gamer;

pub use driver::{
    PlayOutcome, SortReport, TerminationReason, play, sort, sort_report, sort_with_seed,
};
pub use error::SortError;
pub use gamer::{GameAction, GameStatus, Gamer, MoveDescriptor, Turn};
