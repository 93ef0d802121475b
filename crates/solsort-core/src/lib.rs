pub mod game;
pub mod model;

pub use game::game_state::Game;
pub use game::serialization::GameSnapshot;
pub use model::card::{Card, adjacent};
pub use model::error::{FoundationError, StackError};
pub use model::rank::Rank;
pub use model::rules::RuleSet;
