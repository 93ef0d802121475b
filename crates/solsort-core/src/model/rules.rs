use serde::{Deserialize, Serialize};

pub const DEFAULT_HAND_SIZE_MAX: usize = 3;
pub const DEFAULT_FIELD_COLUMNS: usize = 8;
pub const DEFAULT_FOUNDATIONS: usize = 1;
pub const DEFAULT_MAX_TURNS: usize = 10_000;

/// Table rules threaded into every game. Nothing here is global; each
/// `Game` and `Hand` carries its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub hand_size_max: usize,
    pub allow_random_access: bool,
    pub field_columns: usize,
    pub foundations: usize,
    /// Turns played before the driver gives up on a game.
    pub max_turns: usize,
    /// End the game as soon as a position repeats.
    pub detect_repetition: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            hand_size_max: DEFAULT_HAND_SIZE_MAX,
            allow_random_access: true,
            field_columns: DEFAULT_FIELD_COLUMNS,
            foundations: DEFAULT_FOUNDATIONS,
            max_turns: DEFAULT_MAX_TURNS,
            detect_repetition: true,
        }
    }
}

impl RuleSet {
    /// Number of cards the triangular deal places when the deck is large
    /// enough.
    pub const fn dealt_cards(&self) -> usize {
        self.field_columns * (self.field_columns + 1) / 2
    }

    /// Returns the first field name that holds an unusable value.
    pub fn invalid_field(&self) -> Option<(&'static str, &'static str)> {
        if self.hand_size_max == 0 {
            return Some(("hand_size_max", "hand capacity must be positive"));
        }
        if self.field_columns == 0 {
            return Some(("field_columns", "at least one field column is required"));
        }
        if self.foundations == 0 {
            return Some(("foundations", "at least one foundation is required"));
        }
        if self.max_turns == 0 {
            return Some(("max_turns", "turn budget must be positive"));
        }
        None
    }
}
