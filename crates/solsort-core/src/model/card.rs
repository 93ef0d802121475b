use crate::model::rank::{ParseRankError, Rank};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// An immutable token to be sorted. Its rank is the only thing the game
/// ever inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank) -> Self {
        Self { rank }
    }

    pub const fn from_value(value: u8) -> Self {
        Self::new(Rank::new(value))
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// True when `upper` can sit directly on top of `self` in a run.
    pub const fn is_followed_by(self, upper: Card) -> bool {
        self.rank.is_followed_by(upper.rank)
    }
}

/// `b` is exactly one rank above `a`.
pub const fn adjacent(a: Card, b: Card) -> bool {
    a.is_followed_by(b)
}

impl From<Rank> for Card {
    fn from(rank: Rank) -> Self {
        Card::new(rank)
    }
}

impl From<u8> for Card {
    fn from(value: u8) -> Self {
        Card::from_value(value)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)
    }
}

impl FromStr for Card {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Rank>().map(Card::new)
    }
}

/// Builds cards from raw rank values, mostly for tests and fixtures.
pub fn cards_from_values(values: &[u8]) -> Vec<Card> {
    values.iter().copied().map(Card::from_value).collect()
}
