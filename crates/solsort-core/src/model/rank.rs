use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Position of a card in the total order used for sorting.
///
/// Any `u8` is a valid rank. The reference alphabet is the thirteen ranks
/// `0..=12`, rendered with the usual playing-card symbols.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rank(u8);

impl Rank {
    pub const LOWEST: Rank = Rank(0);
    pub const HIGHEST_REFERENCE: Rank = Rank(12);

    pub const REFERENCE: [Rank; 13] = [
        Rank(0),
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
        Rank(8),
        Rank(9),
        Rank(10),
        Rank(11),
        Rank(12),
    ];

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// The rank directly above this one, if the order has one.
    pub const fn successor(self) -> Option<Rank> {
        match self.0.checked_add(1) {
            Some(value) => Some(Rank(value)),
            None => None,
        }
    }

    /// True when `other` sits exactly one rank above `self`.
    pub const fn is_followed_by(self, other: Rank) -> bool {
        match self.successor() {
            Some(next) => next.0 == other.0,
            None => false,
        }
    }

    pub const fn is_reference(self) -> bool {
        self.0 <= Self::HIGHEST_REFERENCE.0
    }

    pub fn symbol(self) -> Option<&'static str> {
        const SYMBOLS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        SYMBOLS.get(self.0 as usize).copied()
    }
}

impl From<u8> for Rank {
    fn from(value: u8) -> Self {
        Rank(value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => f.write_str(symbol),
            None => write!(f, "#{}", self.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised rank '{0}'")]
pub struct ParseRankError(pub String);

impl FromStr for Rank {
    type Err = ParseRankError;

    /// Accepts a reference symbol (`A`, `2`..`10`, `J`, `Q`, `K`) or `#n`
    /// for an arbitrary numeric rank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(raw) = trimmed.strip_prefix('#') {
            return raw
                .parse::<u8>()
                .map(Rank)
                .map_err(|_| ParseRankError(s.to_string()));
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "A" => Ok(Rank(0)),
            "J" => Ok(Rank(10)),
            "Q" => Ok(Rank(11)),
            "K" => Ok(Rank(12)),
            other => match other.parse::<u8>() {
                Ok(face @ 2..=10) => Ok(Rank(face - 1)),
                _ => Err(ParseRankError(s.to_string())),
            },
        }
    }
}
