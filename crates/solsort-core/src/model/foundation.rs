use crate::model::card::Card;
use crate::model::error::{FoundationError, StackError};

/// Append-only output pile. Every card is exactly one rank above the card
/// beneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FoundationStack {
    cards: Vec<Card>,
}

impl FoundationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a run supplied bottom to top. The whole run is checked
    /// before anything lands, so a rejected push leaves the pile untouched.
    pub fn push_to_top(&mut self, cards: &[Card]) -> Result<(), FoundationError> {
        let Some(first) = cards.first() else {
            tracing::warn!(target: "solsort_core::stack", "pushed zero cards onto a foundation");
            return Ok(());
        };

        let top = self.cards.last().copied();
        if let Some(top) = top {
            if !top.is_followed_by(*first) {
                return Err(FoundationError::OutOfOrder {
                    top: Some(top),
                    incoming: *first,
                });
            }
        }
        for pair in cards.windows(2) {
            if !pair[0].is_followed_by(pair[1]) {
                return Err(FoundationError::OutOfOrder {
                    top: Some(pair[0]),
                    incoming: pair[1],
                });
            }
        }

        self.cards.extend_from_slice(cards);
        Ok(())
    }

    pub fn top_card(&self) -> Result<Card, StackError> {
        self.cards.last().copied().ok_or(StackError::Empty)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
