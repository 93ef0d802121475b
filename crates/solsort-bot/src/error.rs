use solsort_core::{FoundationError, StackError};
use thiserror::Error;

/// Anything that aborts a sort attempt. A lost game is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("invalid rules: {field}: {message}")]
    InvalidRules {
        field: &'static str,
        message: &'static str,
    },
    #[error("precondition violated: {0}")]
    Precondition(#[from] StackError),
    #[error("foundation rejected a run: {0}")]
    Foundation(FoundationError),
}

impl From<FoundationError> for SortError {
    fn from(err: FoundationError) -> Self {
        match err {
            FoundationError::Stack(inner) => SortError::Precondition(inner),
            other => SortError::Foundation(other),
        }
    }
}

impl SortError {
    pub fn is_out_of_order(&self) -> bool {
        matches!(
            self,
            SortError::Foundation(FoundationError::OutOfOrder { .. })
        )
    }
}
