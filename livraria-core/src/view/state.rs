//! View state machine

use crate::error::FetchResult;
use crate::types::BookRecord;

/// What the catalog view currently shows
///
/// The view starts in `Loading` and settles exactly once. `Error` and `Ready`
/// are terminal: nothing in the view transitions out of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// The fetch has not settled yet
    #[default]
    Loading,

    /// The fetch failed; the message is shown verbatim
    Error(String),

    /// The fetch succeeded; records are kept in the order received
    Ready(Vec<BookRecord>),
}

impl ViewState {
    /// Apply a fetch outcome
    ///
    /// Only `Loading` reacts to an outcome. A settled state is returned as is.
    pub fn settle(self, outcome: FetchResult<Vec<BookRecord>>) -> Self {
        match self {
            ViewState::Loading => match outcome {
                Ok(records) => {
                    tracing::debug!("Catalog view ready with {} records", records.len());
                    ViewState::Ready(records)
                }
                Err(e) => {
                    tracing::debug!("Catalog view failed: {}", e);
                    ViewState::Error(e.to_string())
                }
            },
            settled => {
                tracing::debug!(
                    "Ignoring fetch outcome, view already {}",
                    settled.name()
                );
                settled
            }
        }
    }

    /// Short name of the state, for logs
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Error(_) => "error",
            ViewState::Ready(_) => "ready",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Whether the view has left `Loading`
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    /// Records, if the view is ready
    pub fn records(&self) -> Option<&[BookRecord]> {
        match self {
            ViewState::Ready(records) => Some(records),
            _ => None,
        }
    }

    /// Error message, if the view failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}
