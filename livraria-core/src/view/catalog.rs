//! Catalog view mount lifecycle

use super::ViewState;
use crate::error::{FetchError, FetchResult};
use crate::fetch::BookSource;
use crate::render::Screen;
use crate::types::BookRecord;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// The single-screen catalog view
///
/// Mounting starts the one fetch of the view's lifetime on the tokio runtime.
/// The outcome comes back over a one-shot channel owned by the view, so
/// dropping the view before the fetch settles discards the outcome instead of
/// touching a dead view.
#[derive(Debug)]
pub struct CatalogView {
    state: ViewState,
    pending: Option<oneshot::Receiver<FetchResult<Vec<BookRecord>>>>,
}

impl CatalogView {
    /// Mount the view and start fetching
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<S>(source: S) -> Self
    where
        S: BookSource + 'static,
    {
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let outcome = source.fetch().await;
            if tx.send(outcome).is_err() {
                tracing::debug!("Catalog view torn down before fetch settled, discarding outcome");
            }
        });

        tracing::debug!("Catalog view mounted");
        Self {
            state: ViewState::Loading,
            pending: Some(rx),
        }
    }

    /// Current state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Wait for the fetch to settle and apply its outcome
    ///
    /// Once settled, further calls return the same state without fetching.
    pub async fn settle(&mut self) -> &ViewState {
        if let Some(rx) = self.pending.take() {
            let outcome = rx.await.unwrap_or_else(|_| Err(fetch_task_lost()));
            self.apply(outcome);
        }
        &self.state
    }

    /// Apply the fetch outcome if it has already arrived
    ///
    /// Returns whether the view has settled.
    pub fn try_settle(&mut self) -> bool {
        if let Some(rx) = self.pending.as_mut() {
            let outcome = match rx.try_recv() {
                Ok(outcome) => outcome,
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Closed) => Err(fetch_task_lost()),
            };
            self.pending = None;
            self.apply(outcome);
        }
        self.state.is_settled()
    }

    /// Screen for the current state
    pub fn render(&self) -> Screen {
        Screen::from_state(&self.state)
    }

    fn apply(&mut self, outcome: FetchResult<Vec<BookRecord>>) {
        let state = std::mem::take(&mut self.state);
        self.state = state.settle(outcome);
    }
}

/// The fetch task ended without sending, e.g. it panicked
fn fetch_task_lost() -> FetchError {
    FetchError::Transport("fetch ended without a response".to_string())
}
