//! Data fetchers that produce the list of book records

mod http;

pub use http::{HttpBookSource, DEFAULT_ENDPOINT};

use crate::error::FetchResult;
use crate::types::BookRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// A source of book records
///
/// Each call to `fetch` is one read-only request; implementations do not
/// retry, and failures are reported as a `FetchError` whose text is the
/// user-facing message.
#[async_trait]
pub trait BookSource: Send + Sync {
    /// Fetch the full list of records, in the order the source returns them
    async fn fetch(&self) -> FetchResult<Vec<BookRecord>>;
}

#[async_trait]
impl<S: BookSource + ?Sized> BookSource for Arc<S> {
    async fn fetch(&self) -> FetchResult<Vec<BookRecord>> {
        (**self).fetch().await
    }
}
