//! HTTP book source

use super::BookSource;
use crate::error::{FetchError, FetchResult, LivrariaError, Result};
use crate::types::{decode_records, BookRecord};
use async_trait::async_trait;

/// Books endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://potterhead-api.vercel.app/api/books";

/// Fetches book records with a single GET to a fixed endpoint
#[derive(Debug, Clone)]
pub struct HttpBookSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBookSource {
    /// Create a source for the given endpoint
    ///
    /// The endpoint must be an `http://` or `https://` URL. No request timeout
    /// is set; a fetch waits for the server or the transport to give up.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(LivrariaError::InvalidEndpoint(format!(
                "'{}' must start with http:// or https://",
                endpoint
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("livraria/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LivrariaError::Client(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// The endpoint this source reads from
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl BookSource for HttpBookSource {
    async fn fetch(&self) -> FetchResult<Vec<BookRecord>> {
        tracing::debug!("Fetching books from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Books endpoint answered HTTP {}", status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(&e))?;

        let records = decode_records(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::debug!("Fetched {} book records", records.len());
        Ok(records)
    }
}
