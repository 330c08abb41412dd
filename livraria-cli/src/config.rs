//! Runtime configuration

use livraria_core::fetch::DEFAULT_ENDPOINT;
use livraria_core::GridLayout;

/// Environment variable that overrides the default books endpoint
pub const ENDPOINT_ENV: &str = "LIVRARIA_ENDPOINT";

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub layout: GridLayout,
    pub json: bool,
}

impl Config {
    /// Resolve settings; the endpoint comes from the flag, then the
    /// environment, then the built-in default
    pub fn resolve(endpoint: Option<String>, width: usize, json: bool) -> Self {
        Self::resolve_with(endpoint, std::env::var(ENDPOINT_ENV).ok(), width, json)
    }

    fn resolve_with(
        flag: Option<String>,
        env: Option<String>,
        width: usize,
        json: bool,
    ) -> Self {
        let endpoint = flag
            .or(env.filter(|e| !e.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            endpoint,
            layout: GridLayout::new(width),
            json,
        }
    }
}
