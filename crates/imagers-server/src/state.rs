//! Shared application state.

use std::sync::Arc;

use crate::config::Config;
use crate::fetch::{FetchError, HttpFetcher, ImageFetcher};

/// Immutable state shared by every request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    fetcher: Arc<dyn ImageFetcher>,
}

impl AppState {
    /// Build state with an HTTP fetcher configured from `config`.
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(config.fetch_timeout(), config.max_download_bytes)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self {
            config: Arc::new(config),
            fetcher,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn fetcher(&self) -> &dyn ImageFetcher {
        self.fetcher.as_ref()
    }
}
