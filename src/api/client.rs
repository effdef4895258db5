/// Blocking HTTP fetcher for the petitions API.
use std::time::Instant;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use super::errors::ApiError;
use crate::config::ApiConfig;

/// Performs one GET per call and hands back the raw body.
///
/// The pipeline only depends on this trait so it can run against canned
/// responses.
pub trait Fetch {
    /// Fetch `url` and return its body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    fn fetch(&self, url: &str) -> Result<String, ApiError>;
}

/// `Fetch` backed by `reqwest::blocking`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client that sends the configured user agent on every request.
    ///
    /// No timeout or retry policy is applied beyond reqwest's defaults.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Client` if the TLS backend cannot be initialised.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ApiError> {
        let start = Instant::now();
        let response = self.client.get(url).send().map_err(|source| {
            warn!(url, error = %source, "request failed");
            ApiError::Transport {
                url: url.to_owned(),
                source,
            }
        })?;

        let status = response.status();
        debug!(
            url,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "fetched"
        );
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "non-success status");
            return Err(ApiError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| ApiError::Transport {
            url: url.to_owned(),
            source,
        })
    }
}
