/// Test-only fetcher serving canned bodies by URL.
use std::cell::RefCell;
use std::collections::HashMap;

use super::client::Fetch;
use super::errors::ApiError;

/// Serves registered bodies and records every requested URL.
///
/// Unregistered URLs answer with HTTP 404.
#[derive(Debug, Default)]
pub struct RecordingFetcher {
    bodies: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl RecordingFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `body` as the response for `url`.
    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_owned(), body.to_owned());
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for RecordingFetcher {
    fn fetch(&self, url: &str) -> Result<String, ApiError> {
        self.requests.borrow_mut().push(url.to_owned());
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                url: url.to_owned(),
                status: 404,
            })
    }
}
