//! Mock transport for testing without network access.
//!
//! Serves canned bodies keyed by full URL, as if they were live API
//! responses, and records every URL it was asked for.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use super::error::TransportError;
use super::transport::Transport;

#[derive(Debug, Clone)]
enum MockResponse {
    Body(String),
    Failure(String),
}

/// [`Transport`] that answers from a fixed table instead of the network.
///
/// Clones share the same table and request log.
///
/// ```
/// use simrail_sdk::api::Converted;
/// use simrail_sdk::{Api, ApiConfig, MockTransport};
///
/// let transport = MockTransport::new().with_body(
///     "http://sim/servers-open",
///     r#"{"result": true, "data": [], "count": 0, "description": ""}"#,
/// );
/// let config = ApiConfig::new().with_live_data_url("http://sim");
/// let api: Api<Converted, MockTransport> = Api::with_transport(config, transport);
/// assert_eq!(api.config().endpoints.live_data, "http://sim");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    /// Create a mock with no responses; every request fails until some are
    /// added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `body`.
    pub fn with_body(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(url.into(), MockResponse::Body(body.into()));
        self
    }

    /// Fail requests to `url` with a transport error carrying `message`.
    pub fn with_failure(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.insert(url.into(), MockResponse::Failure(message.into()));
        self
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn insert(&self, url: String, response: MockResponse) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url, response);
    }

    fn respond(&self, url: &str) -> Result<String, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        let responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
        match responses.get(url) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Failure(message)) => Err(TransportError::new(message.clone())),
            None => Err(TransportError::new(format!(
                "no mock response for {url}. Available: {:?}",
                responses.keys().collect::<Vec<_>>()
            ))),
        }
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> impl Future<Output = Result<String, TransportError>> + Send {
        std::future::ready(self.respond(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_registered_bodies() {
        let mock = MockTransport::new().with_body("http://a/x", "[1]");
        assert_eq!(mock.get("http://a/x").await.unwrap(), "[1]");
        assert_eq!(mock.requests(), vec!["http://a/x".to_string()]);
    }

    #[tokio::test]
    async fn unknown_url_returns_error() {
        let mock = MockTransport::new().with_body("http://a/x", "[1]");
        let err = mock.get("http://a/y").await.unwrap_err();
        assert!(err.to_string().contains("no mock response for http://a/y"));
    }

    #[tokio::test]
    async fn failures_carry_message() {
        let mock = MockTransport::new().with_failure("http://a/x", "connection reset");
        let err = mock.get("http://a/x").await.unwrap_err();
        assert_eq!(err.to_string(), "connection reset");
    }

    #[tokio::test]
    async fn clones_share_request_log() {
        let mock = MockTransport::new().with_body("http://a/x", "[]");
        let clone = mock.clone();
        clone.get("http://a/x").await.unwrap();
        assert_eq!(mock.requests().len(), 1);
    }
}
