//! HTTP transport.
//!
//! A transport performs exactly one GET per call and hands back the body as
//! text. It does not look at the status code, validate the URL or retry:
//! SimRail answers failures with JSON envelopes, which the caller decodes
//! like any other body.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use super::error::TransportError;

/// Something that can fetch a URL.
///
/// This abstraction allows [`Api`](super::Api) to be tested with canned
/// responses; see [`MockTransport`](super::MockTransport).
pub trait Transport {
    /// Issue one GET request and return the full response body.
    fn get(&self, url: &str) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport. With `timeout` unset a hung request waits forever.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> impl Future<Output = Result<String, TransportError>> + Send {
        let request = self.http.get(url);
        let url = url.to_string();

        async move {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;

            debug!(%url, status = status.as_u16(), bytes = body.len(), "SimRail response");

            Ok::<_, TransportError>(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_creation() {
        assert!(HttpTransport::new(None).is_ok());
        assert!(HttpTransport::new(Some(Duration::from_secs(5))).is_ok());
    }

    #[tokio::test]
    async fn connection_failure_is_a_transport_error() {
        let transport = HttpTransport::new(Some(Duration::from_secs(5))).unwrap();

        // Nothing listens on port 9 of the loopback interface.
        let err = transport.get("http://127.0.0.1:9/servers-open").await.unwrap_err();
        assert!(err.get_ref().downcast_ref::<reqwest::Error>().is_some());
    }
}
