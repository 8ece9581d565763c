//! SimRail client error types.

use std::error::Error as StdError;
use std::fmt;

/// Boxed error from whatever performed the HTTP request.
type BoxError = Box<dyn StdError + Send + Sync>;

/// The underlying network call failed.
///
/// Wraps the transport's own error without adding text of its own: the
/// display and source chain are those of the original error, which can be
/// recovered with [`TransportError::get_ref`] or
/// [`TransportError::into_inner`].
#[derive(Debug)]
pub struct TransportError {
    inner: BoxError,
}

impl TransportError {
    /// Wrap any error (or message) coming out of a transport.
    pub fn new(err: impl Into<BoxError>) -> Self {
        Self { inner: err.into() }
    }

    /// The original error, e.g. for `downcast_ref::<reqwest::Error>()`.
    pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }

    pub fn into_inner(self) -> BoxError {
        self.inner
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err)
    }
}

/// Errors from a SimRail API call. Every variant ends the call; nothing is
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (connection, DNS, body read).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered, but the body is not JSON of the expected shape.
    #[error("Couldn't decode response body!")]
    ResponseBodyDecode(#[source] serde_json::Error),

    /// The envelope's `result` flag was not `true`, or a single-train
    /// timetable query matched nothing.
    ///
    /// Upstream uses the same signal for "nothing matched" and "request
    /// rejected", so the two cannot be told apart.
    #[error("The server didn't return any results!")]
    NoResult,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ApiError::NoResult.to_string(),
            "The server didn't return any results!"
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::ResponseBodyDecode(json_err);
        assert_eq!(err.to_string(), "Couldn't decode response body!");
        assert!(err.source().is_some());
    }

    #[test]
    fn transport_error_is_not_rewrapped() {
        let err = ApiError::from(TransportError::new("connection refused"));
        assert_eq!(err.to_string(), "connection refused");

        match err {
            ApiError::Transport(inner) => {
                assert_eq!(inner.get_ref().to_string(), "connection refused");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn transport_error_keeps_original_type() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = TransportError::new(io);
        let original = err.get_ref().downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(original.kind(), std::io::ErrorKind::TimedOut);
    }
}
