//! Client configuration.

use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::error::TransportError;

/// Default base URL for live data (servers, stations, trains).
pub const DEFAULT_LIVE_DATA_URL: &str = "https://panel.simrail.eu:8084";

/// Default base URL for timetables.
pub const DEFAULT_TIMETABLE_URL: &str = "https://api1.aws.simrail.eu:8082/api";

/// Base URLs of the two SimRail APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Base URL for `servers-open`, `stations-open` and `trains-open`.
    pub live_data: String,
    /// Base URL for `getAllTimetables`.
    pub timetable: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            live_data: DEFAULT_LIVE_DATA_URL.to_string(),
            timetable: DEFAULT_TIMETABLE_URL.to_string(),
        }
    }
}

/// Configuration for the SimRail client.
///
/// Whether responses are converted is not part of this struct; it is the
/// [`DataFormat`](super::DataFormat) type parameter of [`Api`](super::Api).
///
/// Derives `Deserialize` with defaults for every field, so it can sit in a
/// host application's own config file:
///
/// ```
/// use simrail_sdk::ApiConfig;
///
/// let config: ApiConfig = serde_json::from_str(r#"{ "timeout_secs": 10 }"#).unwrap();
/// assert_eq!(config.endpoints.live_data, "https://panel.simrail.eu:8084");
/// assert_eq!(config.timeout_secs, Some(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoints: Endpoints,
    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// Create a config pointing at the public SimRail servers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom live data base URL (for testing or a proxy).
    pub fn with_live_data_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.live_data = url.into();
        self
    }

    /// Set a custom timetable base URL.
    pub fn with_timetable_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.timetable = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// URL of a live data endpoint, with `query` percent-encoded.
    pub(crate) fn live_data_url(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        endpoint_url(&self.endpoints.live_data, path, query)
    }

    /// URL of a timetable endpoint, with `query` percent-encoded.
    pub(crate) fn timetable_url(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        endpoint_url(&self.endpoints.timetable, path, query)
    }
}

fn endpoint_url(base: &str, path: &str, query: &[(&str, &str)]) -> Result<String, TransportError> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path);
    let mut url = Url::parse(&joined).map_err(TransportError::new)?;
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url.into())
}
