//! SimRail API client.
//!
//! Each operation performs one GET, checks the response envelope where the
//! endpoint has one and maps the payload through the client's
//! [`DataFormat`].

use std::marker::PhantomData;

use serde_json::Value;
use tracing::debug;

use crate::convert::{Anomaly, Normalizer};

use super::config::ApiConfig;
use super::envelope::{decode_bare, decode_payload};
use super::error::ApiError;
use super::format::{Converted, DataFormat, Raw};
use super::transport::{HttpTransport, Transport};

/// SimRail API client.
///
/// `F` picks the output shape ([`Converted`] domain types by default, or
/// [`Raw`] JSON records as sent) and `T` the transport. The client holds no
/// mutable state, so a clone can be shared freely between tasks.
///
/// ```no_run
/// use simrail_sdk::{Api, ApiConfig};
///
/// # async fn run() -> Result<(), simrail_sdk::ApiError> {
/// let api = Api::new(ApiConfig::new())?;
/// for server in api.list_servers().await? {
///     let trains = api.list_trains(&server.server_code).await?;
///     println!("{}: {} trains", server.server_name, trains.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Api<F: DataFormat = Converted, T: Transport = HttpTransport> {
    config: ApiConfig,
    transport: T,
    normalizer: Normalizer,
    format: PhantomData<fn() -> F>,
}

impl Api<Converted, HttpTransport> {
    /// Create a client that converts responses into domain types.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl Api<Raw, HttpTransport> {
    /// Create a client that returns upstream records untouched.
    pub fn raw(config: ApiConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<F: DataFormat, T: Transport> Api<F, T> {
    /// Create a client over any transport.
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            normalizer: Normalizer::new(),
            format: PhantomData,
        }
    }

    /// Replace the normalizer used for conversions.
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Call `hook` for every unrecognized value replaced during conversion.
    /// Anomalies are logged through `tracing` either way.
    pub fn on_anomaly(self, hook: impl Fn(&Anomaly) + Send + Sync + 'static) -> Self {
        self.with_normalizer(Normalizer::with_hook(hook))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// List the multiplayer servers.
    pub async fn list_servers(&self) -> Result<Vec<F::Server>, ApiError> {
        let url = self.config.live_data_url("servers-open", &[])?;
        let records = self.fetch(&url).await?;
        F::servers(&self.normalizer, records).map_err(ApiError::ResponseBodyDecode)
    }

    /// List the dispatch stations on a server.
    pub async fn list_stations(&self, server_code: &str) -> Result<Vec<F::Station>, ApiError> {
        let url = self
            .config
            .live_data_url("stations-open", &[("serverCode", server_code)])?;
        let records = self.fetch(&url).await?;
        F::stations(&self.normalizer, records).map_err(ApiError::ResponseBodyDecode)
    }

    /// List the trains running on a server.
    pub async fn list_trains(&self, server_code: &str) -> Result<Vec<F::Train>, ApiError> {
        let url = self
            .config
            .live_data_url("trains-open", &[("serverCode", server_code)])?;
        let records = self.fetch(&url).await?;
        F::trains(&self.normalizer, records).map_err(ApiError::ResponseBodyDecode)
    }

    /// Fetch the timetable of every train on a server.
    pub async fn get_timetable(
        &self,
        server_code: &str,
    ) -> Result<Vec<F::TimetableEntry>, ApiError> {
        let url = self
            .config
            .timetable_url("getAllTimetables", &[("serverCode", server_code)])?;
        let records = self.fetch_bare(&url).await?;
        F::timetable_entries(&self.normalizer, records).map_err(ApiError::ResponseBodyDecode)
    }

    /// Fetch the timetable of one train, by its national train number.
    ///
    /// Returns [`ApiError::NoResult`] if the server knows no such train.
    pub async fn get_train_timetable(
        &self,
        server_code: &str,
        train_no_local: &str,
    ) -> Result<F::TimetableEntry, ApiError> {
        let url = self.config.timetable_url(
            "getAllTimetables",
            &[("serverCode", server_code), ("train", train_no_local)],
        )?;
        let records = self.fetch_bare(&url).await?;
        let first = records.into_iter().take(1).collect();
        F::timetable_entries(&self.normalizer, first)
            .map_err(ApiError::ResponseBodyDecode)?
            .into_iter()
            .next()
            .ok_or(ApiError::NoResult)
    }

    /// GET an enveloped endpoint and return the records in its `data` list.
    async fn fetch(&self, url: &str) -> Result<Vec<Value>, ApiError> {
        debug!(%url, "GET");
        let body = self.transport.get(url).await?;
        decode_payload(&body)
    }

    /// GET an endpoint that answers with a bare list.
    async fn fetch_bare(&self, url: &str) -> Result<Vec<Value>, ApiError> {
        debug!(%url, "GET");
        let body = self.transport.get(url).await?;
        decode_bare(&body)
    }
}
