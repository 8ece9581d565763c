//! Response envelope handling.
//!
//! Live data responses are wrapped as
//! `{"result": true, "data": [...], "count": n, "description": "..."}`.
//! The timetable endpoint answers with a bare JSON array and has no success
//! flag to check.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;

/// Top-level wrapper of a live data response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    /// Success flag, kept as sent. Anything but the boolean `true` means
    /// there is no usable data.
    #[serde(default)]
    pub result: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Number of results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.result == Value::Bool(true)
    }

    /// The payload of a successful response.
    ///
    /// A flag other than `true` is [`ApiError::NoResult`] even when `data`
    /// is present.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::NoResult);
        }
        self.data.ok_or(ApiError::NoResult)
    }
}

/// Decode an enveloped response body and extract its payload as `T`.
///
/// The success flag is read straight from the JSON before anything else is
/// deserialized, so a failed response with a malformed flag or payload is
/// still [`ApiError::NoResult`]. A body that is valid JSON but not an object
/// has no flag and is treated the same way.
pub(crate) fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(ApiError::ResponseBodyDecode)?;

    let Value::Object(mut fields) = value else {
        return Err(ApiError::NoResult);
    };
    if fields.get("result") != Some(&Value::Bool(true)) {
        return Err(ApiError::NoResult);
    }
    let payload = match fields.remove("data") {
        None | Some(Value::Null) => return Err(ApiError::NoResult),
        Some(data) => data,
    };

    serde_json::from_value(payload).map_err(ApiError::ResponseBodyDecode)
}

/// Decode a response body that carries its payload without an envelope.
pub(crate) fn decode_bare<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(ApiError::ResponseBodyDecode)
}
