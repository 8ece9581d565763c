//! Output format selection.
//!
//! An [`Api`](super::Api) either converts responses into [`crate::domain`]
//! types or hands back the records exactly as decoded from the response.
//! The choice is a type parameter, so each operation has exactly one return
//! type.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::convert::Normalizer;
use crate::{domain, raw};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Converted {}
    impl Sealed for super::Raw {}
}

/// How an [`Api`](super::Api) shapes the records it returns.
///
/// Each method receives the payload's records as decoded JSON. A record
/// that does not fit its wire shape fails the whole list.
pub trait DataFormat: sealed::Sealed {
    type Server;
    type Station;
    type Train;
    type TimetableEntry;

    fn servers(
        normalizer: &Normalizer,
        records: Vec<Value>,
    ) -> Result<Vec<Self::Server>, serde_json::Error>;
    fn stations(
        normalizer: &Normalizer,
        records: Vec<Value>,
    ) -> Result<Vec<Self::Station>, serde_json::Error>;
    fn trains(
        normalizer: &Normalizer,
        records: Vec<Value>,
    ) -> Result<Vec<Self::Train>, serde_json::Error>;
    fn timetable_entries(
        normalizer: &Normalizer,
        records: Vec<Value>,
    ) -> Result<Vec<Self::TimetableEntry>, serde_json::Error>;
}

/// Normalize responses into [`crate::domain`] types. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converted;

/// Return every record as the JSON value the server sent: no renaming, no
/// validation, no fallbacks, unknown keys and number formatting intact.
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

/// Decode every record into its wire DTO first, then convert them all.
/// No anomaly is reported for a list that turns out to be malformed.
fn convert_all<R: DeserializeOwned, D>(
    records: Vec<Value>,
    convert: impl FnMut(R) -> D,
) -> Result<Vec<D>, serde_json::Error> {
    let decoded = records
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<R>, _>>()?;
    Ok(decoded.into_iter().map(convert).collect())
}

impl DataFormat for Converted {
    type Server = domain::Server;
    type Station = domain::Station;
    type Train = domain::Train;
    type TimetableEntry = domain::TimetableEntry;

    fn servers(
        normalizer: &Normalizer,
        records: Vec<Value>,
    ) -> Result<Vec<Self::Server>, serde_json::Error> {
        convert_all(records, |r: raw::Server| normalizer.server(r))
    }

    fn stations(
        normalizer: &Normalizer,
        records: Vec<Value>,
    ) -> Result<Vec<Self::Station>, serde_json::Error> {
        convert_all(records, |r: raw::Station| normalizer.station(r))
    }

    fn trains(
        normalizer: &Normalizer,
        records: Vec<Value>,
    ) -> Result<Vec<Self::Train>, serde_json::Error> {
        convert_all(records, |r: raw::Train| normalizer.train(r))
    }

    fn timetable_entries(
        normalizer: &Normalizer,
        records: Vec<Value>,
    ) -> Result<Vec<Self::TimetableEntry>, serde_json::Error> {
        convert_all(records, |r: raw::TimetableEntry| normalizer.timetable_entry(r))
    }
}

impl DataFormat for Raw {
    type Server = Value;
    type Station = Value;
    type Train = Value;
    type TimetableEntry = Value;

    fn servers(_: &Normalizer, records: Vec<Value>) -> Result<Vec<Value>, serde_json::Error> {
        Ok(records)
    }

    fn stations(_: &Normalizer, records: Vec<Value>) -> Result<Vec<Value>, serde_json::Error> {
        Ok(records)
    }

    fn trains(_: &Normalizer, records: Vec<Value>) -> Result<Vec<Value>, serde_json::Error> {
        Ok(records)
    }

    fn timetable_entries(
        _: &Normalizer,
        records: Vec<Value>,
    ) -> Result<Vec<Value>, serde_json::Error> {
        Ok(records)
    }
}
