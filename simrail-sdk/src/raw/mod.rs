//! SimRail API response DTOs.
//!
//! These types map directly to the JSON the SimRail API sends, key for key,
//! upstream spelling mistakes (`Latititude`, `Longitute`, `radioChanels`)
//! included. They are the input to [`Normalizer`](crate::convert::Normalizer).
//! Keys they do not declare are ignored, so a client in
//! [`Raw`](crate::api::Raw) mode hands out the decoded JSON instead.

mod live_data;
mod timetable;

pub use live_data::{DispatchedBy, Server, Station, Train, TrainData};
pub use timetable::{TimetableEntry, TimetableStop};
