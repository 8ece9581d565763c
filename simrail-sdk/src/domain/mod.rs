//! Domain types for SimRail data.
//!
//! These are the normalized shapes returned by a converted
//! [`Api`](crate::Api): consistent camelCase keys, closed enums instead of
//! free-form strings, and optional fields that are absent rather than
//! `null` or empty.

mod server;
mod station;
mod timetable;
mod train;

pub use server::Server;
pub use station::{DifficultyLevel, DispatchedBy, Station};
pub use timetable::{StopType, TimetableEntry, TimetableStop};
pub use train::{SignalSpeed, Train, TrainData, TrainType, VMAX_VALUE};
