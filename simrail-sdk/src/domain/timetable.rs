//! Timetable types.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// What a train does at a timetable point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopType {
    /// Stops for passengers.
    CommercialStop,
    /// Stops for operational reasons only.
    NoncommercialStop,
    /// Passes through.
    NoStopOver,
}

impl StopType {
    /// Stop type used when the API reports an unknown value.
    pub const FALLBACK: StopType = StopType::NoStopOver;

    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "CommercialStop" => Some(Self::CommercialStop),
            "NoncommercialStop" => Some(Self::NoncommercialStop),
            "NoStopOver" => Some(Self::NoStopOver),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CommercialStop => "CommercialStop",
            Self::NoncommercialStop => "NoncommercialStop",
            Self::NoStopOver => "NoStopOver",
        }
    }

    /// Whether the train actually halts here.
    pub fn is_stop(self) -> bool {
        self != Self::NoStopOver
    }
}

impl fmt::Display for StopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One train's timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    /// Timetable-side train ID. Matches [`Train::run_id`](super::Train).
    pub run_id: String,

    pub train_no_local: String,

    /// Absent when the train has no international number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_no_international: Option<String>,

    pub train_name: String,

    /// Weight in metric tonnes.
    pub train_weight: f64,

    /// Length in meters.
    pub train_length: f64,

    pub loco_type: String,

    pub start_station: String,

    pub end_station: String,

    /// Departure from the origin, `hh:mm:ss`.
    pub starts_at: String,

    /// Arrival at the destination, `hh:mm:ss`.
    pub ends_at: String,

    /// Train number this service continues as. Absent when it terminates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continues_as: Option<String>,

    /// Points along the route, in running order.
    pub timetable: Vec<TimetableStop>,
}

impl TimetableEntry {
    /// `starts_at` as a time of day, if it is well-formed.
    pub fn starts_at_time(&self) -> Option<NaiveTime> {
        parse_time_of_day(&self.starts_at)
    }

    /// `ends_at` as a time of day, if it is well-formed.
    pub fn ends_at_time(&self) -> Option<NaiveTime> {
        parse_time_of_day(&self.ends_at)
    }

    /// Points where the train halts, skipping pass-throughs.
    pub fn stops(&self) -> impl Iterator<Item = &TimetableStop> {
        self.timetable.iter().filter(|stop| stop.stop_type.is_stop())
    }
}

/// One point on a train's route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableStop {
    pub point_id: String,

    pub name_of_point: String,

    /// Dispatcher-facing name of the point.
    pub name_for_person: String,

    pub line: u32,

    pub max_speed: u32,

    /// Distance along the line in kilometers.
    pub kilometrage: f64,

    pub departure_time: String,

    pub displayed_train_number: String,

    /// Train series, e.g. `"ROJ"`.
    pub train_type: String,

    pub stop_type: StopType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,

    /// Platform in Roman numerals, e.g. `"VI"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_category: Option<String>,

    /// Dispatch station responsible for this point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervised_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<u32>,

    /// Radio channels in use after this point, e.g. `["R1", "R4"]`.
    /// Never present as an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radio_channels: Option<Vec<String>>,
}

fn parse_time_of_day(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").ok()
}
