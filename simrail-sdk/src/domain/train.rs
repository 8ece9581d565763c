//! Live train types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{TimetableEntry, TimetableStop};

/// Raw speed value the API uses to mean "no enforced limit".
pub const VMAX_VALUE: i32 = 32767;

/// Who is driving a train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainType {
    Bot,
    User,
}

impl TrainType {
    /// Type used when the API reports something other than `bot` or `user`.
    pub const FALLBACK: TrainType = TrainType::Bot;

    /// Map a raw API string onto a train type.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "bot" => Some(Self::Bot),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bot => "bot",
            Self::User => "user",
        }
    }
}

impl fmt::Display for TrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Speed limit at the next signal.
///
/// Serializes as the string `"vmax"` or as a plain number of km/h.
///
/// # Examples
///
/// ```
/// use simrail_sdk::domain::SignalSpeed;
///
/// assert_eq!(SignalSpeed::from_raw(32767), SignalSpeed::Vmax);
/// assert_eq!(SignalSpeed::from_raw(60), SignalSpeed::Limit(60));
/// assert_eq!(SignalSpeed::Limit(60).limit(), Some(60));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalSpeed {
    /// No enforced limit; the train may run at its maximum speed.
    Vmax,
    /// Limit in km/h.
    Limit(i32),
}

impl SignalSpeed {
    /// Interpret a raw API speed, mapping the sentinel to [`SignalSpeed::Vmax`].
    pub fn from_raw(raw: i32) -> Self {
        if raw == VMAX_VALUE {
            Self::Vmax
        } else {
            Self::Limit(raw)
        }
    }

    /// The numeric limit, or `None` for vmax.
    pub fn limit(self) -> Option<i32> {
        match self {
            Self::Vmax => None,
            Self::Limit(kmh) => Some(kmh),
        }
    }
}

impl fmt::Display for SignalSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vmax => f.write_str("vmax"),
            Self::Limit(kmh) => write!(f, "{kmh} km/h"),
        }
    }
}

impl Serialize for SignalSpeed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Vmax => serializer.serialize_str("vmax"),
            Self::Limit(kmh) => serializer.serialize_i32(*kmh),
        }
    }
}

impl<'de> Deserialize<'de> for SignalSpeed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Limit(i32),
            Symbol(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Limit(kmh) => Ok(Self::Limit(kmh)),
            Repr::Symbol(s) if s == "vmax" => Ok(Self::Vmax),
            Repr::Symbol(s) => Err(serde::de::Error::custom(format!(
                "expected a number or \"vmax\", got {s:?}"
            ))),
        }
    }
}

/// Live telemetry for a train.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainData {
    pub latitude: f64,

    pub longitude: f64,

    pub velocity: f64,

    /// Set while the train is in the unplayable border area of the map.
    pub in_border_station_area: bool,

    /// Index of the current stop in this train's timetable.
    pub vd_delayed_timetable_index: i64,

    /// Steam ID of the driving player, for user-driven trains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controlled_by_steam_id: Option<String>,

    /// Distance to the next signal in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_signal_in_front: Option<f64>,

    /// Next signal, as `"<id>@<undocumented>"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_in_front: Option<String>,

    /// Present exactly when `signal_in_front` is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_in_front_speed: Option<SignalSpeed>,
}

impl TrainData {
    /// The stop this train is currently at or heading to, looked up in its
    /// timetable by `vd_delayed_timetable_index`.
    pub fn current_stop<'a>(&self, timetable: &'a TimetableEntry) -> Option<&'a TimetableStop> {
        let index = usize::try_from(self.vd_delayed_timetable_index).ok()?;
        timetable.timetable.get(index)
    }
}

/// An active train.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Train {
    /// Live-data train ID (independent of `run_id`).
    pub id: String,

    /// Timetable-side ID. Matches [`TimetableEntry::run_id`].
    pub run_id: String,

    pub server_code: String,

    /// Origin display name (not a station ID).
    pub start_station: String,

    /// Destination display name (not a station ID).
    pub end_station: String,

    pub train_name: String,

    pub train_no_local: String,

    #[serde(rename = "type")]
    pub kind: TrainType,

    /// Undocumented upstream; passed through untouched.
    pub vehicles: Vec<serde_json::Value>,

    pub train_data: TrainData,
}
