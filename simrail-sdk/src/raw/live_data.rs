//! Raw records from the live data endpoint (`servers-open`,
//! `stations-open`, `trains-open`).

use serde::{Deserialize, Serialize};

/// A multiplayer server as sent by `servers-open`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Server {
    /// Opaque server ID (independent of `server_code`).
    #[serde(rename = "id")]
    pub id: String,

    pub is_active: bool,

    /// Human-facing key used by every other query.
    pub server_code: String,

    pub server_name: String,

    pub server_region: String,
}

/// A dispatch station as sent by `stations-open`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Station {
    #[serde(rename = "AdditionalImage1URL")]
    pub additional_image1_url: String,

    #[serde(rename = "AdditionalImage2URL")]
    pub additional_image2_url: String,

    /// Unvalidated difficulty; the game uses 1 to 5.
    pub difficulty_level: i64,

    /// Players dispatching at this station. Upstream sometimes omits the
    /// key or sends `null`.
    #[serde(default)]
    pub dispatched_by: Option<Vec<DispatchedBy>>,

    #[serde(rename = "id")]
    pub id: String,

    #[serde(rename = "Latititude")]
    pub latitude: f64,

    pub longitude: f64,

    #[serde(rename = "MainImageURL")]
    pub main_image_url: String,

    pub name: String,

    pub prefix: String,
}

/// A player dispatching at a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DispatchedBy {
    pub server_code: String,

    pub steam_id: String,
}

/// An active train as sent by `trains-open`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Train {
    pub end_station: String,

    /// Live-data train ID (independent of `run_id`).
    #[serde(rename = "id")]
    pub id: String,

    /// Timetable-side train ID (independent of `id`).
    pub run_id: String,

    pub server_code: String,

    pub start_station: String,

    pub train_data: TrainData,

    pub train_name: String,

    pub train_no_local: String,

    /// Unvalidated operator type; the game uses `"bot"` and `"user"`.
    #[serde(rename = "Type")]
    pub kind: String,

    /// Undocumented upstream; carried as opaque JSON.
    pub vehicles: Vec<serde_json::Value>,
}

/// Live telemetry nested in a [`Train`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainData {
    #[serde(rename = "ControlledBySteamID", default)]
    pub controlled_by_steam_id: Option<String>,

    /// Distance to the next signal in meters.
    #[serde(default)]
    pub distance_to_signal_in_front: Option<f64>,

    /// Set while the train is in the unplayable border area of the map.
    pub in_border_station_area: bool,

    #[serde(rename = "Latititute")]
    pub latitude: f64,

    #[serde(rename = "Longitute")]
    pub longitude: f64,

    #[serde(default)]
    pub signal_in_front: Option<String>,

    /// Speed limit at the next signal in km/h, `32767` for vmax.
    pub signal_in_front_speed: i32,

    #[serde(rename = "VDDelayedTimetableIndex")]
    pub vd_delayed_timetable_index: i64,

    pub velocity: f64,
}
