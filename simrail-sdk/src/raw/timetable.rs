//! Raw records from the timetable endpoint (`getAllTimetables`).

use serde::{Deserialize, Serialize};

/// One train's timetable as sent by `getAllTimetables`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    /// Following train number, or `""` when the train terminates.
    pub continues_as: String,

    pub end_station: String,

    /// Arrival at the destination, `hh:mm:ss`.
    pub ends_at: String,

    pub loco_type: String,

    pub run_id: String,

    pub start_station: String,

    /// Departure from the origin, `hh:mm:ss`.
    pub starts_at: String,

    pub timetable: Vec<TimetableStop>,

    /// Length in meters.
    pub train_length: f64,

    pub train_name: String,

    /// International train number, or `""` when there is none.
    pub train_no_international: String,

    pub train_no_local: String,

    /// Weight in metric tonnes.
    pub train_weight: f64,
}

/// One point on a train's route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableStop {
    #[serde(default)]
    pub arrival_time: Option<String>,

    pub departure_time: String,

    pub displayed_train_number: String,

    pub line: u32,

    pub max_speed: u32,

    /// Distance along the line in kilometers, despite the name.
    pub mileage: f64,

    pub name_for_person: String,

    pub name_of_point: String,

    /// Platform in Roman numerals, e.g. `"VI"`.
    #[serde(default)]
    pub platform: Option<String>,

    pub point_id: String,

    /// Comma-separated list such as `"R1, R4"`.
    #[serde(rename = "radioChanels")]
    pub radio_channels: String,

    #[serde(default)]
    pub station_category: Option<String>,

    /// Unvalidated stop type.
    pub stop_type: String,

    #[serde(default)]
    pub supervised_by: Option<String>,

    #[serde(default)]
    pub track: Option<u32>,

    pub train_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_reads_misspelled_radio_key() {
        let json = r#"{
            "arrivalTime": null,
            "departureTime": "2024-01-01 05:10:00",
            "displayedTrainNumber": "14101",
            "line": 1,
            "maxSpeed": 100,
            "mileage": 12.5,
            "nameForPerson": "Sosnowiec Główny",
            "nameOfPoint": "Sosnowiec Główny",
            "platform": null,
            "pointId": "4500",
            "radioChanels": "R1, R4",
            "stationCategory": null,
            "stopType": "NoStopOver",
            "supervisedBy": null,
            "track": null,
            "trainType": "ROJ"
        }"#;

        let stop: TimetableStop = serde_json::from_str(json).unwrap();
        assert_eq!(stop.radio_channels, "R1, R4");
        assert_eq!(stop.mileage, 12.5);
        assert!(stop.track.is_none());

        let back = serde_json::to_value(&stop).unwrap();
        assert!(back.get("radioChanels").is_some());
        assert!(back.get("platform").unwrap().is_null());
    }
}
