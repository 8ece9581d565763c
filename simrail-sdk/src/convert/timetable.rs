//! Timetable conversions.

use crate::domain::{StopType, TimetableEntry, TimetableStop};
use crate::raw;

use super::{Anomaly, Normalizer};

impl Normalizer {
    /// Convert one train's timetable and all of its stops.
    pub fn timetable_entry(&self, raw: raw::TimetableEntry) -> TimetableEntry {
        TimetableEntry {
            run_id: raw.run_id,
            train_no_local: raw.train_no_local,
            train_no_international: non_empty(raw.train_no_international),
            train_name: raw.train_name,
            train_weight: raw.train_weight,
            train_length: raw.train_length,
            loco_type: raw.loco_type,
            start_station: raw.start_station,
            end_station: raw.end_station,
            starts_at: raw.starts_at,
            ends_at: raw.ends_at,
            continues_as: non_empty(raw.continues_as),
            timetable: raw
                .timetable
                .into_iter()
                .map(|stop| self.timetable_stop(stop))
                .collect(),
        }
    }

    /// Convert a single timetable point, falling back to `NoStopOver` for
    /// an unknown stop type.
    pub fn timetable_stop(&self, raw: raw::TimetableStop) -> TimetableStop {
        let stop_type = StopType::from_raw(&raw.stop_type).unwrap_or_else(|| {
            self.report(Anomaly::UnknownStopType(raw.stop_type.clone()));
            StopType::FALLBACK
        });

        TimetableStop {
            point_id: raw.point_id,
            name_of_point: raw.name_of_point,
            name_for_person: raw.name_for_person,
            line: raw.line,
            max_speed: raw.max_speed,
            kilometrage: raw.mileage,
            departure_time: raw.departure_time,
            displayed_train_number: raw.displayed_train_number,
            train_type: raw.train_type,
            stop_type,
            arrival_time: raw.arrival_time,
            platform: raw.platform,
            station_category: raw.station_category,
            supervised_by: raw.supervised_by,
            track: raw.track,
            radio_channels: parse_radio_channels(&raw.radio_channels),
        }
    }
}

/// Parse the API's comma-separated radio channel list.
///
/// All whitespace is removed before splitting. Returns `None` rather than an
/// empty list when nothing is left.
///
/// # Examples
///
/// ```
/// use simrail_sdk::convert::parse_radio_channels;
///
/// assert_eq!(
///     parse_radio_channels("R1, R4"),
///     Some(vec!["R1".to_string(), "R4".to_string()])
/// );
/// assert_eq!(parse_radio_channels(" "), None);
/// ```
pub fn parse_radio_channels(raw: &str) -> Option<Vec<String>> {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return None;
    }
    Some(stripped.split(',').map(str::to_string).collect())
}

/// The empty string means "not applicable" upstream.
fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::test_support::recording_normalizer;

    pub(super) fn raw_stop(stop_type: &str, radio_channels: &str) -> raw::TimetableStop {
        raw::TimetableStop {
            arrival_time: None,
            departure_time: "2024-01-01 05:10:00".to_string(),
            displayed_train_number: "14101".to_string(),
            line: 133,
            max_speed: 120,
            mileage: 34.2,
            name_for_person: "Katowice".to_string(),
            name_of_point: "Katowice".to_string(),
            platform: None,
            point_id: "1432".to_string(),
            radio_channels: radio_channels.to_string(),
            station_category: None,
            stop_type: stop_type.to_string(),
            supervised_by: None,
            track: None,
            train_type: "ROJ".to_string(),
        }
    }

    fn raw_entry(continues_as: &str, train_no_international: &str) -> raw::TimetableEntry {
        raw::TimetableEntry {
            continues_as: continues_as.to_string(),
            end_station: "Kraków Główny".to_string(),
            ends_at: "06:45:00".to_string(),
            loco_type: "EN76".to_string(),
            run_id: "73c0f0e2".to_string(),
            start_station: "Katowice".to_string(),
            starts_at: "05:10:00".to_string(),
            timetable: vec![
                raw_stop("CommercialStop", "R1"),
                raw_stop("NoStopOver", ""),
            ],
            train_length: 75.0,
            train_name: "ROJ".to_string(),
            train_no_international: train_no_international.to_string(),
            train_no_local: "14101".to_string(),
            train_weight: 140.0,
        }
    }

    #[test]
    fn radio_channels_are_split() {
        assert_eq!(
            parse_radio_channels("R1, R4"),
            Some(vec!["R1".to_string(), "R4".to_string()])
        );
        assert_eq!(
            parse_radio_channels("R2\t,\nR7 ,R3"),
            Some(vec!["R2".to_string(), "R7".to_string(), "R3".to_string()])
        );
        assert_eq!(parse_radio_channels("R1"), Some(vec!["R1".to_string()]));
    }

    #[test]
    fn empty_radio_channels_are_absent() {
        assert_eq!(parse_radio_channels(""), None);
        assert_eq!(parse_radio_channels("   "), None);

        let (n, _) = recording_normalizer();
        let stop = n.timetable_stop(raw_stop("NoStopOver", ""));
        let value = serde_json::to_value(&stop).unwrap();
        assert!(value.get("radioChannels").is_none());
    }

    #[test]
    fn mileage_becomes_kilometrage() {
        let (n, _) = recording_normalizer();
        let stop = n.timetable_stop(raw_stop("CommercialStop", "R1"));
        assert_eq!(stop.kilometrage, 34.2);

        let value = serde_json::to_value(&stop).unwrap();
        assert_eq!(value["kilometrage"], serde_json::json!(34.2));
        assert!(value.get("mileage").is_none());
    }

    #[test]
    fn unknown_stop_type_falls_back() {
        let (n, seen) = recording_normalizer();
        let stop = n.timetable_stop(raw_stop("Teleport", ""));
        assert_eq!(stop.stop_type, StopType::NoStopOver);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Anomaly::UnknownStopType("Teleport".to_string())]
        );
    }

    #[test]
    fn null_stop_fields_are_absent() {
        let (n, _) = recording_normalizer();
        let stop = n.timetable_stop(raw_stop("CommercialStop", ""));
        let value = serde_json::to_value(&stop).unwrap();
        for key in [
            "arrivalTime",
            "platform",
            "stationCategory",
            "supervisedBy",
            "track",
        ] {
            assert!(value.get(key).is_none(), "{key} should be absent");
        }
    }

    #[test]
    fn populated_stop_fields_are_kept() {
        let (n, _) = recording_normalizer();
        let mut raw = raw_stop("CommercialStop", "R1");
        raw.arrival_time = Some("2024-01-01 05:09:00".to_string());
        raw.platform = Some("IV".to_string());
        raw.station_category = Some("A".to_string());
        raw.supervised_by = Some("Katowice".to_string());
        raw.track = Some(2);

        let stop = n.timetable_stop(raw);
        assert_eq!(stop.arrival_time.as_deref(), Some("2024-01-01 05:09:00"));
        assert_eq!(stop.platform.as_deref(), Some("IV"));
        assert_eq!(stop.station_category.as_deref(), Some("A"));
        assert_eq!(stop.supervised_by.as_deref(), Some("Katowice"));
        assert_eq!(stop.track, Some(2));
    }

    #[test]
    fn empty_strings_are_elided() {
        let (n, _) = recording_normalizer();
        let entry = n.timetable_entry(raw_entry("", ""));
        assert!(entry.continues_as.is_none());
        assert!(entry.train_no_international.is_none());

        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("continuesAs").is_none());
        assert!(value.get("trainNoInternational").is_none());
    }

    #[test]
    fn populated_strings_are_kept() {
        let (n, _) = recording_normalizer();
        let entry = n.timetable_entry(raw_entry("5120", "EC 112"));
        assert_eq!(entry.continues_as.as_deref(), Some("5120"));
        assert_eq!(entry.train_no_international.as_deref(), Some("EC 112"));
        assert_eq!(entry.timetable.len(), 2);
        assert_eq!(
            entry.timetable[0].radio_channels,
            Some(vec!["R1".to_string()])
        );
    }
}
