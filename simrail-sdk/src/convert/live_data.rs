//! Live data conversions: servers, stations and trains.

use crate::domain::{
    DifficultyLevel, DispatchedBy, Server, SignalSpeed, Station, Train, TrainData, TrainType,
};
use crate::raw;

use super::{Anomaly, Normalizer};

impl Normalizer {
    /// Convert a server. Plain rename, nothing to validate.
    pub fn server(&self, raw: raw::Server) -> Server {
        Server {
            id: raw.id,
            is_active: raw.is_active,
            server_code: raw.server_code,
            server_name: raw.server_name,
            server_region: raw.server_region,
        }
    }

    /// Convert a station, falling back to level 5 for an unknown difficulty.
    pub fn station(&self, raw: raw::Station) -> Station {
        let difficulty_level = DifficultyLevel::from_raw(raw.difficulty_level).unwrap_or_else(|| {
            self.report(Anomaly::UnknownDifficultyLevel(raw.difficulty_level));
            DifficultyLevel::FALLBACK
        });

        Station {
            id: raw.id,
            name: raw.name,
            prefix: raw.prefix,
            additional_image1_url: raw.additional_image1_url,
            additional_image2_url: raw.additional_image2_url,
            main_image_url: raw.main_image_url,
            latitude: raw.latitude,
            longitude: raw.longitude,
            difficulty_level,
            dispatched_by: raw
                .dispatched_by
                .unwrap_or_default()
                .into_iter()
                .map(convert_dispatched_by)
                .collect(),
        }
    }

    /// Convert a train, falling back to `bot` for an unknown type.
    pub fn train(&self, raw: raw::Train) -> Train {
        let kind = TrainType::from_raw(&raw.kind).unwrap_or_else(|| {
            self.report(Anomaly::UnknownTrainType(raw.kind.clone()));
            TrainType::FALLBACK
        });

        Train {
            id: raw.id,
            run_id: raw.run_id,
            server_code: raw.server_code,
            start_station: raw.start_station,
            end_station: raw.end_station,
            train_name: raw.train_name,
            train_no_local: raw.train_no_local,
            kind,
            vehicles: raw.vehicles,
            train_data: convert_train_data(raw.train_data),
        }
    }
}

fn convert_dispatched_by(raw: raw::DispatchedBy) -> DispatchedBy {
    DispatchedBy {
        server_code: raw.server_code,
        steam_id: raw.steam_id,
    }
}

/// Null raw values become absent fields. The signal speed rides along with
/// the signal and is dropped with it.
fn convert_train_data(raw: raw::TrainData) -> TrainData {
    let signal_in_front_speed = raw
        .signal_in_front
        .as_ref()
        .map(|_| SignalSpeed::from_raw(raw.signal_in_front_speed));

    TrainData {
        latitude: raw.latitude,
        longitude: raw.longitude,
        velocity: raw.velocity,
        in_border_station_area: raw.in_border_station_area,
        vd_delayed_timetable_index: raw.vd_delayed_timetable_index,
        controlled_by_steam_id: raw.controlled_by_steam_id,
        distance_to_signal_in_front: raw.distance_to_signal_in_front,
        signal_in_front: raw.signal_in_front,
        signal_in_front_speed,
    }
}
