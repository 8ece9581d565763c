//! Dispatch station types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// How hard a station is to dispatch, from 1 (easiest) to 5.
///
/// # Examples
///
/// ```
/// use simrail_sdk::domain::DifficultyLevel;
///
/// assert_eq!(DifficultyLevel::from_raw(2), Some(DifficultyLevel::Two));
/// assert_eq!(DifficultyLevel::from_raw(9), None);
/// assert_eq!(DifficultyLevel::Four.value(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum DifficultyLevel {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl DifficultyLevel {
    /// Level used when the API reports something outside 1 to 5.
    pub const FALLBACK: DifficultyLevel = DifficultyLevel::Five;

    /// Map a raw API number onto a level, if it is one of 1 to 5.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            _ => None,
        }
    }

    /// Numeric level, 1 to 5.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A player dispatching at a station.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchedBy {
    /// Server the player is on. Matches [`Server::server_code`](super::Server).
    pub server_code: String,

    pub steam_id: String,
}

/// An active dispatch station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: String,

    pub name: String,

    /// Short station prefix, e.g. `"KO"`.
    pub prefix: String,

    #[serde(rename = "additionalImage1URL")]
    pub additional_image1_url: String,

    #[serde(rename = "additionalImage2URL")]
    pub additional_image2_url: String,

    #[serde(rename = "mainImageURL")]
    pub main_image_url: String,

    pub latitude: f64,

    pub longitude: f64,

    pub difficulty_level: DifficultyLevel,

    /// Players currently dispatching here, in upstream order. Empty when
    /// the station is run by the AI.
    #[serde(default)]
    pub dispatched_by: Vec<DispatchedBy>,
}

impl Station {
    /// Whether at least one player is dispatching this station.
    pub fn is_player_dispatched(&self) -> bool {
        !self.dispatched_by.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_accepts_only_one_to_five() {
        for raw in 1..=5 {
            let level = DifficultyLevel::from_raw(raw).unwrap();
            assert_eq!(i64::from(level.value()), raw);
        }
        assert!(DifficultyLevel::from_raw(0).is_none());
        assert!(DifficultyLevel::from_raw(6).is_none());
        assert!(DifficultyLevel::from_raw(-1).is_none());
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&DifficultyLevel::Three).unwrap();
        assert_eq!(json, "3");

        let level: DifficultyLevel = serde_json::from_str("5").unwrap();
        assert_eq!(level, DifficultyLevel::Five);
    }

    #[test]
    fn display() {
        assert_eq!(DifficultyLevel::One.to_string(), "1");
    }
}
