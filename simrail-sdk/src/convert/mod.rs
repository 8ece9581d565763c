//! Conversion from SimRail DTOs to domain types.
//!
//! Every mapping here is total: a raw record always produces a complete
//! domain value. Values outside a closed set are replaced by a fallback and
//! reported as an [`Anomaly`] instead of failing the whole response.

mod live_data;
mod timetable;

use std::fmt;
use std::sync::Arc;

use tracing::warn;

pub use timetable::parse_radio_channels;

/// Callback invoked for every [`Anomaly`] a [`Normalizer`] encounters.
pub type AnomalyHook = Arc<dyn Fn(&Anomaly) + Send + Sync>;

/// An unrecognized enumeration value that was replaced by a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// Station difficulty outside 1 to 5; replaced by 5.
    UnknownDifficultyLevel(i64),
    /// Train type other than `bot`/`user`; replaced by `bot`.
    UnknownTrainType(String),
    /// Unknown timetable stop type; replaced by `NoStopOver`.
    UnknownStopType(String),
}

impl Anomaly {
    /// Name of the domain field the value belonged to.
    pub fn field(&self) -> &'static str {
        match self {
            Anomaly::UnknownDifficultyLevel(_) => "difficultyLevel",
            Anomaly::UnknownTrainType(_) => "type",
            Anomaly::UnknownStopType(_) => "stopType",
        }
    }

    /// The offending raw value, as text.
    pub fn raw_value(&self) -> String {
        match self {
            Anomaly::UnknownDifficultyLevel(level) => level.to_string(),
            Anomaly::UnknownTrainType(value) | Anomaly::UnknownStopType(value) => value.clone(),
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::UnknownDifficultyLevel(level) => {
                write!(f, "unknown difficulty level {level}, using 5")
            }
            Anomaly::UnknownTrainType(value) => {
                write!(f, "unknown train type {value:?}, using \"bot\"")
            }
            Anomaly::UnknownStopType(value) => {
                write!(f, "unknown stop type {value:?}, using \"NoStopOver\"")
            }
        }
    }
}

/// Maps raw records onto domain types.
///
/// Holds no state between calls. Anomalies are logged at `warn` level via
/// `tracing` and, if a hook is installed, passed to it as well.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use simrail_sdk::convert::Normalizer;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let normalizer = Normalizer::with_hook(move |a| sink.lock().unwrap().push(a.clone()));
/// # let _ = normalizer;
/// ```
#[derive(Clone, Default)]
pub struct Normalizer {
    hook: Option<AnomalyHook>,
}

impl Normalizer {
    /// A normalizer that only logs anomalies.
    pub fn new() -> Self {
        Self::default()
    }

    /// A normalizer that also hands every anomaly to `hook`.
    pub fn with_hook(hook: impl Fn(&Anomaly) + Send + Sync + 'static) -> Self {
        Self {
            hook: Some(Arc::new(hook)),
        }
    }

    fn report(&self, anomaly: Anomaly) {
        warn!(
            field = anomaly.field(),
            value = %anomaly.raw_value(),
            "{anomaly}"
        );
        if let Some(hook) = &self.hook {
            hook(&anomaly);
        }
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("hook", &self.hook.is_some())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anomaly_display_names_value() {
        let a = Anomaly::UnknownTrainType("ghost".into());
        assert_eq!(a.field(), "type");
        assert_eq!(a.raw_value(), "ghost");
        assert!(a.to_string().contains("ghost"));

        let a = Anomaly::UnknownDifficultyLevel(9);
        assert_eq!(a.field(), "difficultyLevel");
        assert_eq!(a.to_string(), "unknown difficulty level 9, using 5");
    }

    #[test]
    fn debug_does_not_require_debug_hook() {
        let n = Normalizer::with_hook(|_| {});
        assert_eq!(format!("{n:?}"), "Normalizer { hook: true }");
        assert_eq!(format!("{:?}", Normalizer::new()), "Normalizer { hook: false }");
    }
}
