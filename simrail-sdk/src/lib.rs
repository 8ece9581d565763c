//! Typed client for the SimRail train simulator API.
//!
//! Fetches multiplayer servers, dispatch stations, live trains and
//! timetables, and normalizes the inconsistent upstream JSON into the types
//! in [`domain`]. A client in [`api::Raw`] mode returns the records exactly
//! as decoded instead.

pub mod api;
pub mod convert;
pub mod domain;
pub mod raw;

pub use api::{Api, ApiConfig, ApiError, MockTransport};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_manifest() {
        assert_eq!(VERSION, "0.1.2");
    }
}
