//! SimRail HTTP client.
//!
//! Talks to the two public SimRail APIs:
//! - live data (`servers-open`, `stations-open`, `trains-open`), whose
//!   responses are wrapped in a `{result, data, count, description}` envelope
//! - timetables (`getAllTimetables`), which answers with a bare list
//!
//! Every call is a single GET. Nothing is cached or retried.

mod client;
mod config;
mod envelope;
mod error;
mod format;
mod mock;
mod transport;

pub use client::Api;
pub use config::{ApiConfig, DEFAULT_LIVE_DATA_URL, DEFAULT_TIMETABLE_URL, Endpoints};
pub use envelope::Envelope;
pub use error::{ApiError, TransportError};
pub use format::{Converted, DataFormat, Raw};
pub use mock::MockTransport;
pub use transport::{HttpTransport, Transport};
