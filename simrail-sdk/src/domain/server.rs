//! Multiplayer server type.

use serde::{Deserialize, Serialize};

/// A multiplayer server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    /// Opaque server ID (independent of `server_code`).
    pub id: String,

    /// Whether the server is currently up.
    pub is_active: bool,

    /// Server code, e.g. `"en1"`. This is what station, train and
    /// timetable queries take.
    pub server_code: String,

    pub server_name: String,

    pub server_region: String,
}
