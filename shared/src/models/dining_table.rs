//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity
///
/// Tables are immutable after creation — they are seeded at configuration
/// time and never edited by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiningTable {
    /// Unique table ID (e.g. "MESA-18")
    pub id: String,
    /// Display name shown on the floor map (e.g. "Terraza Norte")
    pub name: String,
    /// Assigned server name, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

impl DiningTable {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            server: None,
        }
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }
}
