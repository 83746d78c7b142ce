// ── Device domain types ──

use serde::{Deserialize, Serialize};

/// A device installed in a room, hosting sensors and/or actuators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub room_id: String,
    pub name: String,
    pub model: String,
    /// Last value confirmed by the server.
    pub active: bool,
}

impl Device {
    /// Devices named "Blind Roller" (any case or spacing) get the
    /// percentage control on their details page.
    pub fn is_blind_roller(&self) -> bool {
        let normalized: String = self
            .name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        normalized == "blindroller"
    }

    pub fn status_label(&self) -> &'static str {
        if self.active { "Activated" } else { "Deactivated" }
    }

    /// Name for lists, falling back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
