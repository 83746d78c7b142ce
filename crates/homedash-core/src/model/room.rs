// ── Room domain types ──

use serde::{Deserialize, Serialize};

/// A room of the house. Never mutated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    /// Empty when the backend did not provide one.
    pub name: String,
    pub floor_number: i32,
    /// Dimensions in metres.
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub house_id: Option<String>,
    pub inside: bool,
}

impl Room {
    /// Stand-in used when only the id is known (the room lookup failed).
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            floor_number: 0,
            length: 0.0,
            width: 0.0,
            height: 0.0,
            house_id: None,
            inside: true,
        }
    }

    /// Name with the first letter capitalized, falling back to the id.
    pub fn display_name(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            return self.id.clone();
        }
        let mut chars = name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    pub fn floor_area(&self) -> f64 {
        self.length * self.width
    }

    pub fn volume(&self) -> f64 {
        self.floor_area() * self.height
    }

    pub fn location_label(&self) -> &'static str {
        if self.inside { "Inside" } else { "Outside" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_capitalizes_first_letter() {
        let mut room = Room::placeholder("R1");
        room.name = "kitchen".into();
        assert_eq!(room.display_name(), "Kitchen");
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let room = Room::placeholder("R1");
        assert_eq!(room.display_name(), "R1");
    }

    #[test]
    fn area_and_volume() {
        let mut room = Room::placeholder("R1");
        room.length = 4.0;
        room.width = 2.5;
        room.height = 2.0;
        assert!((room.floor_area() - 10.0).abs() < f64::EPSILON);
        assert!((room.volume() - 20.0).abs() < f64::EPSILON);
    }
}
