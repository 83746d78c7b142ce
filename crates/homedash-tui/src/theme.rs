//! Colors and styles. Warm tones on a dark background; every widget asks
//! for a role here rather than a raw color.

use ratatui::style::{Color, Modifier, Style};

const AMBER: Color = Color::Rgb(242, 169, 59); // #f2a93b
const TEAL: Color = Color::Rgb(94, 196, 182); // #5ec4b6
const SAGE: Color = Color::Rgb(143, 199, 116); // #8fc774
const BRICK: Color = Color::Rgb(214, 96, 77); // #d6604d
const HONEY: Color = Color::Rgb(240, 214, 120); // #f0d678
const DUSK: Color = Color::Rgb(181, 137, 214); // #b589d6
const SKY: Color = Color::Rgb(126, 182, 230); // #7eb6e6

const LINEN: Color = Color::Rgb(222, 214, 200); // #ded6c8
const SLATE: Color = Color::Rgb(120, 124, 138); // #787c8a
const CHARCOAL: Color = Color::Rgb(46, 43, 40); // #2e2b28
const NIGHT: Color = Color::Rgb(28, 26, 24); // #1c1a18

pub fn title_style() -> Style {
    Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
}

/// Border of whatever owns the keyboard.
pub fn border_focused() -> Style {
    Style::default().fg(AMBER)
}

pub fn border_default() -> Style {
    Style::default().fg(SLATE)
}

/// Border of a dialog that confirms something irreversible.
pub fn border_danger() -> Style {
    Style::default().fg(BRICK)
}

pub fn table_header() -> Style {
    Style::default().fg(TEAL).add_modifier(Modifier::BOLD)
}

pub fn table_row() -> Style {
    Style::default().fg(LINEN)
}

pub fn table_selected() -> Style {
    Style::default()
        .fg(AMBER)
        .bg(CHARCOAL)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_active() -> Style {
    Style::default()
        .fg(NIGHT)
        .bg(AMBER)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(SLATE)
}

pub fn key_hint() -> Style {
    Style::default().fg(SLATE)
}

pub fn key_hint_key() -> Style {
    Style::default().fg(TEAL).add_modifier(Modifier::BOLD)
}

pub fn error_text() -> Style {
    Style::default().fg(BRICK)
}

pub fn label() -> Style {
    Style::default().fg(SLATE)
}

pub fn value() -> Style {
    Style::default().fg(LINEN).add_modifier(Modifier::BOLD)
}

/// Plain body text.
pub fn text() -> Style {
    Style::default().fg(LINEN)
}

/// Emphasis for live data: temperatures, clock, input cursor.
pub fn accent() -> Style {
    Style::default().fg(TEAL)
}

pub fn warning() -> Style {
    Style::default().fg(HONEY)
}

pub fn device_active() -> Style {
    Style::default().fg(SAGE)
}

pub fn device_inactive() -> Style {
    Style::default().fg(BRICK)
}

pub fn sunrise() -> Style {
    Style::default().fg(HONEY)
}

pub fn sunset() -> Style {
    Style::default().fg(DUSK)
}

/// Blind-roller opening gauge.
pub fn gauge() -> Style {
    Style::default().fg(SKY).bg(CHARCOAL)
}

/// Backdrop behind popups.
pub fn dialog() -> Style {
    Style::default().bg(NIGHT)
}

pub fn throbber() -> Style {
    Style::default().fg(AMBER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paired_roles_are_distinguishable() {
        assert_ne!(border_focused(), border_default());
        assert_ne!(device_active().fg, device_inactive().fg);
        assert_ne!(sunrise().fg, sunset().fg);
        assert_ne!(tab_active(), tab_inactive());
    }
}
