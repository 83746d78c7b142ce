//! Centered overlay areas for dialogs and pickers.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders, Clear};

use crate::theme;

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Clear `area`, draw a rounded titled frame and return its inner area.
pub fn frame_dialog(frame: &mut Frame, area: Rect, title: &str, border: Style) -> Rect {
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(theme::dialog()), area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fits_inside_small_areas() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered(area, 60, 20);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
        assert_eq!(popup.x, (30 - popup.width) / 2);
    }
}
