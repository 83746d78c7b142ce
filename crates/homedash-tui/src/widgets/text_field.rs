//! Single-line text input: a label over a rounded box with a block cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::theme;

/// Height a field needs: one label row plus a three-row box.
pub const FIELD_HEIGHT: u16 = 4;

#[derive(Debug, Clone, Default)]
pub struct TextField {
    label: &'static str,
    value: String,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Apply an editing key. Returns `false` for keys the field ignores
    /// (Tab, Enter, Esc, arrows), so the caller can handle them.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.clear();
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.push(c);
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, active: bool) {
        if area.height < FIELD_HEIGHT {
            return;
        }

        let label_style = if active {
            theme::accent()
        } else {
            theme::text()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(format!("  {}", self.label), label_style)),
            Rect::new(area.x, area.y, area.width, 1),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if active {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let box_area = Rect::new(area.x, area.y + 1, area.width, 3);
        let inner = block.inner(box_area);
        frame.render_widget(block, box_area);

        let text = if active {
            format!("{}\u{2588}", self.value)
        } else {
            self.value.clone()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, theme::accent())),
            inner,
        );
    }
}
