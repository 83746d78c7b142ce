use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use homedash_core::Route;

use crate::action::Action;
use crate::component::Component;
use crate::theme;

/// Shown for any path that matches no page.
pub struct NotFoundScreen {
    path: String,
}

impl NotFoundScreen {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl Component for NotFoundScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Enter => Ok(Some(Action::Navigate(Route::Home))),
            _ => Ok(None),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Not Found ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [_, body, _] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Page not found", theme::error_text())),
                Line::from(Span::styled(self.path.clone(), theme::value())),
                Line::from(vec![
                    Span::styled("Enter ", theme::key_hint_key()),
                    Span::styled("go home", theme::key_hint()),
                ]),
            ])
            .alignment(Alignment::Center),
            body,
        );
    }

    fn key_hints(&self) -> &'static str {
        "Enter home"
    }

    fn id(&self) -> &'static str {
        "not_found"
    }
}
