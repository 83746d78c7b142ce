//! Edit device page. Saving only validates locally and returns to the
//! device's details; nothing is sent to the backend.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tracing::info;

use homedash_core::{EditDeviceForm, Route};

use crate::action::{Action, Notification};
use crate::component::Component;
use crate::theme;
use crate::widgets::text_field::{FIELD_HEIGHT, TextField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Description,
}

pub struct EditDeviceScreen {
    device_id: String,
    name: TextField,
    description: TextField,
    active: Field,
}

impl EditDeviceScreen {
    pub fn new(device_id: String) -> Self {
        Self {
            device_id,
            name: TextField::new("Name"),
            description: TextField::new("Description"),
            active: Field::Name,
        }
    }

    fn form(&self) -> EditDeviceForm {
        EditDeviceForm {
            name: self.name.value().to_owned(),
            description: self.description.value().to_owned(),
        }
    }

    fn save(&self) -> Action {
        match self.form().validate() {
            Ok(()) => {
                info!(device_id = %self.device_id, "device edit saved locally");
                Action::Navigate(
                    Route::EditDevice {
                        device_id: self.device_id.clone(),
                    }
                    .parent(),
                )
            }
            Err(e) => Action::Notify(Notification::warning(e.to_string())),
        }
    }
}

impl Component for EditDeviceScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                self.active = match self.active {
                    Field::Name => Field::Description,
                    Field::Description => Field::Name,
                };
            }
            KeyCode::Enter => return Ok(Some(self.save())),
            KeyCode::Esc => {
                return Ok(Some(Action::Navigate(Route::DeviceDetails {
                    device_id: self.device_id.clone(),
                })));
            }
            _ => {
                match self.active {
                    Field::Name => self.name.handle_key(key),
                    Field::Description => self.description.handle_key(key),
                };
            }
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" Edit Device {} ", self.device_id))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .horizontal_margin(2)
        .split(inner);

        self.name.render(frame, rows[1], self.active == Field::Name);
        self.description
            .render(frame, rows[2], self.active == Field::Description);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Enter ", theme::key_hint_key()),
                Span::styled("save  ", theme::key_hint()),
                Span::styled("Esc ", theme::key_hint_key()),
                Span::styled("cancel", theme::key_hint()),
            ])),
            rows[3],
        );
    }

    // Every key belongs to the form while this page is open
    fn captures_input(&self) -> bool {
        true
    }

    fn key_hints(&self) -> &'static str {
        "Tab next field  Enter save  Esc cancel"
    }

    fn id(&self) -> &'static str {
        "edit_device"
    }
}
