//! Room devices page: a room's devices and the add-device form.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use homedash_core::{Device, LoadState, NewDeviceForm, RoomDevices, RoomDevicesFlow, Route, notice};

use crate::action::{Action, Notification};
use crate::component::Component;
use crate::data_bridge::spawn_data_bridge;
use crate::screens::{move_selection, spawn_load};
use crate::theme;
use crate::widgets::load_state::ready_or_placeholder;
use crate::widgets::popup;
use crate::widgets::status_badge::status_span;
use crate::widgets::text_field::{FIELD_HEIGHT, TextField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Name,
    Model,
}

struct AddDeviceForm {
    name: TextField,
    model: TextField,
    active: FormField,
    submitting: bool,
}

impl AddDeviceForm {
    fn new() -> Self {
        Self {
            name: TextField::new("Device Name"),
            model: TextField::new("Device Model"),
            active: FormField::Name,
            submitting: false,
        }
    }

    fn active_field(&mut self) -> &mut TextField {
        match self.active {
            FormField::Name => &mut self.name,
            FormField::Model => &mut self.model,
        }
    }

    fn toggle(&mut self) {
        self.active = match self.active {
            FormField::Name => FormField::Model,
            FormField::Model => FormField::Name,
        };
    }
}

pub struct RoomDevicesScreen {
    flow: Arc<RoomDevicesFlow>,
    state: LoadState<RoomDevices>,
    table_state: TableState,
    throbber: ThrobberState,
    form: Option<AddDeviceForm>,
    action_tx: Option<UnboundedSender<Action>>,
    cancel: CancellationToken,
}

impl RoomDevicesScreen {
    pub fn new(flow: RoomDevicesFlow) -> Self {
        Self {
            flow: Arc::new(flow),
            state: LoadState::Idle,
            table_state: TableState::default().with_selected(Some(0)),
            throbber: ThrobberState::default(),
            form: None,
            action_tx: None,
            cancel: CancellationToken::new(),
        }
    }

    fn devices(&self) -> &[Device] {
        self.state
            .ready()
            .map(|s| s.devices.as_slice())
            .unwrap_or_default()
    }

    fn reload(&self) {
        let flow = Arc::clone(&self.flow);
        spawn_load(async move { flow.load().await.map(|_| ()) }, "room devices");
    }

    fn submit(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        if form.submitting {
            return;
        }
        let Some(tx) = self.action_tx.clone() else {
            return;
        };
        form.submitting = true;

        let request = NewDeviceForm::new(form.name.value(), form.model.value());
        let flow = Arc::clone(&self.flow);
        tokio::spawn(async move {
            let (result, toast) = match flow.add_device(&request).await {
                Ok(device) => {
                    debug!(device_id = %device.id, "device added from form");
                    (Ok(()), Notification::success(notice::DEVICE_ADDED))
                }
                Err(e) => {
                    let message = notice::device_add_failed(&e);
                    (Err(message.clone()), Notification::error(message))
                }
            };
            let _ = tx.send(Action::DeviceAddResult(result));
            let _ = tx.send(Action::Notify(toast));
        });
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.form = None,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => form.toggle(),
            KeyCode::Enter => self.submit(),
            _ => {
                if !form.submitting {
                    form.active_field().handle_key(key);
                }
            }
        }
    }

    fn render_form(frame: &mut Frame, area: Rect, form: &AddDeviceForm) {
        let dialog = popup::centered(area, 50, FIELD_HEIGHT * 2 + 4);
        let inner = popup::frame_dialog(frame, dialog, "Add Device", theme::border_focused());

        let rows = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        form.name
            .render(frame, rows[0], form.active == FormField::Name);
        form.model
            .render(frame, rows[1], form.active == FormField::Model);

        let footer = if form.submitting {
            Line::from(Span::styled("  Adding device...", theme::key_hint()))
        } else {
            Line::from(vec![
                Span::styled("  Enter ", theme::key_hint_key()),
                Span::styled("add  ", theme::key_hint()),
                Span::styled("Tab ", theme::key_hint_key()),
                Span::styled("next field  ", theme::key_hint()),
                Span::styled("Esc ", theme::key_hint_key()),
                Span::styled("cancel", theme::key_hint()),
            ])
        };
        frame.render_widget(Paragraph::new(footer), rows[2]);
    }
}

impl Drop for RoomDevicesScreen {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.flow.cancel();
    }
}

impl Component for RoomDevicesScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        spawn_data_bridge(
            self.flow.subscribe(),
            action_tx.clone(),
            self.cancel.clone(),
            Action::RoomDevicesUpdated,
        );
        self.action_tx = Some(action_tx);
        self.reload();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.form.is_some() {
            self.handle_form_key(key);
            return Ok(None);
        }

        let len = self.devices().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => move_selection(&mut self.table_state, len, 1),
            KeyCode::Char('k') | KeyCode::Up => move_selection(&mut self.table_state, len, -1),
            KeyCode::Char('g') => self.table_state.select(Some(0)),
            KeyCode::Char('G') => self.table_state.select(Some(len.saturating_sub(1))),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('a') if self.state.ready().is_some() => {
                self.form = Some(AddDeviceForm::new());
            }
            KeyCode::Enter => {
                let selected = self.table_state.selected().unwrap_or(0);
                if let Some(device) = self.devices().get(selected) {
                    return Ok(Some(Action::Navigate(Route::DeviceDetails {
                        device_id: device.id.clone(),
                    })));
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::RoomDevicesUpdated(state) => {
                self.state = state.clone();
                let len = self.devices().len();
                move_selection(&mut self.table_state, len, 0);
            }
            Action::DeviceAddResult(Ok(())) => self.form = None,
            Action::DeviceAddResult(Err(_)) => {
                // Keep what was typed so it can be corrected
                if let Some(form) = self.form.as_mut() {
                    form.submitting = false;
                }
            }
            Action::Tick => self.throbber.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = self
            .state
            .ready()
            .map_or_else(|| format!("Room {}", self.flow.room_id()), |s| s.title());
        let block = Block::default()
            .title(format!(" {title} ({}) ", self.devices().len()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.form.is_some() {
                theme::border_default()
            } else {
                theme::border_focused()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(snapshot) = ready_or_placeholder(frame, inner, &self.state, &self.throbber) else {
            return;
        };

        if snapshot.devices.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "  No devices in this room. Press a to add one.",
                    theme::key_hint(),
                )),
                inner,
            );
        } else {
            let header = Row::new(
                ["Name", "Model", "Status", "ID"]
                    .into_iter()
                    .map(|h| Cell::from(h).style(theme::table_header())),
            );
            let selected = self.table_state.selected().unwrap_or(0);
            let rows: Vec<Row> = snapshot
                .devices
                .iter()
                .enumerate()
                .map(|(i, device)| {
                    let prefix = if i == selected { "▸ " } else { "  " };
                    Row::new(vec![
                        Cell::from(format!("{prefix}{}", device.display_name())),
                        Cell::from(device.model.clone()),
                        Cell::from(status_span(device)),
                        Cell::from(Span::styled(device.id.clone(), theme::key_hint())),
                    ])
                    .style(theme::table_row())
                })
                .collect();

            let table = Table::new(
                rows,
                [
                    Constraint::Min(20),
                    Constraint::Min(16),
                    Constraint::Length(14),
                    Constraint::Min(8),
                ],
            )
            .header(header)
            .row_highlight_style(theme::table_selected());
            frame.render_stateful_widget(table, inner, &mut self.table_state.clone());
        }

        if let Some(form) = &self.form {
            Self::render_form(frame, area, form);
        }
    }

    fn captures_input(&self) -> bool {
        self.form.is_some()
    }

    fn key_hints(&self) -> &'static str {
        if self.form.is_some() {
            "Tab next field  Enter add  Esc cancel"
        } else {
            "j/k move  Enter details  a add device  r reload"
        }
    }

    fn id(&self) -> &'static str {
        "room_devices"
    }
}
