//! Device details page: attributes, sensors, actuators, readings, the
//! add-component pickers, deactivation and the blind-roller control.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Gauge, List, ListItem, ListState, Paragraph, Row, Table,
    TableState,
};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use homedash_core::{
    ComponentForm, DeviceDetails, DeviceDetailsFlow, LoadState, Route, notice,
};

use crate::action::{Action, ComponentKind, Notification};
use crate::component::Component;
use crate::data_bridge::spawn_data_bridge;
use crate::screens::{move_selection, spawn_load};
use crate::theme;
use crate::widgets::load_state::ready_or_placeholder;
use crate::widgets::popup;
use crate::widgets::status_badge::status_span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Sensors,
    Actuators,
    Readings,
}

impl Panel {
    fn next(self) -> Self {
        match self {
            Self::Sensors => Self::Actuators,
            Self::Actuators => Self::Readings,
            Self::Readings => Self::Sensors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerStage {
    Type,
    Model,
}

/// Two-step add-component dialog: pick a type, then one of its models.
struct ComponentPicker {
    kind: ComponentKind,
    stage: PickerStage,
    list: ListState,
    type_id: Option<String>,
    busy: bool,
}

impl ComponentPicker {
    fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            stage: PickerStage::Type,
            list: ListState::default().with_selected(Some(0)),
            type_id: None,
            busy: false,
        }
    }

    /// `(id, label)` for every choice in the current stage.
    fn options(&self, details: &DeviceDetails) -> Vec<(String, String)> {
        match (self.kind, self.stage) {
            (ComponentKind::Sensor, PickerStage::Type) => details
                .sensor_types
                .iter()
                .map(|t| (t.id.clone(), t.label()))
                .collect(),
            (ComponentKind::Actuator, PickerStage::Type) => details
                .actuator_types
                .iter()
                .map(|t| (t.id.clone(), t.label()))
                .collect(),
            (ComponentKind::Sensor, PickerStage::Model) => details
                .sensor_models
                .iter()
                .map(|m| (m.id.clone(), m.id.clone()))
                .collect(),
            (ComponentKind::Actuator, PickerStage::Model) => details
                .actuator_models
                .iter()
                .map(|m| (m.id.clone(), m.id.clone()))
                .collect(),
        }
    }

    fn move_by(&mut self, len: usize, delta: isize) {
        let current = self.list.selected().unwrap_or(0);
        let next = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs())
        };
        self.list.select(Some(next.min(len.saturating_sub(1))));
    }

    fn title(&self) -> String {
        let stage = match self.stage {
            PickerStage::Type => "type",
            PickerStage::Model => "model",
        };
        format!("Add {} · choose {stage}", self.kind.label())
    }
}

pub struct DeviceDetailsScreen {
    flow: Arc<DeviceDetailsFlow>,
    state: LoadState<DeviceDetails>,
    focus: Panel,
    sensor_table: TableState,
    actuator_table: TableState,
    reading_table: TableState,
    throbber: ThrobberState,
    picker: Option<ComponentPicker>,
    deactivating: bool,
    blind_submitting: bool,
    action_tx: Option<UnboundedSender<Action>>,
    cancel: CancellationToken,
}

impl DeviceDetailsScreen {
    pub fn new(flow: DeviceDetailsFlow) -> Self {
        Self {
            flow: Arc::new(flow),
            state: LoadState::Idle,
            focus: Panel::Sensors,
            sensor_table: TableState::default().with_selected(Some(0)),
            actuator_table: TableState::default().with_selected(Some(0)),
            reading_table: TableState::default().with_selected(Some(0)),
            throbber: ThrobberState::default(),
            picker: None,
            deactivating: false,
            blind_submitting: false,
            action_tx: None,
            cancel: CancellationToken::new(),
        }
    }

    fn details(&self) -> Option<Arc<DeviceDetails>> {
        self.state.ready().cloned()
    }

    /// Pick up a synchronous store change without waiting for the bridge.
    fn sync_state(&mut self) {
        self.state = self.flow.state();
    }

    fn prompt_visible(&self) -> bool {
        self.state
            .ready()
            .is_some_and(|d| d.deactivate_prompt.is_visible())
    }

    fn reload(&self) {
        let flow = Arc::clone(&self.flow);
        spawn_load(async move { flow.load().await.map(|_| ()) }, "device details");
    }

    fn notify(&self, notification: Notification) {
        if let Some(tx) = &self.action_tx {
            let _ = tx.send(Action::Notify(notification));
        }
    }

    fn focused_table(&mut self) -> (&mut TableState, usize) {
        let details = self.details();
        let len = |f: fn(&DeviceDetails) -> usize| details.as_deref().map_or(0, f);
        match self.focus {
            Panel::Sensors => (&mut self.sensor_table, len(|d| d.sensors.len())),
            Panel::Actuators => (&mut self.actuator_table, len(|d| d.actuators.len())),
            Panel::Readings => (&mut self.reading_table, len(|d| d.readings.len())),
        }
    }

    // ── Add sensor / actuator ────────────────────────────────────────

    fn open_picker(&mut self, kind: ComponentKind) {
        let Some(details) = self.details() else {
            return;
        };
        if !details.forms_enabled() {
            self.notify(Notification::warning("Device is deactivated"));
            return;
        }
        self.picker = Some(ComponentPicker::new(kind));
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(details) = self.details() else {
            return;
        };
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        let options = picker.options(&details);

        match key.code {
            KeyCode::Esc => match picker.stage {
                PickerStage::Type => self.picker = None,
                PickerStage::Model => {
                    picker.stage = PickerStage::Type;
                    picker.type_id = None;
                    picker.list.select(Some(0));
                }
            },
            KeyCode::Char('j') | KeyCode::Down => picker.move_by(options.len(), 1),
            KeyCode::Char('k') | KeyCode::Up => picker.move_by(options.len(), -1),
            KeyCode::Enter if !picker.busy => {
                let Some((id, _)) = options.get(picker.list.selected().unwrap_or(0)) else {
                    return;
                };
                let id = id.clone();
                match picker.stage {
                    PickerStage::Type => {
                        picker.type_id = Some(id.clone());
                        picker.busy = true;
                        self.load_models(id);
                    }
                    PickerStage::Model => {
                        let type_id = picker.type_id.clone().unwrap_or_default();
                        picker.busy = true;
                        self.add_component(ComponentForm::new(type_id, id));
                    }
                }
            }
            _ => {}
        }
    }

    fn load_models(&self, type_id: String) {
        let (Some(tx), Some(picker)) = (self.action_tx.clone(), self.picker.as_ref()) else {
            return;
        };
        let kind = picker.kind;
        let flow = Arc::clone(&self.flow);
        tokio::spawn(async move {
            let result = match kind {
                ComponentKind::Sensor => flow.select_sensor_type(&type_id).await.map(|_| ()),
                ComponentKind::Actuator => flow.select_actuator_type(&type_id).await.map(|_| ()),
            };
            let _ = tx.send(Action::ModelsLoaded(kind, result.map_err(|e| e.to_string())));
        });
    }

    fn add_component(&self, form: ComponentForm) {
        let (Some(tx), Some(picker)) = (self.action_tx.clone(), self.picker.as_ref()) else {
            return;
        };
        let kind = picker.kind;
        let flow = Arc::clone(&self.flow);
        tokio::spawn(async move {
            let result = match kind {
                ComponentKind::Sensor => flow.add_sensor(&form).await.map(|s| s.id),
                ComponentKind::Actuator => flow.add_actuator(&form).await.map(|a| a.id),
            };
            let (result, toast) = match result {
                Ok(id) => {
                    debug!(kind = kind.label(), component_id = %id, "component added");
                    let message = match kind {
                        ComponentKind::Sensor => notice::SENSOR_ADDED,
                        ComponentKind::Actuator => notice::ACTUATOR_ADDED,
                    };
                    (Ok(()), Notification::success(message))
                }
                Err(e) => {
                    let message = notice::component_add_failed(kind.label(), &e);
                    (Err(message.clone()), Notification::error(message))
                }
            };
            let _ = tx.send(Action::ComponentAddResult(kind, result));
            let _ = tx.send(Action::Notify(toast));
        });
    }

    // ── Deactivation ─────────────────────────────────────────────────

    fn request_deactivate(&mut self) {
        match self.flow.request_deactivate() {
            Ok(()) => self.sync_state(),
            Err(e) => self.notify(Notification::warning(e.to_string())),
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter if !self.deactivating => {
                let Some(tx) = self.action_tx.clone() else {
                    return;
                };
                self.deactivating = true;
                let flow = Arc::clone(&self.flow);
                tokio::spawn(async move {
                    let toast = match flow.confirm_deactivate().await {
                        Ok(_) => Notification::success(notice::DEVICE_DEACTIVATED),
                        Err(e) => {
                            warn!(error = %e, "deactivation failed");
                            Notification::error(notice::deactivate_failed(&e))
                        }
                    };
                    let _ = tx.send(Action::Notify(toast));
                });
            }
            KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                self.flow.cancel_deactivate();
                self.sync_state();
            }
            _ => {}
        }
    }

    // ── Blind roller ─────────────────────────────────────────────────

    fn select_for_blind(&mut self) {
        let Some(details) = self.details() else {
            return;
        };
        if !details.shows_blind_control() {
            return;
        }
        match self.focus {
            Panel::Actuators => {
                let i = self.actuator_table.selected().unwrap_or(0);
                if let Some(actuator) = details.actuators.get(i) {
                    self.flow.select_blind_actuator(&actuator.id);
                }
            }
            Panel::Sensors => {
                let i = self.sensor_table.selected().unwrap_or(0);
                if let Some(sensor) = details.sensors.get(i) {
                    self.flow.select_blind_sensor(&sensor.id);
                }
            }
            Panel::Readings => return,
        }
        self.sync_state();
    }

    fn step_blind(&mut self, up: bool) {
        let Some(details) = self.details() else {
            return;
        };
        if !details.shows_blind_control() {
            return;
        }
        let Some(actuator_id) = details.blind.selected_actuator() else {
            self.notify(Notification::info("Select an actuator first (Enter)"));
            return;
        };
        if up {
            self.flow.blind_increase(actuator_id);
        } else {
            self.flow.blind_decrease(actuator_id);
        }
        self.sync_state();
    }

    fn submit_blind(&mut self) {
        let Some(details) = self.details() else {
            return;
        };
        if !details.shows_blind_control() || self.blind_submitting {
            return;
        }
        let Some(tx) = self.action_tx.clone() else {
            return;
        };
        self.blind_submitting = true;
        let flow = Arc::clone(&self.flow);
        tokio::spawn(async move {
            let (result, toast) = match flow.submit_blind().await {
                Ok(value) => (Ok(value), Notification::success(notice::VALUE_UPDATED)),
                Err(e) => {
                    warn!(error = %e, "blind update failed");
                    (
                        Err(e.to_string()),
                        Notification::error(notice::VALUE_UPDATE_FAILED),
                    )
                }
            };
            let _ = tx.send(Action::BlindSubmitted(result));
            let _ = tx.send(Action::Notify(toast));
        });
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn panel_block(&self, title: &str, panel: Panel) -> Block<'static> {
        Block::default()
            .title(format!(" {title} "))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focus == panel {
                theme::border_focused()
            } else {
                theme::border_default()
            })
    }

    fn render_attributes(frame: &mut Frame, area: Rect, details: &DeviceDetails) {
        let device = &details.device;
        let room = &details.room;
        let row = |name: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{name:<10}"), theme::label()),
                Span::styled(value, theme::value()),
            ])
        };
        let lines = vec![
            row("Name", device.display_name().to_owned()),
            row("Model", device.model.clone()),
            Line::from(vec![
                Span::styled(format!("{:<10}", "Status"), theme::label()),
                status_span(device),
            ]),
            row("Room", room.display_name()),
            row("Floor", room.floor_number.to_string()),
            row(
                "Size",
                format!(
                    "{:.1} × {:.1} × {:.1} m  ({:.1} m², {:.1} m³)",
                    room.length,
                    room.width,
                    room.height,
                    room.floor_area(),
                    room.volume()
                ),
            ),
            row("Location", room.location_label().to_owned()),
        ];

        let block = Block::default()
            .title(" Device ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_side(frame: &mut Frame, area: Rect, details: &DeviceDetails) {
        let block = Block::default()
            .title(if details.shows_blind_control() {
                " Blind Roller "
            } else {
                " Latest Reading "
            })
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if !details.shows_blind_control() {
            let line = match details.latest_reading() {
                Some(r) => Line::from(vec![
                    Span::styled(r.value.clone(), theme::value()),
                    Span::styled(format!("  {}", r.timestamp), theme::key_hint()),
                ]),
                None => Line::from(Span::styled(notice::NO_READINGS, theme::key_hint())),
            };
            frame.render_widget(Paragraph::new(line), inner);
            return;
        }

        let blind = &details.blind;
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        let selected = |id: Option<&str>| {
            id.map_or_else(
                || Span::styled("none", theme::key_hint()),
                |id| Span::styled(id.to_owned(), theme::value()),
            )
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Actuator  ", theme::label()),
                selected(blind.selected_actuator()),
            ])),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Sensor    ", theme::label()),
                selected(blind.selected_sensor()),
            ])),
            rows[1],
        );

        if let Some(actuator_id) = blind.selected_actuator() {
            let value = blind.value(actuator_id);
            let gauge = Gauge::default()
                .gauge_style(theme::gauge())
                .percent(u16::from(value))
                .label(format!("{value}%"));
            frame.render_widget(gauge, rows[3]);
        }
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Enter select  +/- step  u update",
                theme::key_hint(),
            )),
            rows[4],
        );
    }

    fn render_sensors(&self, frame: &mut Frame, area: Rect, details: &DeviceDetails) {
        let block = self.panel_block(&format!("Sensors ({})", details.sensors.len()), Panel::Sensors);
        let picked = details.blind.selected_sensor();
        let rows: Vec<Row> = details
            .sensors
            .iter()
            .map(|s| {
                let latest = details
                    .latest_reading_for(&s.id)
                    .map_or_else(|| "—".to_owned(), |r| r.value.clone());
                let marker = if picked == Some(s.id.as_str()) { "◆ " } else { "  " };
                Row::new(vec![
                    Cell::from(format!("{marker}{}", s.id)),
                    Cell::from(s.model_id.clone()),
                    Cell::from(latest),
                ])
                .style(theme::table_row())
            })
            .collect();
        let table = Table::new(
            rows,
            [Constraint::Min(10), Constraint::Min(10), Constraint::Length(10)],
        )
        .header(header(&["ID", "Model", "Latest"]))
        .block(block)
        .row_highlight_style(theme::table_selected());
        frame.render_stateful_widget(table, area, &mut self.sensor_table.clone());
    }

    fn render_actuators(&self, frame: &mut Frame, area: Rect, details: &DeviceDetails) {
        let block = self.panel_block(
            &format!("Actuators ({})", details.actuators.len()),
            Panel::Actuators,
        );
        let picked = details.blind.selected_actuator();
        let rows: Vec<Row> = details
            .actuators
            .iter()
            .map(|a| {
                let marker = if picked == Some(a.id.as_str()) { "◆ " } else { "  " };
                Row::new(vec![
                    Cell::from(format!("{marker}{}", a.id)),
                    Cell::from(a.model_id.clone()),
                ])
                .style(theme::table_row())
            })
            .collect();
        let table = Table::new(rows, [Constraint::Min(10), Constraint::Min(10)])
            .header(header(&["ID", "Model"]))
            .block(block)
            .row_highlight_style(theme::table_selected());
        frame.render_stateful_widget(table, area, &mut self.actuator_table.clone());
    }

    fn render_readings(&self, frame: &mut Frame, area: Rect, details: &DeviceDetails) {
        let block = self.panel_block(
            &format!("Readings ({})", details.readings.len()),
            Panel::Readings,
        );
        if details.readings.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(notice::NO_READINGS, theme::key_hint())).block(block),
                area,
            );
            return;
        }
        let rows: Vec<Row> = details
            .readings
            .iter()
            .map(|r| {
                Row::new(vec![
                    Cell::from(r.timestamp.clone()),
                    Cell::from(r.sensor_id.clone()),
                    Cell::from(r.value.clone()),
                ])
                .style(theme::table_row())
            })
            .collect();
        let table = Table::new(
            rows,
            [Constraint::Length(26), Constraint::Min(10), Constraint::Min(8)],
        )
        .header(header(&["Time", "Sensor", "Value"]))
        .block(block)
        .row_highlight_style(theme::table_selected());
        frame.render_stateful_widget(table, area, &mut self.reading_table.clone());
    }

    fn render_picker(frame: &mut Frame, area: Rect, picker: &ComponentPicker, details: &DeviceDetails) {
        let options = picker.options(details);
        let dialog = popup::centered(area, 50, 14);
        let inner = popup::frame_dialog(frame, dialog, &picker.title(), theme::border_focused());

        if picker.busy {
            frame.render_widget(
                Paragraph::new(Span::styled(notice::LOADING, theme::key_hint())),
                inner,
            );
            return;
        }
        if options.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(notice::NO_DATA, theme::key_hint())),
                inner,
            );
            return;
        }
        let items: Vec<ListItem> = options
            .into_iter()
            .map(|(_, label)| ListItem::new(label).style(theme::table_row()))
            .collect();
        let list = List::new(items)
            .highlight_style(theme::table_selected())
            .highlight_symbol("▸ ");
        frame.render_stateful_widget(list, inner, &mut picker.list.clone());
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect) {
        let dialog = popup::centered(area, 56, 6);
        let inner = popup::frame_dialog(frame, dialog, "Deactivate", theme::border_danger());
        let hint = if self.deactivating {
            Line::from(Span::styled("Deactivating...", theme::key_hint()))
        } else {
            Line::from(vec![
                Span::styled("y ", theme::key_hint_key()),
                Span::styled("confirm   ", theme::key_hint()),
                Span::styled("n ", theme::key_hint_key()),
                Span::styled("cancel", theme::key_hint()),
            ])
        };
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(notice::CONFIRM_DEACTIVATE, theme::value())),
                Line::default(),
                hint,
            ]),
            inner,
        );
    }
}

fn header(titles: &[&'static str]) -> Row<'static> {
    Row::new(
        titles
            .iter()
            .map(|h| Cell::from(*h).style(theme::table_header())),
    )
}

impl Drop for DeviceDetailsScreen {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.flow.cancel();
    }
}

impl Component for DeviceDetailsScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        spawn_data_bridge(
            self.flow.subscribe(),
            action_tx.clone(),
            self.cancel.clone(),
            Action::DeviceDetailsUpdated,
        );
        self.action_tx = Some(action_tx);
        self.reload();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.prompt_visible() {
            self.handle_prompt_key(key);
            return Ok(None);
        }
        if self.picker.is_some() {
            self.handle_picker_key(key);
            return Ok(None);
        }

        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Char('j') | KeyCode::Down => {
                let (table, len) = self.focused_table();
                move_selection(table, len, 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let (table, len) = self.focused_table();
                move_selection(table, len, -1);
            }
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('s') => self.open_picker(ComponentKind::Sensor),
            KeyCode::Char('a') => self.open_picker(ComponentKind::Actuator),
            KeyCode::Char('d') => self.request_deactivate(),
            KeyCode::Char('e') => {
                return Ok(Some(Action::Navigate(Route::EditDevice {
                    device_id: self.flow.device_id().to_owned(),
                })));
            }
            KeyCode::Enter => self.select_for_blind(),
            KeyCode::Char('+' | '=') => self.step_blind(true),
            KeyCode::Char('-') => self.step_blind(false),
            KeyCode::Char('u') => self.submit_blind(),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::DeviceDetailsUpdated(state) => {
                self.state = state.clone();
                if let Some(details) = self.details() {
                    if !details.deactivate_prompt.is_visible() {
                        self.deactivating = false;
                    }
                    move_selection(&mut self.sensor_table, details.sensors.len(), 0);
                    move_selection(&mut self.actuator_table, details.actuators.len(), 0);
                    move_selection(&mut self.reading_table, details.readings.len(), 0);
                }
            }
            Action::ModelsLoaded(kind, result) => {
                if let Some(picker) = self.picker.as_mut().filter(|p| p.kind == *kind) {
                    picker.busy = false;
                    match result {
                        Ok(()) => {
                            picker.stage = PickerStage::Model;
                            picker.list.select(Some(0));
                        }
                        Err(message) => self.notify(Notification::error(message.clone())),
                    }
                }
            }
            Action::ComponentAddResult(kind, result) => {
                if self.picker.as_ref().is_some_and(|p| p.kind == *kind) {
                    if result.is_ok() {
                        self.picker = None;
                    } else if let Some(picker) = self.picker.as_mut() {
                        picker.busy = false;
                    }
                }
            }
            Action::BlindSubmitted(result) => {
                self.blind_submitting = false;
                if let Ok(value) = result {
                    debug!(value, "blind value accepted");
                }
            }
            Action::Tick => self.throbber.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = self.details().map_or_else(
            || format!("Device {}", self.flow.device_id()),
            |d| format!("{} · {}", d.device.display_name(), d.room.display_name()),
        );
        let outer = Block::default()
            .title(format!(" {title} "))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let Some(details) = ready_or_placeholder(frame, inner, &self.state, &self.throbber) else {
            return;
        };

        let rows = Layout::vertical([
            Constraint::Length(9),
            Constraint::Min(6),
            Constraint::Min(5),
        ])
        .split(inner);
        let top = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[0]);
        let middle = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        Self::render_attributes(frame, top[0], &details);
        Self::render_side(frame, top[1], &details);
        self.render_sensors(frame, middle[0], &details);
        self.render_actuators(frame, middle[1], &details);
        self.render_readings(frame, rows[2], &details);

        if let Some(picker) = &self.picker {
            Self::render_picker(frame, area, picker, &details);
        }
        if details.deactivate_prompt.is_visible() {
            self.render_prompt(frame, area);
        }
    }

    fn captures_input(&self) -> bool {
        self.picker.is_some() || self.prompt_visible()
    }

    fn key_hints(&self) -> &'static str {
        if self.prompt_visible() {
            "y confirm  n cancel"
        } else if self.picker.is_some() {
            "j/k move  Enter choose  Esc back"
        } else if self.details().is_some_and(|d| d.shows_blind_control()) {
            "Tab panel  Enter select  +/- blind  u update  s/a add  d deactivate  e edit"
        } else {
            "Tab panel  j/k move  s add sensor  a add actuator  d deactivate  e edit"
        }
    }

    fn id(&self) -> &'static str {
        "device_details"
    }
}
