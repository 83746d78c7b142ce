//! Rooms page: every room of the configured house.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use homedash_core::{LoadState, Room, Route, RoomsFlow, RoomsOverview};

use crate::action::Action;
use crate::component::Component;
use crate::data_bridge::spawn_data_bridge;
use crate::screens::{move_selection, spawn_load};
use crate::theme;
use crate::widgets::load_state::ready_or_placeholder;

pub struct RoomsScreen {
    flow: Arc<RoomsFlow>,
    state: LoadState<RoomsOverview>,
    table_state: TableState,
    throbber: ThrobberState,
    cancel: CancellationToken,
}

impl RoomsScreen {
    pub fn new(flow: RoomsFlow) -> Self {
        Self {
            flow: Arc::new(flow),
            state: LoadState::Idle,
            table_state: TableState::default().with_selected(Some(0)),
            throbber: ThrobberState::default(),
            cancel: CancellationToken::new(),
        }
    }

    fn rooms(&self) -> &[Room] {
        self.state
            .ready()
            .map(|o| o.rooms.as_slice())
            .unwrap_or_default()
    }

    fn selected_room(&self) -> Option<&Room> {
        self.rooms().get(self.table_state.selected().unwrap_or(0))
    }

    fn reload(&self) {
        let flow = Arc::clone(&self.flow);
        spawn_load(async move { flow.load().await.map(|_| ()) }, "rooms");
    }
}

impl Drop for RoomsScreen {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.flow.cancel();
    }
}

impl Component for RoomsScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        spawn_data_bridge(
            self.flow.subscribe(),
            action_tx,
            self.cancel.clone(),
            Action::RoomsUpdated,
        );
        self.reload();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let len = self.rooms().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => move_selection(&mut self.table_state, len, 1),
            KeyCode::Char('k') | KeyCode::Up => move_selection(&mut self.table_state, len, -1),
            KeyCode::Char('g') => self.table_state.select(Some(0)),
            KeyCode::Char('G') => self.table_state.select(Some(len.saturating_sub(1))),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Enter => {
                if let Some(room) = self.selected_room() {
                    debug!(room_id = %room.id, "opening room");
                    return Ok(Some(Action::Navigate(Route::RoomDevices {
                        room_id: room.id.clone(),
                    })));
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::RoomsUpdated(state) => {
                self.state = state.clone();
                let len = self.rooms().len();
                move_selection(&mut self.table_state, len, 0);
            }
            Action::Tick => self.throbber.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let house = self.flow.house_id();
        let block = Block::default()
            .title(format!(" Rooms · house {house} ({}) ", self.rooms().len()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(overview) = ready_or_placeholder(frame, inner, &self.state, &self.throbber)
        else {
            return;
        };

        if overview.rooms.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("  No rooms in this house", theme::key_hint())),
                inner,
            );
            return;
        }

        let header = Row::new(
            ["Room", "Floor", "L × W × H (m)", "Area (m²)", "Location", "ID"]
                .into_iter()
                .map(|h| Cell::from(h).style(theme::table_header())),
        );

        let selected = self.table_state.selected().unwrap_or(0);
        let rows: Vec<Row> = overview
            .rooms
            .iter()
            .enumerate()
            .map(|(i, room)| {
                let prefix = if i == selected { "▸ " } else { "  " };
                Row::new(vec![
                    Cell::from(format!("{prefix}{}", room.display_name())),
                    Cell::from(room.floor_number.to_string()),
                    Cell::from(format!(
                        "{:.1} × {:.1} × {:.1}",
                        room.length, room.width, room.height
                    )),
                    Cell::from(format!("{:.1}", room.floor_area())),
                    Cell::from(room.location_label()),
                    Cell::from(Span::styled(room.id.clone(), theme::key_hint())),
                ])
                .style(theme::table_row())
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(18),
                Constraint::Length(6),
                Constraint::Length(20),
                Constraint::Length(10),
                Constraint::Length(9),
                Constraint::Min(8),
            ],
        )
        .header(header)
        .row_highlight_style(theme::table_selected());

        frame.render_stateful_widget(table, inner, &mut self.table_state.clone());
    }

    fn key_hints(&self) -> &'static str {
        "j/k move  Enter open  r reload"
    }

    fn id(&self) -> &'static str {
        "rooms"
    }
}
