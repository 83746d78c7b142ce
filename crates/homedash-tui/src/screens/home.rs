//! Home page: clock, today's date, outside temperature and sun times.
//!
//! The clock advances on every tick; the weather is re-fetched on the
//! flow's refresh interval for as long as the page stays open.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Local};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use homedash_core::{HomeFlow, LoadState, Route, Weather, WeatherSource, notice};

use crate::action::Action;
use crate::component::Component;
use crate::data_bridge::spawn_data_bridge;
use crate::theme;

pub struct HomeScreen {
    flow: Arc<HomeFlow>,
    weather: LoadState<Weather>,
    now: DateTime<Local>,
    throbber: ThrobberState,
    cancel: CancellationToken,
}

impl HomeScreen {
    pub fn new(flow: HomeFlow) -> Self {
        Self {
            flow: Arc::new(flow),
            weather: LoadState::Idle,
            now: Local::now(),
            throbber: ThrobberState::default(),
            cancel: CancellationToken::new(),
        }
    }

    fn temperature_line(&self) -> Line<'static> {
        match &self.weather {
            LoadState::Ready(w) => match &w.temperature {
                Some(t) => Line::from(Span::styled(
                    format!("{t}°C"),
                    theme::warning().add_modifier(Modifier::BOLD),
                )),
                None => Line::from(Span::styled("Temperature unavailable", theme::key_hint())),
            },
            _ => Line::from(Span::styled("Loading temperature...", theme::key_hint())),
        }
    }

    fn sun_lines(&self) -> Vec<Line<'static>> {
        let LoadState::Ready(w) = &self.weather else {
            return vec![Line::from(Span::styled(
                "Loading sun times...",
                theme::key_hint(),
            ))];
        };
        match (&w.sunrise, &w.sunset) {
            (Some(rise), Some(set)) => vec![
                Line::from(vec![
                    Span::styled("Sunrise: ", theme::label()),
                    Span::styled(rise.clone(), theme::sunrise()),
                ]),
                Line::from(vec![
                    Span::styled("Sunset:  ", theme::label()),
                    Span::styled(set.clone(), theme::sunset()),
                ]),
            ],
            _ => vec![Line::from(Span::styled(
                "Sun times unavailable",
                theme::key_hint(),
            ))],
        }
    }

    fn source_line(&self) -> Line<'static> {
        let LoadState::Ready(w) = &self.weather else {
            return Line::default();
        };
        let describe = |source: WeatherSource| match source {
            WeatherSource::Backend => "backend",
            WeatherSource::Public => "public API",
            WeatherSource::Unavailable => "none",
        };
        Line::from(Span::styled(
            format!(
                "temperature: {}  ·  sun times: {}",
                describe(w.temperature_source),
                describe(w.sun_source)
            ),
            theme::key_hint(),
        ))
    }
}

impl Drop for HomeScreen {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.flow.cancel();
    }
}

impl Component for HomeScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        spawn_data_bridge(
            self.flow.subscribe(),
            action_tx,
            self.cancel.clone(),
            Action::WeatherUpdated,
        );

        // First tick fires immediately, so this also does the initial load
        let flow = Arc::clone(&self.flow);
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            let mut refresh = tokio::time::interval(flow.refresh_interval());
            refresh.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => break,
                    _ = refresh.tick() => {
                        if let Err(e) = flow.load().await {
                            debug!(error = %e, "weather refresh stopped");
                        }
                    }
                }
            }
        });
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Ok(Some(Action::Navigate(Route::Rooms))),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::WeatherUpdated(state) => self.weather = state.clone(),
            Action::Tick => {
                self.now = Local::now();
                self.throbber.calc_next();
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Smart Home ")
            .title_style(theme::title_style())
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1), // clock
            Constraint::Length(1), // date
            Constraint::Length(1),
            Constraint::Length(1), // temperature
            Constraint::Length(1),
            Constraint::Length(2), // sunrise / sunset
            Constraint::Length(1),
            Constraint::Length(1), // rooms button
            Constraint::Length(1), // sources
            Constraint::Min(0),
            Constraint::Length(1), // footer
        ])
        .split(inner);

        let centered = |line: Line<'static>| Paragraph::new(line).alignment(Alignment::Center);

        frame.render_widget(
            centered(Line::from(Span::styled(
                self.now.format("%H:%M:%S").to_string(),
                theme::accent().add_modifier(Modifier::BOLD),
            ))),
            layout[1],
        );
        frame.render_widget(
            centered(Line::from(Span::styled(
                self.now.format("%B %-d, %Y").to_string(),
                theme::table_row(),
            ))),
            layout[2],
        );
        frame.render_widget(centered(self.temperature_line()), layout[4]);
        frame.render_widget(
            Paragraph::new(self.sun_lines()).alignment(Alignment::Center),
            layout[6],
        );
        frame.render_widget(
            centered(Line::from(vec![
                Span::styled("[ Enter ] ", theme::key_hint_key()),
                Span::styled("Rooms", theme::tab_active()),
            ])),
            layout[8],
        );
        frame.render_widget(centered(self.source_line()), layout[9]);
        frame.render_widget(
            centered(Line::from(Span::styled(
                notice::footer(self.now.year()),
                theme::key_hint(),
            ))),
            layout[11],
        );

        if self.weather.is_loading() {
            crate::widgets::load_state::ready_or_placeholder(
                frame,
                Rect::new(inner.x, inner.y, inner.width, 2.min(inner.height)),
                &self.weather,
                &self.throbber,
            );
        }
    }

    fn key_hints(&self) -> &'static str {
        "Enter rooms"
    }

    fn id(&self) -> &'static str {
        "home"
    }
}
