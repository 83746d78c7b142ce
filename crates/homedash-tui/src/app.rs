//! Application core: event loop, page routing, action dispatch.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use homedash_core::{Dashboard, Route};

use crate::action::{Action, Notification, NotificationLevel};
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screen;
use crate::theme;
use crate::tui::Tui;
use crate::widgets::popup;

/// How long a toast stays up.
const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Top-level application state and event loop.
pub struct App {
    dashboard: Dashboard,
    /// Route of the mounted page.
    route: Route,
    /// The mounted page. Replaced (and the old one dropped) on navigation.
    screen: Box<dyn Component>,
    running: bool,
    help_visible: bool,
    /// Active toast with the time it was raised.
    notification: Option<(Notification, Instant)>,
    /// Pages dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(dashboard: Dashboard, route: Route) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let screen = create_screen(&route, &dashboard);
        Self {
            dashboard,
            route,
            screen,
            running: true,
            help_visible: false,
            notification: None,
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        let (width, height) = tui.size().unwrap_or((80, 24));
        self.screen.init(self.action_tx.clone())?;

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!(route = %self.route, width, height, "TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            // Drain everything queued so far, including page follow-ups
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Global keys first, then the page. A page that captures input gets
    /// every key except Ctrl+C.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        if self.screen.captures_input() {
            return self.screen.handle_key_event(key);
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='9')) => {
                let n = u8::try_from(c).map_or(0, |b| b - b'0');
                if let Some(route) = ScreenId::route_for_number(n) {
                    return Ok(Some(Action::Navigate(route)));
                }
            }
            (KeyModifiers::NONE, KeyCode::Esc) => return Ok(Some(Action::GoBack)),
            _ => {}
        }

        self.screen.handle_key_event(key)
    }

    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,
            Action::Resize(w, h) => debug!(width = w, height = h, "terminal resized"),
            Action::Navigate(route) => self.navigate(route.clone())?,
            Action::GoBack => self.navigate(self.route.parent())?,
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::Notify(notification) => {
                self.notification = Some((notification.clone(), Instant::now()));
            }
            Action::Tick => {
                if self
                    .notification
                    .as_ref()
                    .is_some_and(|(_, at)| at.elapsed() >= NOTIFICATION_TTL)
                {
                    self.notification = None;
                }
            }
            _ => {}
        }

        if let Some(follow_up) = self.screen.update(action)? {
            self.action_tx.send(follow_up)?;
        }
        Ok(())
    }

    /// Mount the page for `route`. The old page is dropped first, which
    /// cancels its in-flight requests.
    fn navigate(&mut self, route: Route) -> Result<()> {
        if route == self.route {
            return Ok(());
        }
        debug!(from = %self.route, to = %route, "navigating");
        self.screen = create_screen(&route, &self.dashboard);
        self.route = route;
        self.help_visible = false;
        debug!(page = self.screen.id(), "page mounted");
        self.screen.init(self.action_tx.clone())
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // [page] [tab bar] [status bar]
        let layout = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        self.screen.render(frame, layout[0]);
        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        // Last drawn is topmost
        if let Some((notification, _)) = &self.notification {
            render_notification(frame, area, notification);
        }
        if self.help_visible {
            render_help_overlay(frame, area);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let current = ScreenId::of(&self.route).tab();
        let titles: Vec<Line> = ScreenId::TABS
            .iter()
            .map(|&id| {
                let style = if id == current {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(
                    format!(" {} {} ", id.number(), id.label()),
                    style,
                ))
            })
            .collect();

        let [tabs_area, route_area] =
            Layout::horizontal([Constraint::Min(20), Constraint::Min(0)]).areas(area);

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::TABS
                    .iter()
                    .position(|&s| s == current)
                    .unwrap_or(0),
            );
        frame.render_widget(tabs, tabs_area);
        frame.render_widget(
            Paragraph::new(Span::styled(format!("{} ", self.route), theme::key_hint()))
                .alignment(ratatui::layout::Alignment::Right),
            route_area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let hints = self.screen.key_hints();
        let mut spans = vec![Span::raw(" ")];
        if !hints.is_empty() {
            spans.push(Span::styled(hints, theme::key_hint()));
            spans.push(Span::styled(" │ ", theme::key_hint()));
        }
        spans.push(Span::styled(
            "? help  Esc back  q quit",
            theme::key_hint(),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Toast in the bottom-right corner, above the status bar.
#[allow(clippy::cast_possible_truncation)]
fn render_notification(frame: &mut Frame, area: Rect, notification: &Notification) {
    let msg_len = notification.message.chars().count().min(usize::from(u16::MAX)) as u16;
    let width = msg_len.saturating_add(6).clamp(20, 70).min(area.width);
    let height = 3u16.min(area.height);

    let x = area.width.saturating_sub(width + 1);
    let y = area.height.saturating_sub(height + 2);
    let toast_area = Rect::new(area.x + x, area.y + y, width, height);

    let (style, icon) = match notification.level {
        NotificationLevel::Success => (theme::device_active(), "✓"),
        NotificationLevel::Error => (theme::error_text(), "✗"),
        NotificationLevel::Warning => (theme::warning(), "!"),
        NotificationLevel::Info => (theme::accent(), "·"),
    };

    let inner = popup::frame_dialog(frame, toast_area, "", style);
    let line = Line::from(vec![
        Span::styled(format!(" {icon} "), style),
        Span::styled(notification.message.as_str(), theme::text()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_area = popup::centered(area, 60, 20);
    let inner = popup::frame_dialog(
        frame,
        help_area,
        "Keyboard Shortcuts",
        theme::border_focused(),
    );

    let section = |title: &'static str| {
        Line::from(Span::styled(format!("  {title}"), theme::table_header()))
    };
    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<10}"), theme::key_hint_key()),
            Span::styled(what, theme::key_hint()),
        ])
    };

    let help_text = vec![
        Line::from(""),
        section("Navigation"),
        key("1 / 2", "Home / Rooms"),
        key("j/k ↑/↓", "Move up/down"),
        key("Enter", "Open / select"),
        key("Esc", "Back / close"),
        key("Tab", "Next field or panel"),
        Line::from(""),
        section("Devices"),
        key("a", "Add device (room) / actuator (device)"),
        key("s", "Add sensor"),
        key("d", "Deactivate device"),
        key("+ / -", "Step blind value"),
        key("u", "Send blind value"),
        key("e", "Edit device"),
        key("r", "Reload page"),
        Line::from(""),
        key("?", "This help"),
        key("q", "Quit"),
    ];
    frame.render_widget(Paragraph::new(help_text), inner);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use homedash_core::DashboardConfig;

    fn app(route: &str) -> App {
        let dashboard = Dashboard::new(DashboardConfig::default()).unwrap();
        App::new(dashboard, Route::parse(route))
    }

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[tokio::test]
    async fn esc_goes_to_parent_route() {
        let mut app = app("/rooms/R1/devices");
        app.screen.init(app.action_tx.clone()).unwrap();
        let action = press(&mut app, KeyCode::Esc).unwrap();
        app.process_action(&action).unwrap();
        assert_eq!(app.route, Route::Rooms);
    }

    #[tokio::test]
    async fn number_keys_switch_tabs() {
        let mut app = app("/");
        let action = press(&mut app, KeyCode::Char('2'));
        assert!(matches!(action, Some(Action::Navigate(Route::Rooms))));
        assert!(press(&mut app, KeyCode::Char('7')).is_none());
    }

    #[tokio::test]
    async fn edit_page_keeps_global_keys_for_itself() {
        let mut app = app("/devices/D1/edit-device");
        assert!(press(&mut app, KeyCode::Char('q')).is_none());
        assert!(app.running);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            app.handle_key_event(ctrl_c).unwrap(),
            Some(Action::Quit)
        ));
    }

    #[tokio::test]
    async fn toast_expires_on_tick() {
        let mut app = app("/nowhere");
        app.process_action(&Action::Notify(Notification::success("done")))
            .unwrap();
        assert!(app.notification.is_some());

        app.notification = app
            .notification
            .take()
            .map(|(n, at)| (n, at.checked_sub(NOTIFICATION_TTL).unwrap_or(at)));
        app.process_action(&Action::Tick).unwrap();
        assert!(app.notification.is_none());
    }
}
