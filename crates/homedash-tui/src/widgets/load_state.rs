//! Rendering for pages that are not ready yet.

use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use homedash_core::{LoadState, notice};

use crate::theme;

/// Returns the ready snapshot, or draws `Loading...` / `Error: {message}`
/// into `area` and returns `None`.
pub fn ready_or_placeholder<T>(
    frame: &mut Frame,
    area: Rect,
    state: &LoadState<T>,
    throbber: &ThrobberState,
) -> Option<Arc<T>> {
    match state {
        LoadState::Ready(snapshot) => Some(Arc::clone(snapshot)),
        LoadState::Idle | LoadState::Loading => {
            let line = first_line(area);
            let spinner = Throbber::default()
                .label(notice::LOADING)
                .style(theme::accent())
                .throbber_style(theme::throbber());
            frame.render_stateful_widget(spinner, line, &mut throbber.clone());
            None
        }
        LoadState::Error(message) => {
            let line = first_line(area);
            frame.render_widget(
                Paragraph::new(Span::styled(notice::error_line(message), theme::error_text()))
                    .alignment(Alignment::Left),
                line,
            );
            None
        }
    }
}

/// The first row inside a one-cell margin, empty when `area` is too small.
fn first_line(area: Rect) -> Rect {
    if area.height < 2 || area.width < 3 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    Rect::new(area.x + 1, area.y + 1, area.width - 2, 1)
}
