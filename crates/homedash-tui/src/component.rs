//! Component trait: the building block for every page.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;

/// Every page implements Component.
///
/// Lifecycle: `init` → (`handle_key_event` | `update` | `render`)* → drop.
/// Dropping a page cancels whatever its flow still has in flight.
pub trait Component: Send {
    /// Called once when the page is mounted. Pages start their first
    /// load here.
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    /// Handle a keyboard event. Return an Action to dispatch, or None.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Process a dispatched action. May return a follow-up action.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render into the provided frame area.
    fn render(&self, frame: &mut Frame, area: Rect);

    /// `true` while a text field or dialog owns the keyboard, so global
    /// shortcuts (`q`, number keys, `Esc`) are passed through to the page.
    fn captures_input(&self) -> bool {
        false
    }

    /// Key hints shown in the status bar.
    fn key_hints(&self) -> &'static str {
        ""
    }

    fn id(&self) -> &'static str;
}
