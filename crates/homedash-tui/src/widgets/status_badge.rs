//! Device activation badge: ● Activated / ○ Deactivated.

use ratatui::text::Span;

use homedash_core::Device;

use crate::theme;

pub fn status_span(device: &Device) -> Span<'static> {
    let (symbol, style) = if device.active {
        ("●", theme::device_active())
    } else {
        ("○", theme::device_inactive())
    };
    Span::styled(format!("{symbol} {}", device.status_label()), style)
}
