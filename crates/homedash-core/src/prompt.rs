// ── Two-button confirmation prompt ──

use serde::{Deserialize, Serialize};

/// State of a yes/no prompt: `Hidden → Shown → {Confirmed, Cancelled}`.
///
/// A resolved prompt can be shown again; it is hidden from view in every
/// state except `Shown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfirmPrompt {
    #[default]
    Hidden,
    Shown,
    Confirmed,
    Cancelled,
}

impl ConfirmPrompt {
    pub fn show(&mut self) {
        *self = Self::Shown;
    }

    /// Resolve as confirmed. Returns `false` if the prompt was not showing.
    pub fn confirm(&mut self) -> bool {
        self.resolve(Self::Confirmed)
    }

    /// Resolve as cancelled. Returns `false` if the prompt was not showing.
    pub fn cancel(&mut self) -> bool {
        self.resolve(Self::Cancelled)
    }

    pub fn is_visible(self) -> bool {
        self == Self::Shown
    }

    fn resolve(&mut self, outcome: Self) -> bool {
        if *self == Self::Shown {
            *self = outcome;
            true
        } else {
            false
        }
    }
}
