// SPDX-License-Identifier: MPL-2.0
//! Press-to-compare visibility toggle.
//!
//! While a press is held the preview shows the unfiltered original; on
//! release (or cancellation) it snaps back to the edited render. This is a
//! hard cut, not a fade. There is no per-press counting: any number of
//! concurrent presses collapses into the same two states, and any end or
//! cancel returns to the default.

/// Which of the two overlaid images is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shown {
    /// The edited render (default).
    #[default]
    Edited,
    /// The unfiltered original, shown while a press is held.
    Original,
}

/// Two-state toggle keyed purely by the press lifecycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressSwap {
    shown: Shown,
}

impl PressSwap {
    /// A press started: show the original.
    pub fn press_began(&mut self) {
        self.shown = Shown::Original;
    }

    /// A press ended or was cancelled: show the edited render.
    pub fn press_ended_or_cancelled(&mut self) {
        self.shown = Shown::Edited;
    }

    /// The currently visible image.
    #[must_use]
    pub fn shown(self) -> Shown {
        self.shown
    }

    /// Whether the user is holding the comparison press.
    #[must_use]
    pub fn is_comparing(self) -> bool {
        self.shown == Shown::Original
    }
}
