// SPDX-License-Identifier: MPL-2.0
//! Crop-frame overlay: border, corner marks, and rule-of-thirds guides.
//!
//! The guides fade in while the user is adjusting (pointer held down) and
//! fade back out after a short delay once the adjustment ends, so the grid
//! stays readable for a moment after release. Starting a new adjustment
//! during that delay cancels the pending fade-out.

use std::time::Duration;

pub mod animation;
pub mod geometry;
mod view;

pub use animation::OverlayFade;
pub use view::CropFrameRenderer;

/// Crop-frame overlay state.
#[derive(Debug, Clone)]
pub struct State {
    guides: OverlayFade,
    adjusting: bool,
    hide_delay: Duration,
}

/// Messages published by the overlay canvas.
#[derive(Debug, Clone)]
pub enum Message {
    /// The pointer went down inside the frame.
    AdjustmentBegan,
    /// The pointer was released or left the frame.
    AdjustmentEnded,
}

impl State {
    /// Creates the overlay with the configured guide fade-out delay.
    #[must_use]
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            guides: OverlayFade::default(),
            adjusting: false,
            hide_delay,
        }
    }

    /// Handle an overlay message.
    pub fn handle(&mut self, message: Message) {
        match message {
            Message::AdjustmentBegan => {
                self.adjusting = true;
                self.guides.begin(1.0, Duration::ZERO);
            }
            Message::AdjustmentEnded => {
                // Released without a press (e.g. pointer entered already
                // down): nothing to end.
                if !self.adjusting {
                    return;
                }
                self.adjusting = false;
                self.guides.begin(0.0, self.hide_delay);
            }
        }
    }

    /// Advances the guide fade.
    pub fn tick(&mut self, dt: Duration) {
        self.guides.tick(dt);
    }

    /// Current opacity of the guide lines.
    #[must_use]
    pub fn guide_alpha(&self) -> f32 {
        self.guides.value()
    }

    /// Whether the user is currently adjusting.
    #[must_use]
    pub fn is_adjusting(&self) -> bool {
        self.adjusting
    }

    /// Whether a guide fade (including its pending delay) is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.guides.is_animating()
    }
}
