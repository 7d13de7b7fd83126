// SPDX-License-Identifier: MPL-2.0
//! Loading overlay lifecycle.
//!
//! The overlay is attached before its fade-in starts and stays attached
//! until a fade-out completes, at which point it is detached and its visual
//! state discarded. At most one overlay exists per preview; a second show
//! replaces the in-flight fade rather than attaching another instance.

use crate::ui::overlay::OverlayFade;
use std::time::Duration;

/// The loading overlay owned by the preview.
#[derive(Debug, Clone, Default)]
pub struct LoadingOverlay {
    attached: bool,
    fade: OverlayFade,
}

impl LoadingOverlay {
    /// Shows or hides the overlay with a fade.
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.attached = true;
            self.fade.begin(1.0, Duration::ZERO);
        } else if self.attached {
            self.fade.begin(0.0, Duration::ZERO);
        }
    }

    /// Advances the fade; detaches once a hide completes.
    pub fn tick(&mut self, dt: Duration) {
        let completed = self.fade.tick(dt);
        if completed && self.fade.value() <= f32::EPSILON {
            self.attached = false;
        }
    }

    /// Whether an overlay instance currently exists.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Overlay opacity; zero when detached.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        if self.attached {
            self.fade.value()
        } else {
            0.0
        }
    }

    /// Whether a fade is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.fade.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(16);

    fn settle(overlay: &mut LoadingOverlay) {
        for _ in 0..1000 {
            if !overlay.is_animating() {
                return;
            }
            overlay.tick(STEP);
        }
        panic!("overlay did not settle");
    }

    #[test]
    fn show_attaches_before_animating() {
        let mut overlay = LoadingOverlay::default();
        overlay.set_visible(true);

        assert!(overlay.is_attached());
        assert!(overlay.alpha() < 1.0);

        settle(&mut overlay);
        assert!((overlay.alpha() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn hide_detaches_only_after_fade_completes() {
        let mut overlay = LoadingOverlay::default();
        overlay.set_visible(true);
        settle(&mut overlay);

        overlay.set_visible(false);
        assert!(overlay.is_attached());

        settle(&mut overlay);
        assert!(!overlay.is_attached());
        assert!(overlay.alpha().abs() < f32::EPSILON);
    }

    #[test]
    fn double_show_keeps_a_single_instance() {
        let mut overlay = LoadingOverlay::default();
        overlay.set_visible(true);
        overlay.set_visible(true);

        assert!(overlay.is_attached());
        settle(&mut overlay);
        assert!((overlay.alpha() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn hide_while_detached_is_a_no_op() {
        let mut overlay = LoadingOverlay::default();
        overlay.set_visible(false);

        assert!(!overlay.is_attached());
        assert!(!overlay.is_animating());
    }

    #[test]
    fn show_during_hide_recovers_from_the_current_alpha() {
        let mut overlay = LoadingOverlay::default();
        overlay.set_visible(true);
        settle(&mut overlay);

        overlay.set_visible(false);
        for _ in 0..10 {
            overlay.tick(STEP);
        }
        let mid = overlay.alpha();
        assert!(mid > 0.0 && mid < 1.0);

        overlay.set_visible(true);
        assert!(overlay.is_attached());
        settle(&mut overlay);
        assert!((overlay.alpha() - 1.0).abs() < f32::EPSILON);
    }
}
