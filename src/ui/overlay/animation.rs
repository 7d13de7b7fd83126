// SPDX-License-Identifier: MPL-2.0
//! Cancelable fade transitions for overlay views.
//!
//! One [`OverlayFade`] drives the opacity of one overlay. Starting a new
//! transition while one is in flight stops the prior one immediately and
//! adopts the currently displayed opacity as the new start value, so a
//! replacement never causes a visual jump. This also applies during a
//! pending start delay: the delayed fade is discarded wholesale.
//!
//! Fades are tick-driven; the application forwards elapsed time from its
//! animation subscription.

use crate::config::FADE_DURATION_MS;
use std::time::Duration;

/// Duration of every overlay fade.
pub const FADE_DURATION: Duration = Duration::from_millis(FADE_DURATION_MS);

/// Spring stiffness of the ease profile. Chosen so the response has visually
/// settled at the end of the duration.
const OMEGA: f32 = 8.0;

/// Step response of a critically damped spring (damping ratio 1), normalized
/// so `ease(0) == 0` and `ease(1) == 1`.
fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let raw = |x: f32| 1.0 - (1.0 + OMEGA * x) * (-OMEGA * x).exp();
    raw(t) / raw(1.0)
}

/// One in-flight opacity transition.
#[derive(Debug, Clone, PartialEq)]
struct Fade {
    start: f32,
    target: f32,
    delay: Duration,
    elapsed: Duration,
}

impl Fade {
    fn value(&self) -> f32 {
        if self.elapsed <= self.delay {
            return self.start;
        }
        let progress =
            (self.elapsed - self.delay).as_secs_f32() / FADE_DURATION.as_secs_f32();
        self.start + (self.target - self.start) * ease(progress)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + FADE_DURATION
    }
}

/// Drives the opacity of a single overlay with last-writer-wins transitions.
#[derive(Debug, Clone, Default)]
pub struct OverlayFade {
    fade: Option<Fade>,
    value: f32,
}

impl OverlayFade {
    /// A fade resting at the given opacity.
    #[must_use]
    pub fn resting_at(value: f32) -> Self {
        Self { fade: None, value }
    }

    /// Starts a transition to `target` after `delay`.
    ///
    /// Any in-flight or delay-pending transition is stopped first; the
    /// currently displayed opacity becomes the new start value.
    pub fn begin(&mut self, target: f32, delay: Duration) {
        self.fade = Some(Fade {
            start: self.value,
            target,
            delay,
            elapsed: Duration::ZERO,
        });
    }

    /// Advances the transition. Returns true when a fade reached its target
    /// on this tick.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(fade) = &mut self.fade else {
            return false;
        };
        fade.elapsed += dt;
        if fade.is_finished() {
            self.value = fade.target;
            self.fade = None;
            true
        } else {
            self.value = fade.value();
            false
        }
    }

    /// The currently displayed opacity.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The target of the in-flight transition, if any.
    #[must_use]
    pub fn target(&self) -> Option<f32> {
        self.fade.as_ref().map(|f| f.target)
    }

    /// Whether a transition (including one still in its delay) is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.fade.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(16);

    fn run_to_rest(fade: &mut OverlayFade) {
        // Generous bound; fades plus delays are a few seconds at most.
        for _ in 0..1000 {
            if !fade.is_animating() {
                return;
            }
            fade.tick(STEP);
        }
        panic!("fade did not settle");
    }

    #[test]
    fn ease_is_normalized_and_monotonic() {
        assert!(ease(0.0).abs() < 1e-6);
        assert!((ease(1.0) - 1.0).abs() < 1e-6);

        let mut previous = 0.0;
        for i in 1..=100 {
            let value = ease(i as f32 / 100.0);
            assert!(value >= previous, "ease must be monotonic");
            previous = value;
        }
    }

    #[test]
    fn fade_in_reaches_target() {
        let mut fade = OverlayFade::default();
        fade.begin(1.0, Duration::ZERO);
        run_to_rest(&mut fade);
        assert!((fade.value() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn completion_is_reported_exactly_once() {
        let mut fade = OverlayFade::default();
        fade.begin(1.0, Duration::ZERO);

        let mut completions = 0;
        for _ in 0..100 {
            if fade.tick(STEP) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn delay_holds_the_current_value() {
        let mut fade = OverlayFade::resting_at(1.0);
        fade.begin(0.0, Duration::from_secs(2));

        // Halfway through the delay nothing has moved yet.
        for _ in 0..62 {
            fade.tick(STEP);
        }
        assert!((fade.value() - 1.0).abs() < f32::EPSILON);

        run_to_rest(&mut fade);
        assert!(fade.value().abs() < f32::EPSILON);
    }

    #[test]
    fn replacement_adopts_in_flight_value() {
        let mut fade = OverlayFade::default();
        fade.begin(1.0, Duration::ZERO);
        for _ in 0..10 {
            fade.tick(STEP);
        }
        let mid = fade.value();
        assert!(mid > 0.0 && mid < 1.0);

        // Reverse mid-flight: the new fade starts from the displayed value.
        fade.begin(0.0, Duration::ZERO);
        assert!((fade.value() - mid).abs() < f32::EPSILON);
        fade.tick(STEP);
        assert!(fade.value() <= mid);

        run_to_rest(&mut fade);
        assert!(fade.value().abs() < f32::EPSILON);
    }

    #[test]
    fn replacement_during_delay_discards_pending_fade() {
        let mut fade = OverlayFade::resting_at(1.0);
        fade.begin(0.0, Duration::from_secs(2));
        for _ in 0..10 {
            fade.tick(STEP);
        }

        // A show during the hide's delay window cancels the hide entirely.
        fade.begin(1.0, Duration::ZERO);
        run_to_rest(&mut fade);
        assert!((fade.value() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn last_writer_wins_with_no_queueing() {
        let mut fade = OverlayFade::default();
        fade.begin(1.0, Duration::ZERO);
        fade.begin(0.3, Duration::ZERO);
        fade.begin(0.8, Duration::ZERO);

        assert_eq!(fade.target(), Some(0.8));
        run_to_rest(&mut fade);
        assert!((fade.value() - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn resting_fade_reports_not_animating() {
        let mut fade = OverlayFade::default();
        assert!(!fade.is_animating());
        assert!(!fade.tick(STEP));

        fade.begin(1.0, Duration::ZERO);
        assert!(fade.is_animating());
    }
}
