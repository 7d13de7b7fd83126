// SPDX-License-Identifier: MPL-2.0
//! Top-level update loop.

use super::{App, Message};
use crate::config::MAX_TICK_STEP_MS;
use crate::ui::controls::vignette;
use iced::Task;
use std::time::{Duration, Instant};

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Preview(msg) => {
                self.preview.borrow_mut().update(msg);
                Task::none()
            }
            Message::Vignette(msg) => {
                let event = self.vignette.borrow_mut().update(msg);
                self.apply_vignette_event(event);
                Task::none()
            }
            Message::CropFrame(msg) => {
                self.crop_frame.handle(msg);
                Task::none()
            }
            Message::OpenVignette => {
                // Re-opening the panel re-runs the attach path; the binding
                // guard keeps a single sink installed.
                crate::stack::bind(&mut self.stack, &self.vignette);
                self.vignette_open = true;
                Task::none()
            }
            Message::SourceLoaded(Ok(image)) => {
                self.stack.finish_loading(*image);
                Task::none()
            }
            Message::SourceLoaded(Err(error)) => {
                log::warn!("failed to load source image: {error}");
                self.stack.fail_loading();
                Task::none()
            }
            Message::Tick(now) => {
                self.advance_animations(now);
                Task::none()
            }
        }
    }

    /// Applies a vignette-control intent to the editing stack.
    ///
    /// The stack publishes the resulting state back into the bound
    /// components, so the slider echo happens here rather than inside the
    /// control's own update.
    pub(crate) fn apply_vignette_event(&mut self, event: vignette::Event) {
        match event {
            vignette::Event::SetVignette(value) => {
                self.stack.set_filters(|filters| filters.set_vignette(value));
            }
            vignette::Event::Cancelled => {
                self.stack.revert();
                self.vignette_open = false;
            }
            vignette::Event::Committed => {
                self.stack.take_snapshot();
                self.vignette_open = false;
            }
        }
    }

    /// Forwards elapsed time to the overlay fades.
    ///
    /// The step is clamped so fades resume smoothly after the tick
    /// subscription has been idle.
    fn advance_animations(&mut self, now: Instant) {
        let dt = self.last_tick.map_or(
            Duration::from_millis(crate::config::TICK_INTERVAL_MS),
            |last| {
                now.saturating_duration_since(last)
                    .min(Duration::from_millis(MAX_TICK_STEP_MS))
            },
        );
        self.last_tick = Some(now);

        self.preview.borrow_mut().tick(dt);
        self.crop_frame.tick(dt);
    }
}
