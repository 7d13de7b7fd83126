// SPDX-License-Identifier: MPL-2.0
//! Editing preview: the edited render with press-to-compare and a loading
//! overlay.
//!
//! The preview holds two display targets (edited and original) fed by the
//! state binding, a press toggle choosing which one is visible, and the
//! loading overlay driven by the `is_loading` flag. All three update
//! independently: image deliveries never touch the press state, and the
//! loading fade runs over whichever image is showing.

use crate::media::ImageData;
use crate::stack::{Binding, Changes, EditState, StateObserver};

mod loading;
mod touch;
mod view;

pub use loading::LoadingOverlay;
pub use touch::{PressSwap, Shown};
pub use view::render;

/// Preview component state.
#[derive(Debug, Default)]
pub struct State {
    press: PressSwap,
    loading: LoadingOverlay,
    edited_image: Option<ImageData>,
    original_image: Option<ImageData>,
    binding: Binding,
}

/// Messages emitted by the preview's press area.
#[derive(Debug, Clone)]
pub enum Message {
    PressBegan,
    PressEnded,
    PressCancelled,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a press message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::PressBegan => self.press.press_began(),
            Message::PressEnded | Message::PressCancelled => {
                self.press.press_ended_or_cancelled();
            }
        }
    }

    /// Advances the loading overlay fade.
    pub fn tick(&mut self, dt: std::time::Duration) {
        self.loading.tick(dt);
    }

    /// The image currently chosen by the press state, once available.
    ///
    /// While comparing, falls back to the edited render if the original has
    /// not arrived yet.
    #[must_use]
    pub fn displayed_image(&self) -> Option<&ImageData> {
        match self.press.shown() {
            Shown::Original => self.original_image.as_ref().or(self.edited_image.as_ref()),
            Shown::Edited => self.edited_image.as_ref(),
        }
    }

    /// Whether the user is holding the comparison press.
    #[must_use]
    pub fn is_comparing(&self) -> bool {
        self.press.is_comparing()
    }

    /// The loading overlay.
    #[must_use]
    pub fn loading(&self) -> &LoadingOverlay {
        &self.loading
    }

    /// Whether any overlay fade is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.loading.is_animating()
    }

    /// Whether an image has been delivered.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.edited_image.is_some()
    }
}

impl StateObserver for State {
    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut Binding {
        &mut self.binding
    }

    fn did_receive_state(&mut self, changes: &Changes<EditState>) {
        if let Some(is_loading) = changes.take_if_changed(|s| Some(s.is_loading)) {
            self.loading.set_visible(is_loading);
        }

        if let Some(image) =
            changes.take_if_changed(|s| s.loaded.as_ref().map(|l| l.edited_image.clone()))
        {
            log::debug!("preview: edited image set ({}x{})", image.width, image.height);
            self.edited_image = Some(image);
        }

        if let Some(image) =
            changes.take_if_changed(|s| s.loaded.as_ref().map(|l| l.original_image.clone()))
        {
            log::debug!(
                "preview: original image set ({}x{})",
                image.width,
                image.height
            );
            self.original_image = Some(image);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::{bind, EditingStack};
    use image_rs::{DynamicImage, RgbaImage};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    const STEP: Duration = Duration::from_millis(16);

    fn bound_preview() -> (EditingStack, Rc<RefCell<State>>) {
        let mut stack = EditingStack::new(None);
        let preview = Rc::new(RefCell::new(State::new()));
        bind(&mut stack, &preview);
        (stack, preview)
    }

    fn settle(preview: &Rc<RefCell<State>>) {
        for _ in 0..1000 {
            if !preview.borrow().is_animating() {
                return;
            }
            preview.borrow_mut().tick(STEP);
        }
        panic!("preview did not settle");
    }

    #[test]
    fn loading_overlay_follows_the_loading_flag() {
        let (mut stack, preview) = bound_preview();

        stack.start();
        assert!(preview.borrow().loading().is_attached());

        stack.finish_loading(DynamicImage::ImageRgba8(RgbaImage::new(4, 4)));
        settle(&preview);
        assert!(!preview.borrow().loading().is_attached());
    }

    #[test]
    fn images_arrive_via_the_binding() {
        let (mut stack, preview) = bound_preview();

        assert!(!preview.borrow().has_image());
        stack.start();
        stack.finish_loading(DynamicImage::ImageRgba8(RgbaImage::new(4, 4)));

        let state = preview.borrow();
        assert!(state.has_image());
        assert!(state.displayed_image().is_some());
    }

    #[test]
    fn press_lifecycle_returns_to_default() {
        let (mut stack, preview) = bound_preview();
        stack.start();
        stack.finish_loading(DynamicImage::ImageRgba8(RgbaImage::new(4, 4)));

        let mut state = preview.borrow_mut();
        state.update(Message::PressBegan);
        state.update(Message::PressBegan);
        assert!(state.is_comparing());

        state.update(Message::PressEnded);
        assert!(!state.is_comparing());
    }

    #[test]
    fn cancelled_press_restores_the_edited_image() {
        let (_stack, preview) = bound_preview();
        let mut state = preview.borrow_mut();

        state.update(Message::PressBegan);
        state.update(Message::PressCancelled);
        assert!(!state.is_comparing());
    }

    #[test]
    fn unchanged_render_does_not_redeliver() {
        let (mut stack, preview) = bound_preview();
        stack.start();
        stack.finish_loading(DynamicImage::ImageRgba8(RgbaImage::new(4, 4)));
        let first = preview.borrow().edited_image.clone().unwrap();

        // A snapshot commit publishes nothing; the images keep their buffers.
        stack.take_snapshot();
        let second = preview.borrow().edited_image.clone().unwrap();
        assert_eq!(first, second);
    }
}
