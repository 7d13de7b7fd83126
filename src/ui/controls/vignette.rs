// SPDX-License-Identifier: MPL-2.0
//! Vignette filter control: a slider bound to the editing stack.
//!
//! The slider position maps onto the vignette range in Plus mode. Dragging
//! emits a set-filter intent; the resulting state change echoes back through
//! the binding, which keeps the slider in sync even when the parameter
//! changes for other reasons (revert, a fresh snapshot, another control).
//!
//! Moving the slider to the neutral value clears the parameter instead of
//! storing a zero-valued one; that normalization lives in
//! [`FilterSet::set_vignette`], which the application applies on
//! [`Event::SetVignette`].
//!
//! [`FilterSet::set_vignette`]: crate::domain::editing::FilterSet::set_vignette

use crate::domain::editing::vignette_bounds;
use crate::stack::{Binding, Changes, EditState, StateObserver};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, slider, text, Column, Row};
use iced::{Element, Length};

use super::step_slider::{self, ParameterRange, SliderMode};

/// Vignette parameter range.
pub const RANGE: ParameterRange = ParameterRange::new(vignette_bounds::MIN, vignette_bounds::MAX);

const MODE: SliderMode = SliderMode::Plus;

/// Vignette control state.
#[derive(Debug, Default)]
pub struct State {
    position: f32,
    binding: Binding,
}

/// Messages emitted by the control's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Slider dragged to a new normalized position.
    SliderMoved(f32),
    /// Discard the in-progress edit.
    Cancel,
    /// Keep the edit.
    Done,
}

/// Intents propagated to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Set the vignette parameter (neutral clears it).
    SetVignette(f32),
    /// Revert to the last committed edit and close the control.
    Cancelled,
    /// Commit the current edit and close the control.
    Committed,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the control and emit the intent for the application.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SliderMoved(position) => {
                self.position = position.clamp(0.0, 1.0);
                Event::SetVignette(step_slider::position_to_value(self.position, RANGE, MODE))
            }
            Message::Cancel => Event::Cancelled,
            Message::Done => Event::Committed,
        }
    }

    /// Current normalized slider position.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Current parameter value the slider represents.
    #[must_use]
    pub fn value(&self) -> f32 {
        step_slider::position_to_value(self.position, RANGE, MODE)
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
        if let Some(vignette) =
            changes.take_if_changed(|s| s.loaded.as_ref().map(|l| l.current_edit.filters.vignette))
        {
            let value = vignette.map_or(vignette_bounds::NEUTRAL, |v| v.value());
            self.position = step_slider::value_to_position(value, RANGE, MODE);
        }
    }
}

/// Renders the control panel: label, slider, value, and cancel/done actions.
pub fn panel(state: &State) -> Element<'static, Message> {
    let header = Row::new()
        .width(Length::Fill)
        .push(text("Vignette").size(typography::BODY))
        .push(iced::widget::space::horizontal())
        .push(text(format!("{:.2}", state.value())).size(typography::BODY_SM));

    let track = slider(0.0..=1.0, state.position(), Message::SliderMoved).step(0.01);

    let cancel = button(text("Cancel").size(typography::BODY))
        .padding(spacing::SM)
        .width(Length::Fill)
        .on_press(Message::Cancel);
    let done = button(text("Done").size(typography::BODY))
        .padding(spacing::SM)
        .width(Length::Fill)
        .on_press(Message::Done);

    let actions = Row::new().spacing(spacing::XS).push(cancel).push(done);

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(track)
            .push(actions),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::controls::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::EditingStack;
    use image_rs::{DynamicImage, RgbaImage};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn loaded_stack() -> EditingStack {
        let mut stack = EditingStack::new(None);
        stack.start();
        stack.finish_loading(DynamicImage::ImageRgba8(RgbaImage::new(8, 8)));
        stack
    }

    #[test]
    fn slider_move_emits_mapped_value() {
        let mut state = State::new();
        let event = state.update(Message::SliderMoved(0.5));
        assert_eq!(event, Event::SetVignette(1.0));
    }

    #[test]
    fn slider_at_left_edge_emits_neutral() {
        let mut state = State::new();
        let event = state.update(Message::SliderMoved(0.0));
        match event {
            Event::SetVignette(value) => assert!(value.abs() < f32::EPSILON),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn cancel_and_done_emit_their_intents() {
        let mut state = State::new();
        assert_eq!(state.update(Message::Cancel), Event::Cancelled);
        assert_eq!(state.update(Message::Done), Event::Committed);
    }

    #[test]
    fn binding_echoes_parameter_into_position() {
        let mut stack = loaded_stack();
        let control = Rc::new(RefCell::new(State::new()));
        crate::stack::bind(&mut stack, &control);

        stack.set_filters(|f| f.set_vignette(1.0));
        assert!((control.borrow().position() - 0.5).abs() < 1e-5);

        // Clearing the parameter snaps the slider back to neutral.
        stack.set_filters(|f| f.set_vignette(0.0));
        assert!(control.borrow().position().abs() < 1e-5);
    }

    #[test]
    fn binding_skips_while_not_loaded() {
        let mut stack = EditingStack::new(None);
        let control = Rc::new(RefCell::new(State::new()));
        crate::stack::bind(&mut stack, &control);

        stack.start();
        // No loaded state yet: the selector path is absent, position holds.
        assert!(control.borrow().position().abs() < f32::EPSILON);
    }
}
