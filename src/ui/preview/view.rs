// SPDX-License-Identifier: MPL-2.0
//! Preview view: stacked image, press area, and loading overlay.

use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{container, mouse_area, text, Stack};
use iced::{ContentFit, Element, Length};

use super::{Message, State};

/// Renders the preview area.
///
/// The press area wraps the image so the comparison toggle follows the
/// pointer's press lifecycle; leaving the area cancels the press. The
/// loading overlay, when attached, is stacked on top and does not affect
/// the press handling underneath.
pub fn render(state: &State) -> Element<'static, Message> {
    let content: Element<'static, Message> = match state.displayed_image() {
        Some(image) => iced::widget::image(image.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(text("Open an image to start editing").size(typography::BODY))
            .center(Length::Fill)
            .into(),
    };

    let press_area = mouse_area(content)
        .on_press(Message::PressBegan)
        .on_release(Message::PressEnded)
        .on_exit(Message::PressCancelled);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(press_area);

    if state.loading().is_attached() {
        let overlay = container(text("Loading…").size(typography::BODY_LG))
            .center(Length::Fill)
            .style(styles::overlay::loading_backdrop(state.loading().alpha()));
        layers = layers.push(overlay);
    }

    layers.into()
}
