// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: header, preview viewport, and the control panel.

use super::{App, Message};
use crate::ui::controls::vignette;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::overlay::CropFrameRenderer;
use crate::ui::preview;
use iced::widget::{button, container, text, Column, Row, Stack};
use iced::{Element, Length};

pub(crate) fn render(app: &App) -> Element<'_, Message> {
    let has_image = app.stack.state().loaded.is_some();

    let edit_button = button(text("Vignette").size(typography::BODY))
        .padding(spacing::XS)
        .on_press_maybe((has_image && !app.vignette_open).then_some(Message::OpenVignette));

    let header = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(iced::Alignment::Center)
        .push(text("Penumbra").size(typography::TITLE))
        .push(iced::widget::space::horizontal())
        .push(edit_button);

    let preview_layer = preview::render(&app.preview.borrow()).map(Message::Preview);

    let mut viewport = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(preview_layer);

    // The crop frame decorates the viewport while no control is open; its
    // canvas owns the pointer there, so it stays out of the way of the
    // press-to-compare area during filter editing.
    if has_image && !app.vignette_open {
        let crop: Element<'_, crate::ui::overlay::Message> =
            iced::widget::canvas(CropFrameRenderer {
                guide_alpha: app.crop_frame.guide_alpha(),
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
        viewport = viewport.push(crop.map(Message::CropFrame));
    }

    let mut content = Column::new()
        .push(header)
        .push(container(viewport).padding(spacing::LG).center(Length::Fill));

    if app.vignette_open {
        content = content.push(
            container(vignette::panel(&app.vignette.borrow()).map(Message::Vignette))
                .padding(spacing::MD)
                .width(Length::Fill),
        );
    }

    content.into()
}
