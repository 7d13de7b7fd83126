// SPDX-License-Identifier: MPL-2.0
//! Canvas renderer for the crop-frame overlay.

use crate::ui::styles;

use super::{geometry, Message};

/// Canvas program drawing the frame decorations and forwarding pointer
/// transitions as adjustment messages.
pub struct CropFrameRenderer {
    /// Current opacity of the rule-of-thirds guides.
    pub guide_alpha: f32,
}

impl iced::widget::canvas::Program<Message> for CropFrameRenderer {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                if cursor.position_in(bounds).is_some() {
                    return Some(Action::publish(Message::AdjustmentBegan).and_capture());
                }
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)) => {
                return Some(Action::publish(Message::AdjustmentEnded).and_capture());
            }
            // Leaving the canvas cancels the adjustment like a release.
            iced::Event::Mouse(iced::mouse::Event::CursorLeft) => {
                return Some(Action::publish(Message::AdjustmentEnded).and_capture());
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<iced::widget::canvas::Geometry> {
        use iced::widget::canvas::{Frame, Path, Stroke};

        let mut frame = Frame::new(renderer, bounds.size());
        let frame_color = styles::overlay::frame_color();

        let rects = geometry::handle_rects(bounds.size());

        let border = Path::rectangle(
            iced::Point::new(rects.border.x, rects.border.y),
            iced::Size::new(rects.border.width, rects.border.height),
        );
        frame.stroke(
            &border,
            Stroke::default()
                .with_width(geometry::BORDER_WIDTH)
                .with_color(frame_color),
        );

        for rect in rects.corners {
            frame.fill_rectangle(
                iced::Point::new(rect.x, rect.y),
                iced::Size::new(rect.width, rect.height),
                frame_color,
            );
        }

        if self.guide_alpha > 0.0 {
            let guide_color = styles::overlay::guide_color(self.guide_alpha);
            for guide in geometry::third_guides(bounds.size()) {
                frame.fill_rectangle(
                    iced::Point::new(guide.x, guide.y),
                    iced::Size::new(guide.width, guide.height),
                    guide_color,
                );
            }
        }

        vec![frame.into_geometry()]
    }
}
