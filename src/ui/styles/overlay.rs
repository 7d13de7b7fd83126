// SPDX-License-Identifier: MPL-2.0
//! Styles for transient overlays (loading backdrop, crop-frame colors).

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Backdrop style for the loading overlay at the given fade alpha.
///
/// The fade alpha scales the backdrop's own translucency so the overlay can
/// animate in and out without a separate compositing layer.
pub fn loading_backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_BACKDROP * alpha,
            ..BLACK
        })),
        text_color: Some(Color { a: alpha, ..WHITE }),
        ..Default::default()
    }
}

/// Color of the crop-frame border and corner handles.
#[must_use]
pub fn frame_color() -> Color {
    WHITE
}

/// Color of the rule-of-thirds guide lines at the given fade alpha.
#[must_use]
pub fn guide_color(alpha: f32) -> Color {
    Color {
        a: opacity::GUIDE * alpha,
        ..WHITE
    }
}
