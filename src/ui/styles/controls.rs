// SPDX-License-Identifier: MPL-2.0
//! Styles for the filter control panel.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Background panel behind the filter slider and its buttons.
#[must_use]
pub fn panel(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    let background = if is_light {
        Color {
            a: opacity::SURFACE,
            ..palette::GRAY_200
        }
    } else {
        Color {
            a: opacity::SURFACE,
            ..palette::GRAY_900
        }
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: Color {
                a: 0.2,
                ..palette::GRAY_700
            },
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}
