// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! Single source of truth for colors, opacity levels, spacing, and type
//! sizes used across the UI.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Rule-of-thirds guide lines over the image.
    pub const GUIDE: f32 = 0.3;
    /// Loading overlay backdrop.
    pub const OVERLAY_BACKDROP: f32 = 0.55;
    /// Control panel backgrounds.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const BODY_SM: f32 = 13.0;
    pub const BODY: f32 = 15.0;
    pub const BODY_LG: f32 = 17.0;
    pub const TITLE: f32 = 20.0;
}
