// SPDX-License-Identifier: MPL-2.0
//! Crop-frame decoration geometry.
//!
//! Pure functions from a bounding size to the rectangles of the frame
//! border, the four L-shaped corner marks, and the rule-of-thirds guide
//! lines. Outputs depend only on the size and the constants below; callers
//! recompute on every size change instead of caching.

use iced::{Rectangle, Size};

/// Thickness of the corner mark strokes.
pub const LINE_WIDTH: f32 = 4.0;

/// Length of each corner mark stroke.
pub const LINE_LENGTH: f32 = 24.0;

/// How far the frame border extends beyond the bounds on each side.
pub const BORDER_INSET: f32 = 2.0;

/// Stroke width of the frame border.
pub const BORDER_WIDTH: f32 = 2.0;

/// Thickness of the rule-of-thirds guide lines.
pub const GUIDE_THICKNESS: f32 = 1.0;

/// Frame border plus the eight rectangles forming four corner marks.
///
/// Corner marks sit [`LINE_WIDTH`] outside the bounds so their inner edges
/// overlap the border, reading as one continuous bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleRects {
    /// Border rectangle, expanded by [`BORDER_INSET`] on each side.
    pub border: Rectangle,
    /// Corner strokes: for each of TL, TR, BR, BL, a horizontal then a
    /// vertical rectangle.
    pub corners: [Rectangle; 8],
}

/// Computes the frame border and corner mark rectangles for `size`.
#[must_use]
pub fn handle_rects(size: Size) -> HandleRects {
    let Size { width, height } = size;

    let border = Rectangle {
        x: -BORDER_INSET,
        y: -BORDER_INSET,
        width: width + 2.0 * BORDER_INSET,
        height: height + 2.0 * BORDER_INSET,
    };

    let horizontal = |x: f32, y: f32| Rectangle {
        x,
        y,
        width: LINE_LENGTH,
        height: LINE_WIDTH,
    };
    let vertical = |x: f32, y: f32| Rectangle {
        x,
        y,
        width: LINE_WIDTH,
        height: LINE_LENGTH,
    };

    let corners = [
        // Top-left
        horizontal(-LINE_WIDTH, -LINE_WIDTH),
        vertical(-LINE_WIDTH, -LINE_WIDTH),
        // Top-right
        horizontal(width - LINE_LENGTH + LINE_WIDTH, -LINE_WIDTH),
        vertical(width, -LINE_WIDTH),
        // Bottom-right
        horizontal(width - LINE_LENGTH + LINE_WIDTH, height),
        vertical(width, height - LINE_LENGTH + LINE_WIDTH),
        // Bottom-left
        horizontal(-LINE_WIDTH, height),
        vertical(-LINE_WIDTH, height - LINE_LENGTH + LINE_WIDTH),
    ];

    HandleRects { border, corners }
}

/// Computes the rule-of-thirds guide rectangles for `size`.
///
/// Two vertical lines at `floor(width / 3)` and `floor(width / 3) * 2`, then
/// two horizontal lines at the same fractions of the height.
#[must_use]
pub fn third_guides(size: Size) -> [Rectangle; 4] {
    let third_w = (size.width / 3.0).floor();
    let third_h = (size.height / 3.0).floor();

    [
        Rectangle {
            x: third_w,
            y: 0.0,
            width: GUIDE_THICKNESS,
            height: size.height,
        },
        Rectangle {
            x: third_w * 2.0,
            y: 0.0,
            width: GUIDE_THICKNESS,
            height: size.height,
        },
        Rectangle {
            x: 0.0,
            y: third_h,
            width: size.width,
            height: GUIDE_THICKNESS,
        },
        Rectangle {
            x: 0.0,
            y: third_h * 2.0,
            width: size.width,
            height: GUIDE_THICKNESS,
        },
    ]
}
