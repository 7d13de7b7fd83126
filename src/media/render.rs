// SPDX-License-Identifier: MPL-2.0
//! Preview rendering: downscaling and filter application.
//!
//! All functions are pure `DynamicImage -> DynamicImage` transforms. The
//! editing stack keeps a downscaled working copy of the source and re-renders
//! it through [`render_edit`] whenever the filter set changes.

use crate::domain::editing::Edit;
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Downscales the source so its longest edge is at most `max_edge` pixels.
///
/// Images already within bounds are returned unchanged; aspect ratio is
/// always preserved.
#[must_use]
pub fn downscale_for_preview(image: &DynamicImage, max_edge: u32) -> DynamicImage {
    let (width, height) = image.dimensions();
    if width.max(height) <= max_edge {
        return image.clone();
    }
    image.resize(max_edge, max_edge, FilterType::Triangle)
}

/// Applies a radial vignette darkening to the image.
///
/// `intensity` 0 is the identity; larger values darken the corners more
/// strongly. The falloff is quadratic in the normalized distance from the
/// image center.
#[must_use]
pub fn apply_vignette(image: &DynamicImage, intensity: f32) -> DynamicImage {
    if intensity <= 0.0 {
        return image.clone();
    }

    let (width, height) = image.dimensions();
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    // Normalize against the corner distance so the falloff is aspect-aware.
    let max_dist_sq = center_x * center_x + center_y * center_y;

    let rgba = image.to_rgba8();
    let mut out = RgbaImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let dx = x as f32 + 0.5 - center_x;
        let dy = y as f32 + 0.5 - center_y;
        let dist_sq = (dx * dx + dy * dy) / max_dist_sq;
        let factor = (1.0 - intensity * dist_sq * 0.5).clamp(0.0, 1.0);

        let Rgba([r, g, b, a]) = *pixel;
        out.put_pixel(
            x,
            y,
            Rgba([
                (f32::from(r) * factor) as u8,
                (f32::from(g) * factor) as u8,
                (f32::from(b) * factor) as u8,
                a,
            ]),
        );
    }
    DynamicImage::ImageRgba8(out)
}

/// Renders an edit against the working preview image.
#[must_use]
pub fn render_edit(working: &DynamicImage, edit: &Edit) -> DynamicImage {
    match edit.filters.vignette {
        Some(intensity) => apply_vignette(working, intensity.value()),
        None => working.clone(),
    }
}
