// SPDX-License-Identifier: MPL-2.0
//! Image loading and conversion into displayable pixel data.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::DynamicImage;
use std::path::Path;
use std::sync::Arc;

pub mod render;

/// Decoded image pixels plus the Iced handle used to display them.
///
/// The RGBA bytes are shared behind an `Arc` so snapshots containing the same
/// render stay cheap to clone. Equality compares dimensions and buffer
/// identity, which is what change detection needs: a re-render always
/// allocates a fresh buffer.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Creates a new `ImageData` from a decoded image.
    #[must_use]
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(width, height, rgba.into_raw())
    }

    /// Returns a reference to the RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

impl PartialEq for ImageData {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && Arc::ptr_eq(&self.rgba_bytes, &other.rgba_bytes)
    }
}

/// Decodes an image file from disk.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image_rs::open(path).map_err(|err| match err {
        image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
        other => Error::Image(other.to_string()),
    })
}
