// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::controls::vignette;
use crate::ui::overlay;
use crate::ui::preview;
use std::time::Instant;

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Path of the image to edit.
    pub file_path: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Preview(preview::Message),
    Vignette(vignette::Message),
    CropFrame(overlay::Message),
    /// Open the vignette control panel.
    OpenVignette,
    /// The source image finished decoding and downscaling.
    SourceLoaded(Result<Box<image_rs::DynamicImage>, Error>),
    /// Periodic animation tick.
    Tick(Instant),
}
