// SPDX-License-Identifier: MPL-2.0
//! State snapshots published by the editing stack.

use crate::domain::editing::Edit;
use crate::media::ImageData;

/// One immutable snapshot of the editing stack's observable state.
///
/// The loaded sub-state is absent until the source image has been decoded
/// and rendered; selectors reaching into it skip their observers while it
/// is missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditState {
    /// Whether the source image is currently being loaded and rendered.
    pub is_loading: bool,
    /// Render results and the current edit; present once loading completes.
    pub loaded: Option<LoadedState>,
}

/// The part of the state that only exists after the source has loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedState {
    /// Edited preview, with the current filter set applied.
    pub edited_image: ImageData,
    /// Unfiltered preview, shown while the user holds a press to compare.
    pub original_image: ImageData,
    /// The edit the renders above reflect.
    pub current_edit: Edit,
}

impl EditState {
    /// Snapshot for a stack that has started loading its source.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            loaded: None,
        }
    }
}
