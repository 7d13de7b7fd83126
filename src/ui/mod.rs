// SPDX-License-Identifier: MPL-2.0
//! UI components: preview, overlay decorations, and filter controls.

pub mod controls;
pub mod design_tokens;
pub mod overlay;
pub mod preview;
pub mod styles;
