// SPDX-License-Identifier: MPL-2.0
//! `penumbra` is a small photo-editing preview built with the Iced GUI
//! framework.
//!
//! It shows the edited image with press-to-compare against the original,
//! a crop frame with fading rule-of-thirds guides, and a vignette control
//! bound to an observable editing stack.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod stack;
pub mod ui;
