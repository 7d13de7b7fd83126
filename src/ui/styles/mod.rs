// SPDX-License-Identifier: MPL-2.0
//! Reusable widget style functions.

pub mod controls;
pub mod overlay;
