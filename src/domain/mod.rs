// SPDX-License-Identifier: MPL-2.0
//! Pure domain types, free of UI-toolkit and I/O concerns.

pub mod editing;
