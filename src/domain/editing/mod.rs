// SPDX-License-Identifier: MPL-2.0
//! Value types describing an edit in progress.
//!
//! An [`Edit`] is the pure, image-free description of what the user has done:
//! the set of filter parameters currently applied. The editing stack keeps the
//! current edit plus a history of committed edits; the UI only ever reads
//! these values out of state snapshots.

mod newtypes;

pub use newtypes::{vignette_bounds, VignetteIntensity};

/// The set of filter parameters applied to the image.
///
/// A parameter being present implies a non-default effect; neutral values are
/// stored as absent (see [`FilterSet::set_vignette`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSet {
    /// Vignette darkening, absent when neutral.
    pub vignette: Option<VignetteIntensity>,
}

impl FilterSet {
    /// Sets the vignette parameter, normalizing neutral values to absent.
    pub fn set_vignette(&mut self, value: f32) {
        let intensity = VignetteIntensity::new(value);
        self.vignette = if intensity.is_neutral() {
            None
        } else {
            Some(intensity)
        };
    }

    /// Returns true if any filter parameter is present.
    #[must_use]
    pub fn has_effects(&self) -> bool {
        self.vignette.is_some()
    }
}

/// One edit: everything needed to re-render the preview from the source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Edit {
    /// Filter parameters for this edit.
    pub filters: FilterSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_vignette_stores_non_neutral_values() {
        let mut filters = FilterSet::default();
        filters.set_vignette(0.3);

        let vignette = filters.vignette.expect("vignette should be present");
        assert!((vignette.value() - 0.3).abs() < f32::EPSILON);
        assert!(filters.has_effects());
    }

    #[test]
    fn set_vignette_clears_on_neutral() {
        let mut filters = FilterSet::default();
        filters.set_vignette(0.8);
        assert!(filters.vignette.is_some());

        filters.set_vignette(0.0);
        assert!(filters.vignette.is_none());
        assert!(!filters.has_effects());
    }

    #[test]
    fn set_vignette_clamps_before_storing() {
        let mut filters = FilterSet::default();
        filters.set_vignette(9.0);

        let vignette = filters.vignette.expect("vignette should be present");
        assert!(vignette.is_max());
    }

    #[test]
    fn default_edit_has_no_effects() {
        let edit = Edit::default();
        assert!(!edit.filters.has_effects());
    }
}
