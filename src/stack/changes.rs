// SPDX-License-Identifier: MPL-2.0
//! Snapshot pairs with equality-gated field extraction.
//!
//! A [`Changes`] value carries the previous and current state snapshots.
//! Observers do not compare whole snapshots; they extract the one field they
//! care about through a selector and only react when that field's value
//! actually differs. A selector returning `None` means the field's path is
//! currently absent (for example, nested state that only exists after
//! loading) and the observer is skipped for that delivery.

use std::sync::Arc;

/// A pair of state snapshots delivered to sinks on every mutation.
///
/// `old` is `None` exactly once per sink: for the buffered snapshot delivered
/// at registration. Every extraction then sees a "first observed value".
#[derive(Debug, Clone)]
pub struct Changes<S> {
    old: Option<Arc<S>>,
    new: Arc<S>,
}

impl<S> Changes<S> {
    /// The buffered snapshot delivered at sink registration.
    #[must_use]
    pub fn initial(new: Arc<S>) -> Self {
        Self { old: None, new }
    }

    /// A transition from `old` to `new`.
    #[must_use]
    pub fn transition(old: Arc<S>, new: Arc<S>) -> Self {
        Self {
            old: Some(old),
            new,
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.new
    }

    /// Returns whether this is the first delivery (no previous snapshot).
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.old.is_none()
    }

    /// Extracts a field and returns it only if it changed.
    ///
    /// Returns `None` when the selected path is absent in the current
    /// snapshot, or when the extracted value equals the previously extracted
    /// one. A path that was absent before and is present now counts as a
    /// change, as does the first delivery.
    pub fn take_if_changed<T, F>(&self, select: F) -> Option<T>
    where
        T: PartialEq,
        F: Fn(&S) -> Option<T>,
    {
        let new_value = select(&self.new)?;
        match &self.old {
            None => Some(new_value),
            Some(old) => {
                if select(old).as_ref() == Some(&new_value) {
                    None
                } else {
                    Some(new_value)
                }
            }
        }
    }

    /// Runs `handler` with the extracted field when it changed.
    pub fn if_changed<T, F, H>(&self, select: F, handler: H)
    where
        T: PartialEq,
        F: Fn(&S) -> Option<T>,
        H: FnOnce(T),
    {
        if let Some(value) = self.take_if_changed(select) {
            handler(value);
        }
    }
}
