// SPDX-License-Identifier: MPL-2.0
//! The editing stack: an observable store of editing state.
//!
//! The stack owns the source image, the current edit, and a history of
//! committed edits. Every mutation produces a fresh immutable [`EditState`]
//! snapshot and publishes a [`Changes`] pair to registered sinks. Sinks are
//! expected to gate on individual fields via [`Changes::take_if_changed`],
//! so the stack is free to publish on any mutation without flooding
//! observers.
//!
//! Decoding runs off the UI loop: [`EditingStack::start`] only flips
//! `is_loading`; the caller decodes and downscales in the background and
//! hands the result to [`EditingStack::finish_loading`].

use crate::domain::editing::{Edit, FilterSet};
use crate::media::render;
use crate::media::ImageData;
use image_rs::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod binding;
mod changes;
mod state;

pub use binding::{bind, unbind, Binding, SinkId, SinkStatus, StateObserver, StateSink};
pub use changes::Changes;
pub use state::{EditState, LoadedState};

/// Observable store of editing state. See the module docs.
pub struct EditingStack {
    source: Option<PathBuf>,
    state: Arc<EditState>,
    current_edit: Edit,
    history: Vec<Edit>,
    working_preview: Option<DynamicImage>,
    sinks: Vec<(SinkId, StateSink)>,
    next_sink: u64,
    started: bool,
}

impl std::fmt::Debug for EditingStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditingStack")
            .field("source", &self.source)
            .field("state", &self.state)
            .field("history_len", &self.history.len())
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

impl EditingStack {
    /// Creates a stack for the given source path (if any).
    #[must_use]
    pub fn new(source: Option<PathBuf>) -> Self {
        Self {
            source,
            state: Arc::new(EditState::default()),
            current_edit: Edit::default(),
            history: Vec::new(),
            working_preview: None,
            sinks: Vec::new(),
            next_sink: 0,
            started: false,
        }
    }

    /// The source image path, if the stack has one.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The current state snapshot.
    #[must_use]
    pub fn state(&self) -> &Arc<EditState> {
        &self.state
    }

    /// Number of committed edits in the history.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Begins loading. Returns true on the first call, when the caller
    /// should kick off background decoding; repeated calls are no-ops and
    /// never re-publish already-seen state.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.commit(EditState::loading());
        true
    }

    /// Installs the decoded, downscaled working image and publishes the
    /// loaded state.
    pub fn finish_loading(&mut self, working: DynamicImage) {
        let edited = render::render_edit(&working, &self.current_edit);
        let loaded = LoadedState {
            edited_image: ImageData::from_dynamic(&edited),
            original_image: ImageData::from_dynamic(&working),
            current_edit: self.current_edit.clone(),
        };
        self.working_preview = Some(working);
        self.commit(EditState {
            is_loading: false,
            loaded: Some(loaded),
        });
    }

    /// Records that loading failed: the loading flag clears and the loaded
    /// sub-state stays absent.
    pub fn fail_loading(&mut self) {
        self.commit(EditState {
            is_loading: false,
            loaded: self.state.loaded.clone(),
        });
    }

    /// Mutates the filter set, re-renders the edited preview, and publishes.
    pub fn set_filters(&mut self, mutate: impl FnOnce(&mut FilterSet)) {
        mutate(&mut self.current_edit.filters);
        log::debug!("filters updated: {:?}", self.current_edit.filters);
        self.republish_edit();
    }

    /// Restores the most recently committed edit, discarding uncommitted
    /// changes.
    pub fn revert(&mut self) {
        self.current_edit = self.history.last().cloned().unwrap_or_default();
        log::debug!("edit reverted to last snapshot");
        self.republish_edit();
    }

    /// Commits the current edit to the history.
    pub fn take_snapshot(&mut self) {
        self.history.push(self.current_edit.clone());
        log::debug!("snapshot taken ({} in history)", self.history.len());
    }

    /// Registers a sink and synchronously delivers the buffered snapshot
    /// with no previous state attached.
    ///
    /// Sinks must not call back into the stack. A sink returning
    /// [`SinkStatus::Disposed`] (including on the buffered delivery) is
    /// dropped.
    pub fn sink_state(&mut self, mut sink: StateSink) -> SinkId {
        let id = SinkId(self.next_sink);
        self.next_sink += 1;

        let initial = Changes::initial(self.state.clone());
        if sink(&initial) == SinkStatus::Active {
            self.sinks.push((id, sink));
        }
        id
    }

    /// Removes a sink. Unknown ids are ignored, so removal is idempotent.
    pub fn remove_sink(&mut self, id: SinkId) {
        self.sinks.retain(|(sink_id, _)| *sink_id != id);
    }

    /// Number of live sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Re-renders the edited preview for the current edit and publishes the
    /// resulting state. No-op before loading completes; the pending edit is
    /// rendered by [`EditingStack::finish_loading`] instead.
    fn republish_edit(&mut self) {
        let Some(working) = &self.working_preview else {
            return;
        };
        let Some(loaded) = &self.state.loaded else {
            return;
        };

        let edited = render::render_edit(working, &self.current_edit);
        let loaded = LoadedState {
            edited_image: ImageData::from_dynamic(&edited),
            original_image: loaded.original_image.clone(),
            current_edit: self.current_edit.clone(),
        };
        self.commit(EditState {
            is_loading: self.state.is_loading,
            loaded: Some(loaded),
        });
    }

    /// Swaps in a new snapshot and notifies sinks.
    fn commit(&mut self, new: EditState) {
        let old = std::mem::replace(&mut self.state, Arc::new(new));
        let changes = Changes::transition(old, self.state.clone());
        self.sinks
            .retain_mut(|(_, sink)| sink(&changes) == SinkStatus::Active);
    }
}
