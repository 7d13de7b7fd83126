// SPDX-License-Identifier: MPL-2.0
//! Sink plumbing between the editing stack and view components.
//!
//! Components live behind `Rc<RefCell<_>>` so the stack can deliver state
//! changes to them without owning them. The sink holds only a weak
//! reference: once the component is dropped, the next delivery disposes the
//! sink instead of firing into a dead target.
//!
//! [`bind`] and [`unbind`] are both idempotent. Repeated attach events (the
//! moral equivalent of a view being re-added to a window) must not stack up
//! duplicate sinks, and a released binding must never fire again.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Changes, EditState, EditingStack};

/// Whether a sink should stay registered after a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkStatus {
    Active,
    Disposed,
}

/// A registered state sink. Must not call back into the stack.
pub type StateSink = Box<dyn FnMut(&Changes<EditState>) -> SinkStatus>;

/// Identifier of a registered sink, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkId(pub(super) u64);

/// Tracks whether a component's sink is installed.
///
/// Owned by the component itself, so the install guard travels with the
/// component rather than with the caller that happened to bind it.
#[derive(Debug, Default)]
pub struct Binding {
    sink: Option<SinkId>,
}

impl Binding {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a sink is currently installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.sink.is_some()
    }

    fn attach(&mut self, id: SinkId) {
        self.sink = Some(id);
    }

    fn detach(&mut self) -> Option<SinkId> {
        self.sink.take()
    }
}

/// A component that observes editing-stack state.
pub trait StateObserver {
    /// Accessor for the component's binding slot.
    fn binding(&self) -> &Binding;

    /// Mutable accessor for the component's binding slot.
    fn binding_mut(&mut self) -> &mut Binding;

    /// Called for every state delivery; extraction is equality-gated via
    /// [`Changes::take_if_changed`].
    fn did_receive_state(&mut self, changes: &Changes<EditState>);
}

/// Installs `target` as a sink on `stack`. No-op when already installed.
///
/// The buffered snapshot is delivered synchronously during installation,
/// with no previous snapshot, so the component observes current state
/// immediately without a spurious change on the next publish.
pub fn bind<T>(stack: &mut EditingStack, target: &Rc<RefCell<T>>)
where
    T: StateObserver + 'static,
{
    if target.borrow().binding().is_installed() {
        return;
    }

    let weak = Rc::downgrade(target);
    let sink: StateSink = Box::new(move |changes| match weak.upgrade() {
        Some(strong) => {
            strong.borrow_mut().did_receive_state(changes);
            SinkStatus::Active
        }
        None => SinkStatus::Disposed,
    });

    let id = stack.sink_state(sink);
    target.borrow_mut().binding_mut().attach(id);
}

/// Removes `target`'s sink from `stack`. No-op when not installed.
pub fn unbind<T>(stack: &mut EditingStack, target: &Rc<RefCell<T>>)
where
    T: StateObserver,
{
    if let Some(id) = target.borrow_mut().binding_mut().detach() {
        stack.remove_sink(id);
    }
}
