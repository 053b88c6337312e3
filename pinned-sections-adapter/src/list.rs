use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use pinned_sections::{
    Canvas, ChangeObserver, ConfigError, ListLayout, PinnedSnapshot, PinningController,
    PinningOptions, ScrollWindow, SectionAdapter, validate_adapter,
};

use crate::{PendingReconcile, ScrollObserver, ScrollState};

/// A framework-neutral pinned-section list that wraps a `pinned_sections::PinningController`
/// and wires it to a data source and a host list view.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `set_adapter` when the data source is attached, swapped or detached
/// - `on_scroll` / `on_scroll_state_changed` for every scroll event
/// - `dispatch_draw` after the list has drawn its own rows
/// - `on_restore_instance_state` and then `on_idle` at the next idle point
pub struct PinnedSectionList<A: SectionAdapter> {
    adapter: Option<A>,
    controller: PinningController<A::View>,
    observer: ChangeObserver,
    delegate: Option<Box<dyn ScrollObserver>>,
    reconcile: PendingReconcile,
}

impl<A: SectionAdapter> Default for PinnedSectionList<A> {
    fn default() -> Self {
        Self::new(PinningOptions::default())
    }
}

impl<A: SectionAdapter> fmt::Debug for PinnedSectionList<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinnedSectionList")
            .field("attached", &self.adapter.is_some())
            .field("controller", &self.controller)
            .field("observer", &self.observer)
            .field("delegate", &self.delegate.is_some())
            .field("reconcile", &self.reconcile)
            .finish()
    }
}

impl<A: SectionAdapter> PinnedSectionList<A> {
    pub fn new(options: PinningOptions) -> Self {
        Self {
            adapter: None,
            controller: PinningController::new(options),
            observer: ChangeObserver::new(),
            delegate: None,
            reconcile: PendingReconcile::default(),
        }
    }

    pub fn adapter(&self) -> Option<&A> {
        self.adapter.as_ref()
    }

    pub fn adapter_mut(&mut self) -> Option<&mut A> {
        self.adapter.as_mut()
    }

    /// The underlying controller, as of the last drained change notification.
    ///
    /// Unlike [`PinnedSectionList::pinned_len`] and friends, it still shows pins that a pending
    /// notification will drop on the next `on_scroll`, `on_idle` or `dispatch_draw`.
    pub fn controller(&self) -> &PinningController<A::View> {
        &self.controller
    }

    /// Attaches `adapter` (or detaches with `None`) and returns the previous one.
    ///
    /// With `PinningOptions::strict`, a misconfigured adapter is rejected and nothing changes.
    /// Otherwise the change observer moves to the new adapter and every pinned section is
    /// dropped.
    pub fn set_adapter(&mut self, adapter: Option<A>) -> Result<Option<A>, ConfigError> {
        if let Some(next) = adapter.as_ref().filter(|_| self.controller.options().strict) {
            validate_adapter(next)?;
        }

        let mut previous = self.adapter.take();
        if let Some(previous) = previous.as_mut() {
            previous.unregister_observer(&self.observer);
        }
        // Notifications from the old adapter are moot once it is gone.
        self.observer.take_notification();

        self.adapter = adapter;
        if let Some(adapter) = self.adapter.as_mut() {
            adapter.register_observer(self.observer.clone());
        }

        if self.controller.clear() > 0 {
            ldebug!(attached = self.adapter.is_some(), "adapter changed, pins dropped");
        }
        Ok(previous)
    }

    /// Installs the external scroll observer and returns the one it replaces.
    ///
    /// There is a single delegate slot; pinning itself is always driven internally.
    pub fn set_scroll_observer(
        &mut self,
        observer: Option<Box<dyn ScrollObserver>>,
    ) -> Option<Box<dyn ScrollObserver>> {
        core::mem::replace(&mut self.delegate, observer)
    }

    pub fn has_scroll_observer(&self) -> bool {
        self.delegate.is_some()
    }

    /// Handles a scroll notification from the host list view.
    pub fn on_scroll<L: ListLayout + ?Sized>(&mut self, list: &L, window: ScrollWindow) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.on_scroll(window);
        }
        self.sync_changes();

        let Some(adapter) = self.adapter.as_ref() else {
            return;
        };
        ltrace!(
            first_visible = window.first_visible,
            visible_count = window.visible_count,
            total_count = window.total_count,
            "on_scroll"
        );
        self.controller.on_scroll(adapter, list, window);
    }

    pub fn on_scroll_state_changed(&mut self, state: ScrollState) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.on_scroll_state_changed(state);
        }
    }

    /// The host restored saved scroll state; pinned sections are rebuilt at the next idle
    /// point with an attached adapter.
    pub fn on_restore_instance_state(&mut self) {
        ldebug!("scheduling pinned section reconciliation");
        self.reconcile.schedule();
    }

    pub fn is_reconcile_pending(&self) -> bool {
        self.reconcile.is_armed()
    }

    /// Runs deferred work. Returns `true` if pinned state was reconciled.
    pub fn on_idle<L: ListLayout + ?Sized>(&mut self, list: &L) -> bool {
        self.sync_changes();
        if !self.reconcile.take_if_attached(self.adapter.is_some()) {
            return false;
        }
        let Some(adapter) = self.adapter.as_ref() else {
            return false;
        };
        self.controller.reconcile(adapter, list);
        ldebug!(
            pinned = self.controller.pinned_len(),
            "reconciled pinned sections"
        );
        true
    }

    /// Draws pinned sections on top of the rows the host has just drawn.
    pub fn dispatch_draw<L, C>(&mut self, list: &L, canvas: &mut C)
    where
        L: ListLayout + ?Sized,
        C: Canvas<A::View> + ?Sized,
    {
        self.sync_changes();
        self.controller.draw(&list.geometry(), canvas);
    }

    /// Number of pinned sections. Pending change notifications count as already applied.
    pub fn pinned_len(&self) -> usize {
        if self.observer.has_pending() {
            return 0;
        }
        self.controller.pinned_len()
    }

    pub fn pinned_positions(&self) -> Vec<usize> {
        if self.observer.has_pending() {
            return Vec::new();
        }
        self.controller.pinned().positions().collect()
    }

    pub fn snapshot(&self) -> PinnedSnapshot {
        if self.observer.has_pending() {
            return PinnedSnapshot::default();
        }
        self.controller.snapshot()
    }

    fn sync_changes(&mut self) {
        if self.observer.take_notification() && self.controller.clear() > 0 {
            ldebug!("adapter content changed, pins dropped");
        }
    }
}
