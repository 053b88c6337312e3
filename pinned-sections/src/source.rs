use alloc::sync::Arc;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::{Constraint, HeaderClassifier, Size, ViewType};

/// The data source behind a pinned-section list.
///
/// The engine only ever reads from the adapter: item count, per-item view type, and rendered
/// views for rows it decides to pin. Pinnable view types are declared through
/// [`SectionAdapter::classifier`].
pub trait SectionAdapter {
    type View: PinnedView;

    fn count(&self) -> usize;

    fn item_view_type(&self, position: usize) -> ViewType;

    /// Number of distinct view types this adapter produces. Must be at least 2 (rows and
    /// section headers).
    fn view_type_count(&self) -> usize;

    /// Renders the item at `position`.
    ///
    /// `reuse` is a previously rendered view of the same position that the adapter may recycle.
    fn view(&self, position: usize, reuse: Option<Self::View>) -> Self::View;

    /// Declares which view types are pinned. `None` means the adapter does not support
    /// pinning at all.
    fn classifier(&self) -> Option<&dyn HeaderClassifier>;

    /// Optional fast position → section → section start lookup.
    fn section_indexer(&self) -> Option<&dyn SectionIndexer> {
        None
    }

    fn register_observer(&mut self, observer: ChangeObserver) {
        let _ = observer;
    }

    fn unregister_observer(&mut self, observer: &ChangeObserver) {
        let _ = observer;
    }
}

/// Maps positions to logical sections and back.
///
/// Results are treated as hints: a position returned by [`SectionIndexer::position_for_section`]
/// is only trusted if it is actually a pinned view type.
pub trait SectionIndexer {
    fn section_for_position(&self, position: usize) -> usize;

    fn position_for_section(&self, section: usize) -> usize;
}

/// A rendered row that can be measured once and drawn as a pinned shadow.
pub trait PinnedView {
    /// The row's own height preference, if it has one.
    fn height_intent(&self) -> Option<Constraint> {
        None
    }

    /// Measures the view against the given constraints and returns its final size.
    fn measure(&mut self, width: Constraint, height: Constraint) -> Size;
}

/// A handle the adapter uses to report that its content changed or became invalid.
///
/// Cloning is cheap; all clones share the same pending state. The owner of the pinned list
/// drains notifications with [`ChangeObserver::take_notification`].
#[derive(Clone, Default)]
pub struct ChangeObserver {
    pending: Arc<AtomicUsize>,
}

impl ChangeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The adapter's content changed (items added, removed, or updated).
    pub fn notify_changed(&self) {
        self.pending.fetch_add(1, Ordering::AcqRel);
    }

    /// The adapter's content is no longer valid.
    ///
    /// Handled exactly like [`ChangeObserver::notify_changed`]: both drop every pinned section.
    pub fn notify_invalidated(&self) {
        self.pending.fetch_add(1, Ordering::AcqRel);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire) > 0
    }

    /// Returns `true` (and resets) if any notification arrived since the last call.
    pub fn take_notification(&self) -> bool {
        self.pending.swap(0, Ordering::AcqRel) > 0
    }

    /// Whether `other` is a clone of this observer.
    pub fn same_as(&self, other: &ChangeObserver) -> bool {
        Arc::ptr_eq(&self.pending, &other.pending)
    }
}

impl fmt::Debug for ChangeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeObserver")
            .field("pending", &self.pending.load(Ordering::Relaxed))
            .finish()
    }
}
