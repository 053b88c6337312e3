use alloc::collections::BTreeSet;

use crate::{SectionAdapter, ViewType};

/// Decides whether items of a given view type are pinned section headers.
///
/// Implementations must be total and side-effect free over the view types the adapter declares.
/// Closures `Fn(ViewType) -> bool` implement this trait directly.
pub trait HeaderClassifier {
    fn is_pinned(&self, view_type: ViewType) -> bool;
}

impl<F> HeaderClassifier for F
where
    F: Fn(ViewType) -> bool,
{
    fn is_pinned(&self, view_type: ViewType) -> bool {
        self(view_type)
    }
}

/// A classifier backed by an explicit set of pinned view types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PinnedViewTypes {
    types: BTreeSet<ViewType>,
}

impl PinnedViewTypes {
    pub fn new(types: impl IntoIterator<Item = ViewType>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    pub fn single(view_type: ViewType) -> Self {
        Self::new([view_type])
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl HeaderClassifier for PinnedViewTypes {
    fn is_pinned(&self, view_type: ViewType) -> bool {
        self.types.contains(&view_type)
    }
}

/// Returns `true` when the item at `position` exists and its view type is pinnable.
///
/// An adapter without a classifier never has pinnable items.
pub fn is_pinned_position<A: SectionAdapter + ?Sized>(adapter: &A, position: usize) -> bool {
    if position >= adapter.count() {
        return false;
    }
    let Some(classifier) = adapter.classifier() else {
        return false;
    };
    classifier.is_pinned(adapter.item_view_type(position))
}
