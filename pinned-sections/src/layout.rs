use crate::ListGeometry;

/// What the engine needs to know about the host list view's current layout.
pub trait ListLayout {
    fn geometry(&self) -> ListGeometry;

    /// Top edge of the laid-out row for `position`, relative to the list's top edge.
    ///
    /// Returns `None` when that row is not currently laid out.
    fn child_top(&self, position: usize) -> Option<i32>;

    fn first_visible_position(&self) -> usize;
}
