use crate::overlay::{self, Canvas};
use crate::shadow::{Shadow, ShadowCache, to_i32};
use crate::{
    Constraint, ListGeometry, ListLayout, PinnedSnapshot, PinnedView, PinningOptions,
    ScrollWindow, SectionAdapter, locator,
};

/// The pinning state machine.
///
/// Owns the pinned set and is its only mutator. The host feeds it scroll events, change
/// notifications and draw passes:
/// - [`PinningController::on_scroll`] for every scroll notification,
/// - [`PinningController::clear`] when the adapter changes, is invalidated, or is replaced,
/// - [`PinningController::draw`] after the list has drawn its own rows.
///
/// Mutation needs `&mut self` and drawing only `&self`, so a draw pass always observes a
/// complete pinned set.
pub struct PinningController<V> {
    options: PinningOptions,
    cache: ShadowCache<V>,
    // The view of the last unpinned shadow, offered back to the adapter if that position is
    // pinned again.
    recycled: Option<(usize, V)>,
}

impl<V> Default for PinningController<V> {
    fn default() -> Self {
        Self::new(PinningOptions::default())
    }
}

impl<V> core::fmt::Debug for PinningController<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PinningController")
            .field("options", &self.options)
            .field("cache", &self.cache)
            .field("recycled", &self.recycled.as_ref().map(|(p, _)| *p))
            .finish()
    }
}

impl<V> PinningController<V> {
    pub fn new(options: PinningOptions) -> Self {
        Self {
            options,
            cache: ShadowCache::new(),
            recycled: None,
        }
    }

    pub fn options(&self) -> &PinningOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PinningOptions) {
        self.options = options;
    }

    pub fn pinned(&self) -> &ShadowCache<V> {
        &self.cache
    }

    pub fn pinned_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_pinned(&self, position: usize) -> bool {
        self.cache.contains(position)
    }

    pub fn snapshot(&self) -> PinnedSnapshot {
        self.cache.snapshot()
    }

    /// The lower edge of the pinned band: list top padding plus every stacked shadow.
    pub fn top_border(&self, geometry: &ListGeometry) -> i32 {
        to_i32(geometry.padding.top).saturating_add(to_i32(self.cache.band_height()))
    }

    /// Removes the innermost shadow and returns its position.
    ///
    /// Its view is kept so that re-pinning the same position can recycle it.
    pub fn unpin_innermost(&mut self) -> Option<usize> {
        let shadow = self.cache.remove_innermost()?;
        let position = shadow.position();
        self.cache.restack();
        pdebug!(position, remaining = self.cache.len(), "unpinned section");
        self.recycled = Some((position, shadow.into_view()));
        Some(position)
    }

    /// Drops every shadow (and any recycled view). Returns how many shadows were removed.
    ///
    /// Call this when the adapter reports changed or invalid content, or is replaced.
    pub fn clear(&mut self) -> usize {
        self.recycled = None;
        let removed = self.cache.clear();
        if removed > 0 {
            pdebug!(removed, "cleared pinned sections");
        }
        removed
    }

    /// Draws every shadow over the list, bottom of the stack first.
    pub fn draw<C: Canvas<V> + ?Sized>(&self, geometry: &ListGeometry, canvas: &mut C) {
        overlay::draw_pinned(&self.cache, geometry.padding, canvas);
    }
}

impl<V: PinnedView> PinningController<V> {
    /// Pins the item at `position` unless it already is. Returns `true` if a shadow was
    /// created.
    ///
    /// The new shadow is measured once against `geometry` and stacked below every shadow
    /// already pinned.
    pub fn ensure_pinned<A>(
        &mut self,
        adapter: &A,
        geometry: &ListGeometry,
        position: usize,
    ) -> bool
    where
        A: SectionAdapter<View = V> + ?Sized,
    {
        if self.cache.contains(position) {
            return false;
        }
        let shadow = self.build_shadow(adapter, geometry, position);
        pdebug!(
            position,
            top = shadow.top(),
            height = shadow.height(),
            "pinned section"
        );
        self.cache.push(shadow)
    }

    fn build_shadow<A>(
        &mut self,
        adapter: &A,
        geometry: &ListGeometry,
        position: usize,
    ) -> Shadow<V>
    where
        A: SectionAdapter<View = V> + ?Sized,
    {
        let reuse = match self.recycled.take() {
            Some((recycled_at, view)) if recycled_at == position => Some(view),
            other => {
                self.recycled = other;
                None
            }
        };
        let mut view = adapter.view(position, reuse);

        let max_height = geometry.max_row_height();
        let height = view
            .height_intent()
            .unwrap_or(Constraint::AtMost(geometry.height))
            .clamp_to(max_height);
        let width = Constraint::Exact(geometry.content_width());
        let size = view.measure(width, height);

        let top = to_i32(self.cache.band_height());
        Shadow::new(position, size.width, size.height.min(max_height), top, view)
    }

    /// Updates the pinned set for a scroll notification.
    pub fn on_scroll<A, L>(&mut self, adapter: &A, list: &L, window: ScrollWindow)
    where
        A: SectionAdapter<View = V> + ?Sized,
        L: ListLayout + ?Sized,
    {
        if window.is_empty() {
            return;
        }
        let geometry = list.geometry();

        self.drop_stale_stack(adapter, &geometry, window);
        self.cache.restack();
        let top_border = self.top_border(&geometry);

        let Some(section) = locator::first_visible_pinnable(
            adapter,
            window.first_visible,
            window.visible_count,
            self.cache.len(),
        ) else {
            // Every section header on screen is scrolled past: keep the enclosing one pinned.
            let current = locator::nearest_pinnable_at_or_above(adapter, window.first_visible);
            if let Some(current) = current {
                self.ensure_pinned(adapter, &geometry, current);
            }
            return;
        };

        if section - window.first_visible >= window.visible_count {
            return;
        }
        let Some(section_top) = list.child_top(section) else {
            return;
        };
        ptrace!(section, section_top, top_border, "visible section");

        let Some((innermost, innermost_height)) = self
            .cache
            .innermost()
            .map(|s| (s.position(), to_i32(s.height())))
        else {
            if section_top < top_border {
                self.ensure_pinned(adapter, &geometry, section);
            }
            return;
        };

        if section == innermost {
            // The innermost section is sliding back out from under the band.
            if section_top > top_border.saturating_sub(innermost_height) {
                self.unpin_innermost();
                let previous = section
                    .checked_sub(1)
                    .and_then(|from| locator::nearest_pinnable_at_or_above(adapter, from));
                if let Some(previous) = previous {
                    self.ensure_pinned(adapter, &geometry, previous);
                }
            }
            return;
        }

        let pinned_bottom = top_border.saturating_add(innermost_height);
        if section_top < pinned_bottom && section_top < top_border {
            self.ensure_pinned(adapter, &geometry, section);
        }
    }

    // A backward jump can leave the innermost shadow for a section that is no longer laid out.
    // Nothing else can release it, so rebuild from the section enclosing the first visible row.
    fn drop_stale_stack<A>(&mut self, adapter: &A, geometry: &ListGeometry, window: ScrollWindow)
    where
        A: SectionAdapter<View = V> + ?Sized,
    {
        let Some(innermost) = self.cache.innermost().map(Shadow::position) else {
            return;
        };
        let window_end = window.first_visible.saturating_add(window.visible_count);
        if innermost < window_end {
            return;
        }
        pdebug!(
            innermost,
            first_visible = window.first_visible,
            "pinned stack is below the viewport, rebuilding"
        );
        self.clear();
        let current = locator::nearest_pinnable_at_or_above(adapter, window.first_visible);
        if let Some(current) = current {
            self.ensure_pinned(adapter, geometry, current);
        }
    }

    /// Rebuilds the pinned set from the list's current layout.
    ///
    /// Used after the host restores saved scroll state: everything is dropped and the section
    /// enclosing the first visible row is pinned again.
    pub fn reconcile<A, L>(&mut self, adapter: &A, list: &L)
    where
        A: SectionAdapter<View = V> + ?Sized,
        L: ListLayout + ?Sized,
    {
        self.clear();
        let first_visible = list.first_visible_position();
        if let Some(section) = locator::nearest_pinnable_at_or_above(adapter, first_visible) {
            self.ensure_pinned(adapter, &list.geometry(), section);
        }
    }
}
