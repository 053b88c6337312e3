use pinned_sections::ScrollWindow;

/// Scroll phase reported by the host list view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollState {
    #[default]
    Idle,
    TouchScroll,
    Fling,
}

/// An external listener for the list's scroll events.
///
/// A pinned-section list handles scrolling itself; a registered observer receives every event
/// unmodified before pinning runs. Closures `FnMut(ScrollWindow)` implement this trait and
/// ignore state changes.
pub trait ScrollObserver {
    fn on_scroll(&mut self, window: ScrollWindow);

    fn on_scroll_state_changed(&mut self, state: ScrollState) {
        let _ = state;
    }
}

impl<F> ScrollObserver for F
where
    F: FnMut(ScrollWindow),
{
    fn on_scroll(&mut self, window: ScrollWindow) {
        self(window)
    }
}
