/// A one-shot request to rebuild pinned state after the host restored saved scroll state.
///
/// The adapter may not be attached yet when state is restored, so the request stays armed
/// until the first idle point at which one is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingReconcile {
    armed: bool,
}

impl PendingReconcile {
    pub fn schedule(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Disarms and returns `true` if the request is armed and an adapter is attached.
    pub fn take_if_attached(&mut self, attached: bool) -> bool {
        if !attached {
            return false;
        }
        core::mem::take(&mut self.armed)
    }
}
