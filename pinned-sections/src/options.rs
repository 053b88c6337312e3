/// Configuration for [`crate::PinningController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinningOptions {
    /// Reject misconfigured adapters at attach time.
    ///
    /// Defaults to `true` in debug builds. When `false`, an adapter without a classifier is
    /// accepted and simply never pins anything.
    pub strict: bool,
}

impl Default for PinningOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PinningOptions {
    pub fn new() -> Self {
        Self {
            strict: cfg!(debug_assertions),
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
