use alloc::vec::Vec;

/// Geometry of one pinned shadow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinnedEntry {
    pub position: usize,
    pub top: i32,
    pub height: u32,
}

impl PinnedEntry {
    pub fn bottom(&self) -> i32 {
        self.top
            .saturating_add(i32::try_from(self.height).unwrap_or(i32::MAX))
    }
}

/// An owned copy of the pinned set, in stacking order.
///
/// Useful for handing pinned geometry to another frame or thread without borrowing the
/// controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinnedSnapshot {
    pub entries: Vec<PinnedEntry>,
}

impl PinnedSnapshot {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.position)
    }

    /// Bottom edge of the pinned band.
    pub fn band_bottom(&self) -> i32 {
        self.entries.last().map_or(0, PinnedEntry::bottom)
    }
}
