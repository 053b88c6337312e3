use alloc::vec::Vec;
use core::fmt;

use crate::{Frame, PinnedEntry, PinnedSnapshot};

/// A measured surrogate of a pinned row, drawn on top of the list.
///
/// Position, size and view are fixed for the shadow's lifetime. Only `top` moves, and only
/// when the stack above it changes.
pub struct Shadow<V> {
    position: usize,
    width: u32,
    height: u32,
    top: i32,
    view: V,
}

impl<V> Shadow<V> {
    pub(crate) fn new(position: usize, width: u32, height: u32, top: i32, view: V) -> Self {
        Self {
            position,
            width,
            height,
            top,
            view,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Vertical placement inside the pinned band.
    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn frame(&self, left: i32) -> Frame {
        Frame {
            left,
            top: self.top,
            width: self.width,
            height: self.height,
        }
    }

    pub fn entry(&self) -> PinnedEntry {
        PinnedEntry {
            position: self.position,
            top: self.top,
            height: self.height,
        }
    }
}

impl<V> fmt::Debug for Shadow<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shadow")
            .field("position", &self.position)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("top", &self.top)
            .finish_non_exhaustive()
    }
}

/// The pinned set: shadows in insertion (stacking) order, at most one per position.
pub struct ShadowCache<V> {
    stack: Vec<Shadow<V>>,
}

impl<V> Default for ShadowCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ShadowCache<V> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.get(position).is_some()
    }

    pub fn get(&self, position: usize) -> Option<&Shadow<V>> {
        self.stack.iter().find(|s| s.position == position)
    }

    /// Shadows in insertion order (bottom of the stack first).
    pub fn iter(&self) -> impl Iterator<Item = &Shadow<V>> {
        self.stack.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.stack.iter().map(|s| s.position)
    }

    /// The innermost shadow: the one with the greatest position.
    pub fn innermost(&self) -> Option<&Shadow<V>> {
        self.stack.iter().max_by_key(|s| s.position)
    }

    /// Total height of the pinned band.
    pub fn band_height(&self) -> u32 {
        self.stack
            .iter()
            .fold(0u32, |acc, s| acc.saturating_add(s.height))
    }

    /// Appends a shadow to the top of the stack. Returns `false` if its position is already
    /// pinned.
    pub(crate) fn push(&mut self, shadow: Shadow<V>) -> bool {
        if self.contains(shadow.position) {
            return false;
        }
        self.stack.push(shadow);
        true
    }

    pub(crate) fn remove_innermost(&mut self) -> Option<Shadow<V>> {
        let (index, _) = self
            .stack
            .iter()
            .enumerate()
            .max_by_key(|(_, s)| s.position)?;
        Some(self.stack.remove(index))
    }

    pub(crate) fn clear(&mut self) -> usize {
        let n = self.stack.len();
        self.stack.clear();
        n
    }

    /// Recomputes each shadow's `top` as the total height of the shadows inserted before it.
    pub(crate) fn restack(&mut self) {
        let mut top = 0i32;
        for shadow in &mut self.stack {
            shadow.top = top;
            top = top.saturating_add(to_i32(shadow.height));
        }
    }

    pub fn snapshot(&self) -> PinnedSnapshot {
        PinnedSnapshot {
            entries: self.stack.iter().map(Shadow::entry).collect(),
        }
    }
}

impl<V> fmt::Debug for ShadowCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.stack.iter()).finish()
    }
}

pub(crate) fn to_i32(px: u32) -> i32 {
    i32::try_from(px).unwrap_or(i32::MAX)
}
