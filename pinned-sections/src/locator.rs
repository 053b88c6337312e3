//! Finding section headers relative to the scroll window.

use crate::SectionAdapter;
use crate::classifier::is_pinned_position;

/// Returns the first pinnable position inside the visible window.
///
/// Pinned shadows cover the first `pinned_len` real rows, so the scan starts that many rows
/// below `first_visible`. Slots past the end of the adapter are skipped.
pub fn first_visible_pinnable<A: SectionAdapter + ?Sized>(
    adapter: &A,
    first_visible: usize,
    visible_count: usize,
    pinned_len: usize,
) -> Option<usize> {
    let start = first_visible.saturating_add(pinned_len);
    let end = start.saturating_add(visible_count).min(adapter.count());
    (start..end).find(|&position| is_pinned_position(adapter, position))
}

/// Returns the nearest pinnable position at or above `from`.
///
/// The adapter's section indexer is consulted first. Its answer is only used if it is a real
/// header at or above `from`; anything else falls through to a backward linear scan.
pub fn nearest_pinnable_at_or_above<A: SectionAdapter + ?Sized>(
    adapter: &A,
    from: usize,
) -> Option<usize> {
    let count = adapter.count();
    if count == 0 {
        return None;
    }
    let from = from.min(count - 1);

    if let Some(indexer) = adapter.section_indexer() {
        let section = indexer.section_for_position(from);
        let hint = indexer.position_for_section(section);
        if hint <= from && is_pinned_position(adapter, hint) {
            ptrace!(from, section, hint, "section indexer hit");
            return Some(hint);
        }
        pwarn!(from, section, hint, "section indexer returned a non-header position");
    }

    (0..=from)
        .rev()
        .find(|&position| is_pinned_position(adapter, position))
}
