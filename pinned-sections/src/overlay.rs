//! Drawing pinned shadows over the list.

use crate::shadow::{Shadow, ShadowCache, to_i32};
use crate::{ClipRect, Frame, Padding};

/// The drawing surface of the host list, as seen by the overlay.
pub trait Canvas<V> {
    fn save(&mut self);

    fn clip_rect(&mut self, clip: ClipRect);

    fn draw_view(&mut self, view: &V, frame: Frame);

    fn restore(&mut self);
}

/// Clip rectangle for one shadow.
///
/// The bottom edge includes the list's top padding on top of the shadow's own height.
pub fn clip_rect_for<V>(shadow: &Shadow<V>, padding: Padding) -> ClipRect {
    let left = to_i32(padding.left);
    let top = shadow.top();
    ClipRect {
        left,
        top,
        right: left.saturating_add(to_i32(shadow.width())),
        bottom: top
            .saturating_add(to_i32(padding.top))
            .saturating_add(to_i32(shadow.height())),
    }
}

/// Paints every shadow in insertion order, so deeper sections end up on top.
pub fn draw_pinned<V, C>(cache: &ShadowCache<V>, padding: Padding, canvas: &mut C)
where
    C: Canvas<V> + ?Sized,
{
    let left = to_i32(padding.left);
    for shadow in cache.iter() {
        canvas.save();
        canvas.clip_rect(clip_rect_for(shadow, padding));
        canvas.draw_view(shadow.view(), shadow.frame(left));
        canvas.restore();
    }
}
