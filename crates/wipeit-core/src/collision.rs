//! Rag footprint and the dirt hit test.

use crate::dirt::{DirtId, DirtTarget};
use crate::landmarks::{Hand, Rect, Viewport};
use smallvec::SmallVec;

/// Square rag footprint in pixels, centered on `anchor` with a side equal to
/// the hand's larger bounding-box span times `scale`. `None` for an
/// incomplete hand or a degenerate viewport span.
pub fn rag_footprint(hand: &Hand, viewport: Viewport, anchor: usize, scale: f32) -> Option<Rect> {
    if !hand.is_complete() {
        return None;
    }
    let center = hand.get(anchor).filter(|p| p.is_finite())?.to_pixels(viewport);
    let bounds = hand.pixel_bounds(viewport)?;
    let side = bounds.size.x.max(bounds.size.y) * scale;
    (side.is_finite() && side > 0.0).then(|| Rect::centered(center, side))
}

/// Removes every target whose sprite center lies inside `footprint` and
/// returns their ids in the order they were stored.
pub fn wipe_targets(
    targets: &mut Vec<DirtTarget>,
    footprint: Rect,
    viewport: Viewport,
    dirt_size: f32,
) -> SmallVec<[DirtId; 4]> {
    let mut hits = SmallVec::new();
    targets.retain(|t| {
        let hit = footprint.contains(t.center_px(viewport, dirt_size));
        if hit {
            hits.push(t.id);
        }
        !hit
    });
    hits
}
