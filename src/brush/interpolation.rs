//! Drag interpolation - fills the cells fast pointer motion skips between frames

use crate::canvas::PixelCoord;

/// Lattice walk from one grid coordinate to another.
///
/// Each step nudges the x and y offsets independently by one cell toward the
/// target, so both axes advance together while they can (a diagonal run)
/// and the longer axis finishes alone. The walk reaches the target in
/// `max(|dx|, |dy|)` steps and visits every intermediate lattice point a
/// stroke needs so no cell is skipped. It is not line rasterization: when
/// `|dx| != |dy|` the path bends at 45 degrees instead of tracing the
/// straight segment. Existing strokes render this way; keep it.
///
/// The iterator is lazy, finite, and `Clone` (restartable). It yields
/// nothing when `from == to`; the starting coordinate itself is never
/// yielded.
#[derive(Debug, Clone, Copy)]
pub struct DragPath {
    cursor: PixelCoord,
    target: PixelCoord,
}

impl DragPath {
    pub fn new(from: PixelCoord, to: PixelCoord) -> Self {
        Self {
            cursor: from,
            target: to,
        }
    }
}

impl Iterator for DragPath {
    type Item = PixelCoord;

    fn next(&mut self) -> Option<PixelCoord> {
        let dx = self.target.x - self.cursor.x;
        let dy = self.target.y - self.cursor.y;
        if dx == 0 && dy == 0 {
            return None;
        }
        self.cursor.x += dx.signum();
        self.cursor.y += dy.signum();
        Some(self.cursor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let dx = (self.target.x - self.cursor.x).unsigned_abs() as usize;
        let dy = (self.target.y - self.cursor.y).unsigned_abs() as usize;
        let remaining = dx.max(dy);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DragPath {}
