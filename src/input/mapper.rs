use super::PointerSample;
use crate::canvas::PixelCoord;

/// Maps pointer positions in an arbitrarily-sized viewport onto a fixed
/// logical pixel grid.
///
/// Pure arithmetic, no clamping: a sample outside the viewport maps to a
/// coordinate outside the grid, and downstream consumers filter it at the
/// write boundary.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    grid_w: u32,
    grid_h: u32,
}

impl CoordinateMapper {
    pub fn new(grid_w: u32, grid_h: u32) -> Self {
        Self { grid_w, grid_h }
    }

    /// Grid cell under a pointer sample, truncating toward zero.
    pub fn to_pixel(&self, sample: &PointerSample) -> PixelCoord {
        let vw = sample.viewport_w.max(1.0);
        let vh = sample.viewport_h.max(1.0);
        let x = (self.grid_w as f32 * sample.x / vw) as i32;
        let y = (self.grid_h as f32 * sample.y / vh) as i32;
        PixelCoord::new(x, y)
    }
}
