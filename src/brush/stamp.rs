//! Circular brush stamping - expands one center point into covered pixels

use crate::canvas::PixelCoord;

/// Enumerate the coordinates covered by a filled circular brush.
///
/// `radius = diameter / 2` in integer division; a cell offset `(i, j)` from
/// the center belongs to the stamp when `i*i + j*j <= radius*radius`. The
/// quarter in the positive quadrant is mirrored across both axes. Diameter 1
/// stamps only the center. Coordinates may land outside the raster; callers
/// filter them at the write boundary.
pub fn stamp_coverage(center: PixelCoord, diameter: u32) -> Vec<PixelCoord> {
    let radius = (diameter / 2) as i32;
    let radius_sq = radius * radius;
    let mut covered = Vec::with_capacity(((radius as usize + 1) * (radius as usize + 1)) * 4);

    for i in 0..=radius {
        for j in 0..=radius {
            if i * i + j * j > radius_sq {
                continue;
            }
            covered.push(PixelCoord::new(center.x + i, center.y + j));
            if i != 0 {
                covered.push(PixelCoord::new(center.x - i, center.y + j));
            }
            if j != 0 {
                covered.push(PixelCoord::new(center.x + i, center.y - j));
            }
            if i != 0 && j != 0 {
                covered.push(PixelCoord::new(center.x - i, center.y - j));
            }
        }
    }

    covered
}
