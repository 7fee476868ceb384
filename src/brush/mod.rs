//! Brush module - stamp geometry and stroke interpolation

mod interpolation;
mod stamp;

pub use interpolation::DragPath;
pub use stamp::stamp_coverage;

use serde::{Deserialize, Serialize};

use crate::canvas::Color;

/// Current brush settings: diameter in pixels and paint color.
///
/// Lives on the controller and changes only through its explicit
/// brush-update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushState {
    /// Brush diameter in pixels, at least 1
    pub size: u32,
    /// Paint color applied by every stamp
    pub color: Color,
}

impl BrushState {
    pub fn new(size: u32, color: Color) -> Self {
        Self {
            size: size.max(1),
            color,
        }
    }
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            size: 1,
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_size_clamped_to_one() {
        assert_eq!(BrushState::new(0, Color::BLACK).size, 1);
        assert_eq!(BrushState::new(7, Color::BLACK).size, 7);
    }

    #[test]
    fn test_default_brush_is_single_white_pixel() {
        let brush = BrushState::default();
        assert_eq!(brush.size, 1);
        assert_eq!(brush.color, Color::WHITE);
    }
}
