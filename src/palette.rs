//! Palette - ordered candidate colors with nearest-color quantization
//!
//! Consumed only by the render path; the editing core never looks at it.

use crate::canvas::Color;

/// An ordered list of candidate colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// The PICO-8 sixteen, a common pixel-art default
    pub fn default_16() -> Self {
        Self::new(vec![
            Color::rgb(0, 0, 0),
            Color::rgb(29, 43, 83),
            Color::rgb(126, 37, 83),
            Color::rgb(0, 135, 81),
            Color::rgb(171, 82, 54),
            Color::rgb(95, 87, 79),
            Color::rgb(194, 195, 199),
            Color::rgb(255, 241, 232),
            Color::rgb(255, 0, 77),
            Color::rgb(255, 163, 0),
            Color::rgb(255, 236, 39),
            Color::rgb(0, 228, 54),
            Color::rgb(41, 173, 255),
            Color::rgb(131, 118, 156),
            Color::rgb(255, 119, 168),
            Color::rgb(255, 204, 170),
        ])
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Index of the closest candidate by squared channel distance over
    /// R, G, B, A. `None` for an empty palette. Ties pick the earlier entry.
    pub fn nearest(&self, color: Color) -> Option<usize> {
        self.colors
            .iter()
            .enumerate()
            .min_by_key(|(_, candidate)| distance_sq(color, **candidate))
            .map(|(index, _)| index)
    }

    /// Snap a color to its closest candidate; identity for an empty palette
    pub fn quantize(&self, color: Color) -> Color {
        match self.nearest(color) {
            Some(index) => self.colors[index],
            None => color,
        }
    }
}

fn distance_sq(a: Color, b: Color) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    let da = a.a as i32 - b.a as i32;
    (dr * dr + dg * dg + db * db + da * da) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_picks_the_true_argmin() {
        let palette = Palette::new(vec![
            Color::rgb(0, 0, 0),
            Color::rgb(128, 128, 128),
            Color::rgb(255, 255, 255),
        ]);

        assert_eq!(palette.nearest(Color::rgb(10, 10, 10)), Some(0));
        assert_eq!(palette.nearest(Color::rgb(120, 130, 125)), Some(1));
        assert_eq!(palette.nearest(Color::rgb(250, 240, 255)), Some(2));
    }

    #[test]
    fn test_alpha_participates_in_distance() {
        let palette = Palette::new(vec![Color::rgba(255, 0, 0, 0), Color::rgba(255, 0, 0, 255)]);
        assert_eq!(palette.nearest(Color::rgba(255, 0, 0, 200)), Some(1));
    }

    #[test]
    fn test_ties_pick_the_earlier_entry() {
        let palette = Palette::new(vec![Color::rgb(0, 0, 0), Color::rgb(0, 0, 2)]);
        assert_eq!(palette.nearest(Color::rgb(0, 0, 1)), Some(0));
    }

    #[test]
    fn test_empty_palette() {
        let palette = Palette::new(vec![]);
        assert_eq!(palette.nearest(Color::WHITE), None);
        assert_eq!(palette.quantize(Color::WHITE), Color::WHITE);
    }

    #[test]
    fn test_exact_member_quantizes_to_itself() {
        let palette = Palette::default_16();
        for &color in palette.colors() {
            assert_eq!(palette.quantize(color), color);
        }
    }
}
