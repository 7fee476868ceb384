//! Pixel buffer - raw RGBA storage for a fixed-resolution raster

use super::Color;
use crate::error::EditorError;

/// Owned RGBA storage for a `width` x `height` raster.
///
/// The byte vector is always exactly `width * height * 4` long, row-major,
/// row 0 first, channel order R, G, B, A. Single-pixel writes outside the
/// raster clip silently; only bulk replacement is strict about length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a transparent buffer
    pub fn new(width: u32, height: u32) -> Result<Self, EditorError> {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    /// Create a buffer filled with a solid color
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self, EditorError> {
        check_dimensions(width, height)?;
        let mut buffer = Self {
            width,
            height,
            pixels: vec![0; byte_len(width, height)],
        };
        buffer.fill(color);
        Ok(buffer)
    }

    /// Create a buffer by sampling a per-row gradient function.
    ///
    /// `gradient` receives the row position `y / height` in `[0, 1)`.
    pub fn from_gradient(
        width: u32,
        height: u32,
        gradient: impl Fn(f32) -> Color,
    ) -> Result<Self, EditorError> {
        check_dimensions(width, height)?;
        let mut pixels = Vec::with_capacity(byte_len(width, height));
        for y in 0..height {
            let row_color = gradient(y as f32 / height as f32).to_bytes();
            for _ in 0..width {
                pixels.extend_from_slice(&row_color);
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer from existing RGBA bytes
    pub fn from_bytes(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, EditorError> {
        check_dimensions(width, height)?;
        let expected = byte_len(width, height);
        if pixels.len() != expected {
            return Err(EditorError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the raster
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Pixel index for a grid coordinate, `None` when outside the raster
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Read the color at a pixel index, `None` when out of range
    pub fn get(&self, index: usize) -> Option<Color> {
        if index >= self.area() {
            return None;
        }
        let offset = index * 4;
        Some(Color::from_bytes([
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]))
    }

    /// Write the color at a pixel index; out-of-range indices clip silently
    pub fn set(&mut self, index: usize, color: Color) {
        if index >= self.area() {
            return;
        }
        let offset = index * 4;
        self.pixels[offset..offset + 4].copy_from_slice(&color.to_bytes());
    }

    /// Fill the whole raster with one color
    pub fn fill(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color.to_bytes());
        }
    }

    /// The raw RGBA bytes, row-major
    pub fn bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Replace the whole pixel vector.
    ///
    /// Strict, unlike single-pixel writes: a length mismatch fails with
    /// `SizeMismatch` and leaves the current content untouched.
    pub fn replace_bytes(&mut self, pixels: Vec<u8>) -> Result<(), EditorError> {
        let expected = byte_len(self.width, self.height);
        if pixels.len() != expected {
            return Err(EditorError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        self.pixels = pixels;
        Ok(())
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

fn check_dimensions(width: u32, height: u32) -> Result<(), EditorError> {
    if width == 0 || height == 0 {
        return Err(EditorError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_roundtrip() {
        let mut buffer = PixelBuffer::new(8, 8).expect("valid dimensions");
        let color = Color::rgba(10, 20, 30, 40);

        let index = buffer.index_of(3, 5).expect("in bounds");
        assert_eq!(index, 5 * 8 + 3);
        buffer.set(index, color);

        assert_eq!(buffer.get(index), Some(color));
        // No other pixel changed
        for i in 0..buffer.area() {
            if i != index {
                assert_eq!(buffer.get(i), Some(Color::TRANSPARENT));
            }
        }
    }

    #[test]
    fn test_out_of_range_write_is_noop() {
        let mut buffer = PixelBuffer::new(4, 4).expect("valid dimensions");
        let before = buffer.bytes().to_vec();

        buffer.set(16, Color::WHITE);
        buffer.set(usize::MAX / 8, Color::WHITE);

        assert_eq!(buffer.bytes(), &before[..]);
    }

    #[test]
    fn test_index_of_rejects_outside_coordinates() {
        let buffer = PixelBuffer::new(4, 4).expect("valid dimensions");
        assert_eq!(buffer.index_of(-1, 0), None);
        assert_eq!(buffer.index_of(0, -1), None);
        assert_eq!(buffer.index_of(4, 0), None);
        assert_eq!(buffer.index_of(0, 4), None);
        assert_eq!(buffer.index_of(3, 3), Some(15));
    }

    #[test]
    fn test_replace_bytes_rejects_wrong_length() {
        let mut buffer = PixelBuffer::filled(4, 4, Color::BLACK).expect("valid dimensions");
        let before = buffer.bytes().to_vec();

        let result = buffer.replace_bytes(vec![0; 17]);
        assert!(matches!(
            result,
            Err(EditorError::SizeMismatch {
                expected: 64,
                actual: 17
            })
        ));
        // Prior content intact after the failed replacement
        assert_eq!(buffer.bytes(), &before[..]);

        buffer
            .replace_bytes(vec![7; 64])
            .expect("matching length replaces");
        assert_eq!(buffer.bytes(), &[7; 64][..]);
    }

    #[test]
    fn test_from_bytes_validates_length() {
        assert!(matches!(
            PixelBuffer::from_bytes(2, 2, vec![0; 15]),
            Err(EditorError::SizeMismatch {
                expected: 16,
                actual: 15
            })
        ));
        assert!(PixelBuffer::from_bytes(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            PixelBuffer::new(0, 8),
            Err(EditorError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            PixelBuffer::new(8, 0),
            Err(EditorError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_gradient_samples_row_fraction() {
        let buffer = PixelBuffer::from_gradient(2, 4, |t| {
            Color::rgb((t * 255.0) as u8, 0, 0)
        })
        .expect("valid dimensions");

        for y in 0..4 {
            let expected = ((y as f32 / 4.0) * 255.0) as u8;
            for x in 0..2 {
                let index = buffer.index_of(x, y).expect("in bounds");
                let color = buffer.get(index).expect("in range");
                assert_eq!(color.r, expected);
                assert_eq!(color.a, 255);
            }
        }
    }
}
