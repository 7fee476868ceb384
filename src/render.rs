//! Render - composes the RGBA buffer into window-presentable frames
//!
//! The editing core publishes well-formed RGBA snapshots; everything here is
//! the passive display side. Composition is pure and unit-tested, the
//! `CanvasWindow` is a thin minifb wrapper the demo drives.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::canvas::{Color, PixelBuffer};
use crate::error::EditorError;
use crate::palette::Palette;

/// Blend every RGBA pixel over an opaque background and pack as 0RGB u32,
/// the buffer format minifb presents.
pub fn compose_0rgb(buffer: &PixelBuffer, background: Color) -> Vec<u32> {
    buffer
        .bytes()
        .chunks_exact(4)
        .map(|px| {
            let color = Color::from_bytes([px[0], px[1], px[2], px[3]]);
            pack_0rgb(blend_over(color, background))
        })
        .collect()
}

/// Same as [`compose_0rgb`] with a nearest-color palette pass applied to
/// each pixel before blending.
pub fn compose_0rgb_quantized(
    buffer: &PixelBuffer,
    palette: &Palette,
    background: Color,
) -> Vec<u32> {
    buffer
        .bytes()
        .chunks_exact(4)
        .map(|px| {
            let color = Color::from_bytes([px[0], px[1], px[2], px[3]]);
            let quantized = Color {
                a: color.a,
                ..palette.quantize(color)
            };
            pack_0rgb(blend_over(quantized, background))
        })
        .collect()
}

/// Nearest-neighbor integer upscale of a packed frame
pub fn upscale(frame: &[u32], width: usize, height: usize, factor: usize) -> Vec<u32> {
    let factor = factor.max(1);
    let out_w = width * factor;
    let mut out = vec![0u32; out_w * height * factor];
    for y in 0..height {
        let src_row = &frame[y * width..(y + 1) * width];
        let first_out_row = y * factor;
        for (x, &px) in src_row.iter().enumerate() {
            let base = first_out_row * out_w + x * factor;
            out[base..base + factor].fill(px);
        }
        // Replicate the expanded row down the remaining factor-1 rows
        let (done, rest) = out.split_at_mut((first_out_row + 1) * out_w);
        let row = &done[first_out_row * out_w..];
        for dy in 1..factor {
            rest[(dy - 1) * out_w..dy * out_w].copy_from_slice(row);
        }
    }
    out
}

fn blend_over(src: Color, background: Color) -> Color {
    let a = src.a as u32;
    let inv = 255 - a;
    Color::rgb(
        ((src.r as u32 * a + background.r as u32 * inv) / 255) as u8,
        ((src.g as u32 * a + background.g as u32 * inv) / 255) as u8,
        ((src.b as u32 * a + background.b as u32 * inv) / 255) as u8,
    )
}

fn pack_0rgb(color: Color) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Passive display widget: a window that shows the composed buffer at an
/// integer upscale and reports raw pointer state back to the host loop.
pub struct CanvasWindow {
    window: Window,
    grid_w: usize,
    grid_h: usize,
    scale: usize,
}

impl CanvasWindow {
    pub fn new(title: &str, grid_w: u32, grid_h: u32, scale: usize) -> Result<Self, EditorError> {
        let scale = scale.max(1);
        let grid_w = grid_w as usize;
        let grid_h = grid_h as usize;
        let mut window = Window::new(
            title,
            grid_w * scale,
            grid_h * scale,
            WindowOptions::default(),
        )
        .map_err(|e| EditorError::Window(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self {
            window,
            grid_w,
            grid_h,
            scale,
        })
    }

    /// Compose and push one frame
    pub fn present(
        &mut self,
        buffer: &PixelBuffer,
        background: Color,
        palette: Option<&Palette>,
    ) -> Result<(), EditorError> {
        let frame = match palette {
            Some(palette) => compose_0rgb_quantized(buffer, palette, background),
            None => compose_0rgb(buffer, background),
        };
        let scaled = upscale(&frame, self.grid_w, self.grid_h, self.scale);
        self.window
            .update_with_buffer(&scaled, self.grid_w * self.scale, self.grid_h * self.scale)
            .map_err(|e| EditorError::Window(e.to_string()))
    }

    /// Rendered viewport size in display units
    pub fn viewport_size(&self) -> (f32, f32) {
        (
            (self.grid_w * self.scale) as f32,
            (self.grid_h * self.scale) as f32,
        )
    }

    /// Pointer position in display units, clamped to the window
    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Clamp)
    }

    pub fn left_button_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.window.is_key_down(key)
    }

    /// True once per physical key press
    pub fn key_typed(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, KeyRepeat::No)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_channel_order() {
        let frame = compose_0rgb(
            &PixelBuffer::filled(1, 1, Color::rgb(0x12, 0x34, 0x56)).expect("valid dimensions"),
            Color::BLACK,
        );
        assert_eq!(frame, vec![0x0012_3456]);
    }

    #[test]
    fn test_transparent_pixels_show_the_background() {
        let buffer = PixelBuffer::new(2, 1).expect("valid dimensions");
        let frame = compose_0rgb(&buffer, Color::rgb(10, 20, 30));
        assert_eq!(frame, vec![0x000A_141E, 0x000A_141E]);
    }

    #[test]
    fn test_alpha_blends_toward_background() {
        let buffer =
            PixelBuffer::filled(1, 1, Color::rgba(255, 255, 255, 128)).expect("valid dimensions");
        let frame = compose_0rgb(&buffer, Color::BLACK);

        let r = (frame[0] >> 16) & 0xFF;
        assert!((127..=129).contains(&r));
    }

    #[test]
    fn test_quantized_compose_snaps_to_palette() {
        let palette = Palette::new(vec![Color::rgb(0, 0, 0), Color::rgb(255, 0, 0)]);
        let buffer =
            PixelBuffer::filled(1, 1, Color::rgb(240, 10, 10)).expect("valid dimensions");
        let frame = compose_0rgb_quantized(&buffer, &palette, Color::BLACK);
        assert_eq!(frame, vec![0x00FF_0000]);
    }

    #[test]
    fn test_upscale_replicates_pixels() {
        let frame = vec![1, 2, 3, 4];
        let scaled = upscale(&frame, 2, 2, 2);
        assert_eq!(
            scaled,
            vec![
                1, 1, 2, 2, //
                1, 1, 2, 2, //
                3, 3, 4, 4, //
                3, 3, 4, 4,
            ]
        );
    }

    #[test]
    fn test_upscale_factor_one_is_identity() {
        let frame = vec![5, 6, 7, 8];
        assert_eq!(upscale(&frame, 2, 2, 1), frame);
    }
}
