//! Interactive demo: paint on a 64x64 canvas with the mouse.
//!
//! Left mouse paints (hold and drag for strokes), keys 1-9 set the brush
//! diameter, Tab cycles the brush color through the default palette, P
//! toggles palette quantization of the displayed frame, C clears the
//! canvas, Esc quits.

use minifb::Key;

use pixelpad::canvas::Color;
use pixelpad::editor::{EditorConfig, PixelEditController};
use pixelpad::error::EditorError;
use pixelpad::input::{PhaseTracker, PointerPhase, PointerSample};
use pixelpad::palette::Palette;
use pixelpad::render::CanvasWindow;

const GRID_W: u32 = 64;
const GRID_H: u32 = 64;
const SCALE: usize = 8;
const BACKDROP: Color = Color::rgb(24, 24, 28);

const SIZE_KEYS: [(Key, u32); 9] = [
    (Key::Key1, 1),
    (Key::Key2, 2),
    (Key::Key3, 3),
    (Key::Key4, 4),
    (Key::Key5, 5),
    (Key::Key6, 6),
    (Key::Key7, 7),
    (Key::Key8, 8),
    (Key::Key9, 9),
];

fn main() -> Result<(), EditorError> {
    pixelpad::init();

    let mut controller = PixelEditController::new(
        EditorConfig::new(GRID_W, GRID_H)
            .with_gradient(|t| {
                // Dusk-like backdrop, darker toward the bottom
                let fade = 1.0 - t * 0.6;
                Color::rgb(
                    (40.0 * fade) as u8,
                    (48.0 * fade) as u8,
                    (92.0 * fade) as u8,
                )
            })
            .with_brush(2, Color::WHITE),
    )?;
    controller.on_pixel_tap(|tap| {
        tracing::debug!(x = tap.x, y = tap.y, index = tap.buffer_index, "pixel written");
    });

    let palette = Palette::default_16();
    let mut color_index = 7; // near-white
    let mut quantize_view = false;

    let mut window = CanvasWindow::new("pixelpad demo", GRID_W, GRID_H, SCALE)?;
    let mut phases = PhaseTracker::new();

    while window.is_open() && !window.key_down(Key::Escape) {
        for (key, size) in SIZE_KEYS {
            if window.key_typed(key) {
                controller.set_brush(size, controller.brush().color);
                tracing::info!(size, "brush size");
            }
        }
        if window.key_typed(Key::Tab) {
            color_index = (color_index + 1) % palette.len();
            let color = palette.colors()[color_index];
            controller.set_brush(controller.brush().size, color);
            tracing::info!(color_index, "brush color");
        }
        if window.key_typed(Key::P) {
            quantize_view = !quantize_view;
        }
        if window.key_typed(Key::C) {
            let area = controller.buffer().area();
            controller.set_buffer(vec![0; area * 4])?;
        }

        let (viewport_w, viewport_h) = window.viewport_size();
        if let Some((mouse_x, mouse_y)) = window.mouse_position() {
            let sample = PointerSample::new(mouse_x, mouse_y, viewport_w, viewport_h);
            match phases.resolve(window.left_button_down()) {
                Some(PointerPhase::Down) => controller.pointer_down(sample),
                Some(PointerPhase::Move) => controller.pointer_move(sample),
                Some(PointerPhase::Up) => controller.pointer_up(),
                None => {}
            }
        }

        let view_palette = quantize_view.then_some(&palette);
        window.present(controller.buffer(), BACKDROP, view_palette)?;
    }

    Ok(())
}
