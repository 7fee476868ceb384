//! Editor module - the pointer state machine orchestrating brush writes

use serde::{Deserialize, Serialize};

use crate::brush::{stamp_coverage, BrushState, DragPath};
use crate::canvas::{Color, PixelBuffer, PixelCoord};
use crate::error::EditorError;
use crate::input::{CoordinateMapper, PointerSample};

/// One pixel actually written by a pointer event.
///
/// Emitted per in-bounds write so hosts can layer their own effects (an
/// erase tool, stroke logging) on top of the widget without touching the
/// buffer themselves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PixelTapEvent {
    /// Grid x of the written pixel
    pub x: u32,
    /// Grid y of the written pixel
    pub y: u32,
    /// Flat pixel index, `y * width + x`
    pub buffer_index: usize,
    /// Raw pointer x in host display units
    pub raw_x: f32,
    /// Raw pointer y in host display units
    pub raw_y: f32,
}

type TapCallback = Box<dyn FnMut(&PixelTapEvent)>;
type ChangeListener = Box<dyn FnMut(&PixelBuffer)>;

/// Construction configuration for [`PixelEditController`].
///
/// Width and height are required; everything else has a default. When no
/// initial bytes, background, or gradient is given the buffer starts
/// transparent.
pub struct EditorConfig {
    width: u32,
    height: u32,
    initial_bytes: Option<Vec<u8>>,
    background: Option<Color>,
    gradient: Option<Box<dyn Fn(f32) -> Color>>,
    brush: BrushState,
}

impl EditorConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            initial_bytes: None,
            background: None,
            gradient: None,
            brush: BrushState::default(),
        }
    }

    /// Start from an explicit RGBA byte vector (length-checked at build)
    pub fn with_initial_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.initial_bytes = Some(bytes);
        self
    }

    /// Start from a solid background fill
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Start from a per-row gradient sampled at `y / height`
    pub fn with_gradient(mut self, gradient: impl Fn(f32) -> Color + 'static) -> Self {
        self.gradient = Some(Box::new(gradient));
        self
    }

    /// Initial brush diameter and color (defaults: 1, opaque white)
    pub fn with_brush(mut self, size: u32, color: Color) -> Self {
        self.brush = BrushState::new(size, color);
        self
    }
}

/// Owns the pixel buffer and runs the Idle/Dragging pointer state machine.
///
/// The session coordinate is the whole state: `None` means idle, `Some`
/// means a stroke is in progress and records the last visited grid cell.
pub struct PixelEditController {
    buffer: PixelBuffer,
    mapper: CoordinateMapper,
    brush: BrushState,
    session: Option<PixelCoord>,
    tap_callback: Option<TapCallback>,
    change_listeners: Vec<ChangeListener>,
}

impl PixelEditController {
    pub fn new(config: EditorConfig) -> Result<Self, EditorError> {
        let EditorConfig {
            width,
            height,
            initial_bytes,
            background,
            gradient,
            brush,
        } = config;

        let buffer = if let Some(bytes) = initial_bytes {
            PixelBuffer::from_bytes(width, height, bytes)?
        } else if let Some(color) = background {
            PixelBuffer::filled(width, height, color)?
        } else if let Some(gradient) = gradient {
            PixelBuffer::from_gradient(width, height, |t| gradient(t))?
        } else {
            PixelBuffer::new(width, height)?
        };

        Ok(Self {
            buffer,
            mapper: CoordinateMapper::new(width, height),
            brush,
            session: None,
            tap_callback: None,
            change_listeners: Vec::new(),
        })
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn brush(&self) -> BrushState {
        self.brush
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Register the callback receiving one event per written pixel
    pub fn on_pixel_tap(&mut self, callback: impl FnMut(&PixelTapEvent) + 'static) {
        self.tap_callback = Some(Box::new(callback));
    }

    /// Register a listener called with the buffer after every mutation
    pub fn on_change(&mut self, listener: impl FnMut(&PixelBuffer) + 'static) {
        self.change_listeners.push(Box::new(listener));
    }

    /// Update the brush; size clamps to at least 1
    pub fn set_brush(&mut self, size: u32, color: Color) {
        self.brush = BrushState::new(size, color);
    }

    /// First contact of a stroke. Also accepted mid-drag, where it behaves
    /// like a move.
    pub fn pointer_down(&mut self, sample: PointerSample) {
        self.advance(sample);
    }

    /// Stroke continuation. While idle it starts a stroke, matching a host
    /// that reports motion before the first down event.
    pub fn pointer_move(&mut self, sample: PointerSample) {
        self.advance(sample);
    }

    /// End of stroke: clears the session, writes nothing.
    pub fn pointer_up(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("stroke end");
        }
    }

    /// Alias for hosts whose gesture vocabulary says "drag end"
    pub fn drag_end(&mut self) {
        self.pointer_up();
    }

    fn advance(&mut self, sample: PointerSample) {
        let target = self.mapper.to_pixel(&sample);
        let mut touched = false;

        match self.session {
            None => {
                tracing::debug!(x = target.x, y = target.y, "stroke start");
                touched |= self.stamp_at(target, &sample);
            }
            Some(last) => {
                for step in DragPath::new(last, target) {
                    touched |= self.stamp_at(step, &sample);
                }
            }
        }

        // Session tracks the mapped endpoint, not each intermediate step
        self.session = Some(target);
        if touched {
            self.notify_change();
        }
    }

    /// Stamp the brush at one grid cell; returns whether any pixel landed
    /// in bounds.
    fn stamp_at(&mut self, center: PixelCoord, sample: &PointerSample) -> bool {
        let mut wrote = false;
        for coord in stamp_coverage(center, self.brush.size) {
            let Some(index) = self.buffer.index_of(coord.x, coord.y) else {
                // Strokes may run past the canvas edge; clip, don't crash
                continue;
            };
            self.buffer.set(index, self.brush.color);
            wrote = true;
            if let Some(callback) = self.tap_callback.as_mut() {
                callback(&PixelTapEvent {
                    x: coord.x as u32,
                    y: coord.y as u32,
                    buffer_index: index,
                    raw_x: sample.x,
                    raw_y: sample.y,
                });
            }
        }
        wrote
    }

    /// Programmatic single-pixel write, independent of pointer flow.
    /// Out-of-range coordinates clip silently.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.buffer.index_of(x, y) {
            self.buffer.set(index, color);
        }
        self.notify_change();
    }

    /// Programmatic bulk replacement; strict about byte length.
    pub fn set_buffer(&mut self, bytes: Vec<u8>) -> Result<(), EditorError> {
        self.buffer.replace_bytes(bytes)?;
        tracing::debug!(bytes = self.buffer.bytes().len(), "pixel buffer replaced");
        self.notify_change();
        Ok(())
    }

    fn notify_change(&mut self) {
        let buffer = &self.buffer;
        for listener in &mut self.change_listeners {
            listener(buffer);
        }
    }
}
