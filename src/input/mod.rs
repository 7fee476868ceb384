//! Input module - pointer samples, phase bookkeeping, and grid mapping

mod mapper;

pub use mapper::CoordinateMapper;

use serde::{Deserialize, Serialize};

/// One pointer reading in host display units.
///
/// The viewport dimensions travel with every sample because hosts may resize
/// the rendered widget between events; the mapper must never cache them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointerSample {
    /// X position within the viewport
    pub x: f32,
    /// Y position within the viewport
    pub y: f32,
    /// Rendered viewport width at the time of the event
    pub viewport_w: f32,
    /// Rendered viewport height at the time of the event
    pub viewport_h: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            x,
            y,
            viewport_w,
            viewport_h,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Turns a polled button state into down/move/up transitions.
///
/// Hosts that deliver edge-triggered pointer events can call the controller
/// directly; hosts that only expose "is the button down right now" (the
/// minifb demo) run each poll through this tracker first.
#[derive(Debug, Default)]
pub struct PhaseTracker {
    in_contact: bool,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, pressed: bool) -> Option<PointerPhase> {
        let phase = match (self.in_contact, pressed) {
            (false, true) => Some(PointerPhase::Down),
            (true, true) => Some(PointerPhase::Move),
            (true, false) => Some(PointerPhase::Up),
            (false, false) => None,
        };
        self.in_contact = pressed;
        phase
    }
}
