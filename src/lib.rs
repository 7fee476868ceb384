//! Pixelpad - a fixed-resolution pixel-art drawing widget
//!
//! The editing core owns an RGBA raster buffer and turns continuous pointer
//! input into discrete pixel writes: viewport-to-grid mapping, a lattice
//! walk so fast drags never skip cells, and circular brush stamping. The
//! render side composes the buffer into window-presentable frames; the
//! `pixel_demo` binary wires both into an interactive window.

pub mod brush;
pub mod canvas;
pub mod editor;
pub mod error;
pub mod input;
pub mod palette;
pub mod render;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for binaries embedding the widget
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixelpad=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("pixelpad initializing...");
}
