use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("window error: {0}")]
    Window(String),
}
