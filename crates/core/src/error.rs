//! Error types for ndviz

use thiserror::Error;

/// Main error type for ndviz operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Buffer length {len} does not match shape {rows}x{cols}x{channels}")]
    InvalidBufferShape {
        rows: usize,
        cols: usize,
        channels: usize,
        len: usize,
    },

    #[error("Index out of bounds: ({row}, {col}) in grid of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Grid size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch { er: usize, ec: usize, ar: usize, ac: usize },

    #[error("Channel {channel} out of range: buffer has {channels} channels")]
    ChannelOutOfRange { channel: usize, channels: usize },

    #[error("Buffer has {channels} channels, at least {required} required")]
    NotEnoughChannels { channels: usize, required: usize },

    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Decode(e.to_string())
    }
}

/// Result type alias for ndviz operations
pub type Result<T> = std::result::Result<T, Error>;
