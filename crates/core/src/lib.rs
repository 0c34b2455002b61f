//! # ndviz Core
//!
//! Core types and I/O for the ndviz vegetation-index library.
//!
//! This crate provides:
//! - `Grid<T>`: Generic 2D sample grid
//! - `PixelBuffer`: Decoded multi-channel image cube
//! - `GridElement`: Trait for supported sample types
//! - Decoding of still images into pixel buffers

pub mod buffer;
pub mod element;
pub mod error;
pub mod grid;
pub mod io;

pub use buffer::{PixelBuffer, CHANNEL_NIR, CHANNEL_RED};
pub use element::GridElement;
pub use error::{Error, Result};
pub use grid::{Grid, GridStatistics};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::buffer::{PixelBuffer, CHANNEL_NIR, CHANNEL_RED};
    pub use crate::element::GridElement;
    pub use crate::error::{Error, Result};
    pub use crate::grid::{Grid, GridStatistics};
}
