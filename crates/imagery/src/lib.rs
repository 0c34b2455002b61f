//! # ndviz Imagery
//!
//! Vegetation-index computation for ndviz.
//!
//! The crate exposes [`ndvi`] for decoded pixel buffers and the generic
//! [`normalized_difference`] kernel it is built on.

pub mod indices;

pub use indices::{ndvi, normalized_difference};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::indices::{ndvi, normalized_difference};
    pub use ndviz_core::prelude::*;
}
