//! # ndviz Colormap
//!
//! Color mapping and grid-to-RGBA rendering for ndviz.
//!
//! Provides the diverging red-yellow-green ramp used for vegetation maps,
//! a generic multi-stop interpolation engine, and colorbar legends. The
//! main entry point is [`render`], which auto-scales a `Grid<T>` to its
//! observed range and returns RGBA pixels plus the matching legend.
//!
//! ## Usage
//!
//! ```ignore
//! use ndviz_colormap::{render, ColorScheme};
//!
//! let frame = render(&ndvi_map, ColorScheme::RdYlGn);
//! display.blit(frame.width, frame.height, &frame.pixels);
//! ```

mod legend;
mod render;
mod scheme;

pub use legend::ColorBar;
pub use render::{auto_params, grid_to_rgba, render, ColorMappedImage, ColormapParams};
pub use scheme::{evaluate, ColorScheme, ColorStop, Rgb};
