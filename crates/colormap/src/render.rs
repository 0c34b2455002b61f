//! Grid-to-RGBA rendering using color schemes.

use crate::legend::ColorBar;
use crate::scheme::{evaluate, ColorScheme, Rgb};
use ndviz_core::{Grid, GridElement};

/// Parameters for colormap rendering.
#[derive(Debug, Clone)]
pub struct ColormapParams {
    /// Color scheme to use.
    pub scheme: ColorScheme,
    /// Minimum value for normalization. Values below this are clamped.
    pub min: f64,
    /// Maximum value for normalization. Values above this are clamped.
    pub max: f64,
    /// Color for nodata pixels (RGBA). Default: fully transparent.
    pub nodata_color: [u8; 4],
}

impl ColormapParams {
    /// Create params with the given scheme; min/max must be set separately
    /// or use [`auto_params`] to detect from data.
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            min: 0.0,
            max: 1.0,
            nodata_color: [0, 0, 0, 0],
        }
    }

    /// Create params with explicit min/max range.
    pub fn with_range(scheme: ColorScheme, min: f64, max: f64) -> Self {
        Self {
            scheme,
            min,
            max,
            nodata_color: [0, 0, 0, 0],
        }
    }
}

/// Auto-detect min/max from a grid, returning `ColormapParams` ready to use.
///
/// Scans all valid (non-nodata) cells to find the data range. The range is
/// refitted on every call, so successive frames each stretch their own
/// observed values across the full ramp.
pub fn auto_params<T: GridElement>(grid: &Grid<T>, scheme: ColorScheme) -> ColormapParams {
    let nodata = grid.nodata();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for val in grid.data().iter() {
        if val.is_nodata(nodata) {
            continue;
        }
        if let Some(v) = val.to_f64() {
            if v.is_finite() {
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
            }
        }
    }

    // Handle edge case: all nodata or constant grid
    if !min.is_finite() || !max.is_finite() {
        min = 0.0;
        max = 1.0;
    } else if (max - min).abs() < f64::EPSILON {
        max = min + 1.0;
    }

    ColormapParams::with_range(scheme, min, max)
}

/// Convert a grid to an RGBA pixel buffer.
///
/// Returns a `Vec<u8>` of length `rows * cols * 4` in row-major order,
/// suitable for uploading as a GPU texture or encoding as an image.
///
/// Nodata pixels are rendered with `params.nodata_color` (default: transparent black).
pub fn grid_to_rgba<T: GridElement>(grid: &Grid<T>, params: &ColormapParams) -> Vec<u8> {
    let rows = grid.rows();
    let cols = grid.cols();
    let nodata = grid.nodata();
    let range = params.max - params.min;
    let inv_range = if range.abs() > f64::EPSILON {
        1.0 / range
    } else {
        1.0
    };

    let mut rgba = vec![0u8; rows * cols * 4];

    for (i, val) in grid.data().iter().enumerate() {
        let offset = i * 4;

        if val.is_nodata(nodata) {
            rgba[offset] = params.nodata_color[0];
            rgba[offset + 1] = params.nodata_color[1];
            rgba[offset + 2] = params.nodata_color[2];
            rgba[offset + 3] = params.nodata_color[3];
            continue;
        }

        match val.to_f64() {
            Some(v) if v.is_finite() => {
                let t = (v - params.min) * inv_range;
                let Rgb { r, g, b } = evaluate(params.scheme, t);
                rgba[offset] = r;
                rgba[offset + 1] = g;
                rgba[offset + 2] = b;
                rgba[offset + 3] = 255;
            }
            _ => {
                // NaN or conversion failure -> nodata color
                rgba[offset] = params.nodata_color[0];
                rgba[offset + 1] = params.nodata_color[1];
                rgba[offset + 2] = params.nodata_color[2];
                rgba[offset + 3] = params.nodata_color[3];
            }
        }
    }

    rgba
}

/// A rendered frame: RGBA pixels plus the legend describing the
/// value-to-color mapping that was applied.
#[derive(Debug, Clone)]
pub struct ColorMappedImage {
    /// Width in pixels (columns)
    pub width: usize,
    /// Height in pixels (rows)
    pub height: usize,
    /// RGBA bytes in row-major order, `width * height * 4` long
    pub pixels: Vec<u8>,
    /// Legend for the applied mapping
    pub legend: ColorBar,
}

/// Render a grid with per-call auto-scaling.
///
/// Fits the color range to the observed min/max of this grid (see
/// [`auto_params`] for the degenerate-range fallbacks) and attaches a
/// [`ColorBar`] legend covering the same range.
pub fn render<T: GridElement>(grid: &Grid<T>, scheme: ColorScheme) -> ColorMappedImage {
    let params = auto_params(grid, scheme);
    let pixels = grid_to_rgba(grid, &params);

    ColorMappedImage {
        width: grid.cols(),
        height: grid.rows(),
        pixels,
        legend: ColorBar::new(scheme, params.min, params.max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_to_rgba_basic() {
        let mut g = Grid::<f64>::new(2, 2);
        g.set(0, 0, 0.0).unwrap();
        g.set(0, 1, 0.5).unwrap();
        g.set(1, 0, 1.0).unwrap();
        g.set(1, 1, f64::NAN).unwrap();
        g.set_nodata(Some(f64::NAN));

        let params = ColormapParams::with_range(ColorScheme::Grayscale, 0.0, 1.0);
        let rgba = grid_to_rgba(&g, &params);

        assert_eq!(rgba.len(), 16); // 4 pixels * 4 bytes

        // pixel (0,0) = 0.0 -> black, opaque
        assert_eq!(rgba[0], 0);
        assert_eq!(rgba[1], 0);
        assert_eq!(rgba[2], 0);
        assert_eq!(rgba[3], 255);

        // pixel (0,1) = 0.5 -> gray, opaque
        assert_eq!(rgba[4], 128);
        assert_eq!(rgba[5], 128);
        assert_eq!(rgba[6], 128);
        assert_eq!(rgba[7], 255);

        // pixel (1,0) = 1.0 -> white, opaque
        assert_eq!(rgba[8], 255);
        assert_eq!(rgba[9], 255);
        assert_eq!(rgba[10], 255);
        assert_eq!(rgba[11], 255);

        // pixel (1,1) = NaN -> transparent
        assert_eq!(rgba[12], 0);
        assert_eq!(rgba[13], 0);
        assert_eq!(rgba[14], 0);
        assert_eq!(rgba[15], 0);
    }

    #[test]
    fn auto_params_range() {
        let mut g = Grid::<f64>::new(1, 3);
        g.set(0, 0, 10.0).unwrap();
        g.set(0, 1, 50.0).unwrap();
        g.set(0, 2, 100.0).unwrap();

        let params = auto_params(&g, ColorScheme::RdYlGn);
        assert!((params.min - 10.0).abs() < f64::EPSILON);
        assert!((params.max - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn auto_params_all_nodata() {
        let mut g = Grid::<f64>::new(1, 2);
        g.set(0, 0, f64::NAN).unwrap();
        g.set(0, 1, f64::NAN).unwrap();
        g.set_nodata(Some(f64::NAN));

        let params = auto_params(&g, ColorScheme::RdYlGn);
        assert!((params.min - 0.0).abs() < f64::EPSILON);
        assert!((params.max - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn auto_params_constant_grid() {
        let g = Grid::<f64>::filled(2, 2, 42.0);
        let params = auto_params(&g, ColorScheme::RdYlGn);
        assert!((params.min - 42.0).abs() < f64::EPSILON);
        assert!((params.max - 43.0).abs() < f64::EPSILON);
    }

    #[test]
    fn auto_params_ignores_infinities() {
        let mut g = Grid::<f64>::new(1, 3);
        g.set(0, 0, f64::NEG_INFINITY).unwrap();
        g.set(0, 1, 5.0).unwrap();
        g.set(0, 2, f64::INFINITY).unwrap();

        let params = auto_params(&g, ColorScheme::RdYlGn);
        assert!((params.min - 5.0).abs() < f64::EPSILON);
        assert!((params.max - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn render_stretches_to_observed_range() {
        // Values span [-0.5, 0.5]; extremes must hit the ramp endpoints
        let g = {
            let mut g = Grid::<f64>::new(1, 2);
            g.set(0, 0, -0.5).unwrap();
            g.set(0, 1, 0.5).unwrap();
            g
        };

        let frame = render(&g, ColorScheme::RdYlGn);
        assert_eq!(frame.width, 2);
        assert_eq!(frame.height, 1);
        assert_eq!(&frame.pixels[0..4], &[165, 0, 38, 255]);
        assert_eq!(&frame.pixels[4..8], &[0, 104, 55, 255]);
        assert!((frame.legend.min + 0.5).abs() < f64::EPSILON);
        assert!((frame.legend.max - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn render_rescales_per_call() {
        // Same scheme, different data: each call fits its own range
        let narrow = Grid::<f64>::from_vec(vec![0.2, 0.4], 1, 2).unwrap();
        let wide = Grid::<f64>::from_vec(vec![-1.0, 1.0], 1, 2).unwrap();

        let a = render(&narrow, ColorScheme::RdYlGn);
        let b = render(&wide, ColorScheme::RdYlGn);

        // Both maxima map to the top of the ramp despite different values
        assert_eq!(&a.pixels[4..8], &b.pixels[4..8]);
        assert!((a.legend.max - 0.4).abs() < f64::EPSILON);
        assert!((b.legend.max - 1.0).abs() < f64::EPSILON);
    }
}
