//! Colorbar legends for rendered grids.

use crate::scheme::{evaluate, ColorScheme, Rgb};

/// Legend describing the value-to-color mapping applied to a frame.
///
/// `min` maps to the bottom of the ramp and `max` to the top. Hosts can
/// read the endpoints directly, sample the mapping for tick labels, or
/// rasterize a colorbar strip to draw next to the frame.
#[derive(Debug, Clone)]
pub struct ColorBar {
    /// Scheme the frame was rendered with.
    pub scheme: ColorScheme,
    /// Value mapped to the bottom of the ramp.
    pub min: f64,
    /// Value mapped to the top of the ramp.
    pub max: f64,
}

impl ColorBar {
    pub fn new(scheme: ColorScheme, min: f64, max: f64) -> Self {
        Self { scheme, min, max }
    }

    /// Value at normalized position `t` ∈ [0, 1] along the bar.
    pub fn value_at(&self, t: f64) -> f64 {
        self.min + (self.max - self.min) * t
    }

    /// Sample the mapping at `n` evenly spaced positions, lowest value
    /// first. `n` is clamped to at least 2 so both endpoints appear.
    pub fn samples(&self, n: usize) -> Vec<(f64, Rgb)> {
        let n = n.max(2);
        (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                (self.value_at(t), evaluate(self.scheme, t))
            })
            .collect()
    }

    /// Rasterize a vertical colorbar strip as RGBA bytes.
    ///
    /// Returns `width * height * 4` bytes in row-major order with the
    /// maximum value at the top, matching the usual colorbar layout.
    pub fn to_rgba(&self, width: usize, height: usize) -> Vec<u8> {
        let mut rgba = vec![0u8; width * height * 4];
        let denom = height.saturating_sub(1).max(1) as f64;

        for row in 0..height {
            let t = 1.0 - row as f64 / denom;
            let Rgb { r, g, b } = evaluate(self.scheme, t);
            for col in 0..width {
                let offset = (row * width + col) * 4;
                rgba[offset] = r;
                rgba[offset + 1] = g;
                rgba[offset + 2] = b;
                rgba[offset + 3] = 255;
            }
        }

        rgba
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_at_endpoints() {
        let bar = ColorBar::new(ColorScheme::RdYlGn, -1.0, 1.0);
        assert_eq!(bar.value_at(0.0), -1.0);
        assert_eq!(bar.value_at(1.0), 1.0);
        assert_eq!(bar.value_at(0.5), 0.0);
    }

    #[test]
    fn samples_cover_both_endpoints() {
        let bar = ColorBar::new(ColorScheme::RdYlGn, -1.0, 1.0);
        let samples = bar.samples(5);

        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], (-1.0, Rgb::new(165, 0, 38)));
        assert_eq!(samples[2], (0.0, Rgb::new(255, 255, 191)));
        assert_eq!(samples[4], (1.0, Rgb::new(0, 104, 55)));
    }

    #[test]
    fn samples_clamp_small_n() {
        let bar = ColorBar::new(ColorScheme::Grayscale, 0.0, 10.0);
        assert_eq!(bar.samples(0).len(), 2);
    }

    #[test]
    fn strip_has_max_at_top() {
        let bar = ColorBar::new(ColorScheme::RdYlGn, 0.0, 1.0);
        let rgba = bar.to_rgba(2, 3);

        assert_eq!(rgba.len(), 24);
        // top row -> t = 1.0
        assert_eq!(&rgba[0..4], &[0, 104, 55, 255]);
        // middle row -> t = 0.5
        assert_eq!(&rgba[8..12], &[255, 255, 191, 255]);
        // bottom row -> t = 0.0
        assert_eq!(&rgba[16..20], &[165, 0, 38, 255]);
    }

    #[test]
    fn single_row_strip() {
        let bar = ColorBar::new(ColorScheme::Grayscale, 0.0, 1.0);
        let rgba = bar.to_rgba(1, 1);
        assert_eq!(&rgba, &[255, 255, 255, 255]);
    }
}
