//! Color schemes and multi-stop interpolation engine.

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color stop: position in [0, 1] mapped to an RGB color.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub t: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(t: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            t,
            color: Rgb::new(r, g, b),
        }
    }
}

/// Available color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// Red -> Yellow -> Green diverging ramp (vegetation indices)
    RdYlGn,
    /// Black -> White
    Grayscale,
}

impl ColorScheme {
    /// All available schemes, useful for UI combo boxes.
    pub const ALL: &'static [ColorScheme] = &[Self::RdYlGn, Self::Grayscale];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RdYlGn => "Red-Yellow-Green",
            Self::Grayscale => "Grayscale",
        }
    }
}

// ─── Color stop definitions ────────────────────────────────────────────

/// ColorBrewer RdYlGn, 11 classes. Low values read as red (sparse or
/// stressed cover), the midpoint as pale yellow, high values as green.
const RDYLGN_STOPS: &[ColorStop] = &[
    ColorStop::new(0.0, 165, 0, 38),
    ColorStop::new(0.1, 215, 48, 39),
    ColorStop::new(0.2, 244, 109, 67),
    ColorStop::new(0.3, 253, 174, 97),
    ColorStop::new(0.4, 254, 224, 139),
    ColorStop::new(0.5, 255, 255, 191),
    ColorStop::new(0.6, 217, 239, 139),
    ColorStop::new(0.7, 166, 217, 106),
    ColorStop::new(0.8, 102, 189, 99),
    ColorStop::new(0.9, 26, 152, 80),
    ColorStop::new(1.0, 0, 104, 55),
];

// ─── Interpolation engine ──────────────────────────────────────────────

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp(c1.r as f64, c2.r as f64, t).round() as u8,
        lerp(c1.g as f64, c2.g as f64, t).round() as u8,
        lerp(c1.b as f64, c2.b as f64, t).round() as u8,
    )
}

fn multi_stop(stops: &[ColorStop], t: f64) -> Rgb {
    if t <= 0.0 {
        return stops[0].color;
    }
    if t >= 1.0 {
        return stops[stops.len() - 1].color;
    }
    for i in 1..stops.len() {
        if t <= stops[i].t {
            let ratio = (t - stops[i - 1].t) / (stops[i].t - stops[i - 1].t);
            return lerp_color(stops[i - 1].color, stops[i].color, ratio);
        }
    }
    stops[stops.len() - 1].color
}

/// Evaluate a color scheme at normalized position `t` ∈ [0, 1].
///
/// For `RdYlGn` this performs multi-stop linear interpolation.
/// For `Grayscale`, a simple linear ramp is used.
pub fn evaluate(scheme: ColorScheme, t: f64) -> Rgb {
    match scheme {
        ColorScheme::RdYlGn => multi_stop(RDYLGN_STOPS, t),
        ColorScheme::Grayscale => {
            let v = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
            Rgb::new(v, v, v)
        }
    }
}
