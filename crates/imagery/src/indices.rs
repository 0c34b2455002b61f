//! Normalized difference vegetation index
//!
//! NDVI computed per pixel from the red and stand-in NIR channels of a
//! decoded buffer, or from any pair of single-band grids.

use ndarray::Array2;
use ndviz_core::buffer::{PixelBuffer, CHANNEL_NIR, CHANNEL_RED};
use ndviz_core::grid::Grid;
use ndviz_core::{Error, Result};
use rayon::prelude::*;

// ---------------------------------------------------------------------------
// Generic normalized difference
// ---------------------------------------------------------------------------

/// Compute the normalized difference between two bands:
///
/// `(band_a - band_b) / (band_a + band_b)`
///
/// Result is in the range [-1, 1]. Pixels where both bands are zero
/// or either is nodata are set to NaN.
///
/// # Arguments
/// * `band_a` - Numerator positive band
/// * `band_b` - Numerator negative band
pub fn normalized_difference(band_a: &Grid<f64>, band_b: &Grid<f64>) -> Result<Grid<f64>> {
    check_dimensions(band_a, band_b)?;

    let (rows, cols) = band_a.shape();
    let nodata_a = band_a.nodata();
    let nodata_b = band_b.nodata();

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![f64::NAN; cols];
            for col in 0..cols {
                let a = unsafe { band_a.get_unchecked(row, col) };
                let b = unsafe { band_b.get_unchecked(row, col) };

                if is_nodata_f64(a, nodata_a) || is_nodata_f64(b, nodata_b) {
                    continue;
                }

                let sum = a + b;
                if sum.abs() < 1e-10 {
                    continue; // Avoid division by zero
                }

                row_data[col] = (a - b) / sum;
            }
            row_data
        })
        .collect();

    build_output(rows, cols, data)
}

// ---------------------------------------------------------------------------
// NDVI
// ---------------------------------------------------------------------------

/// Normalized Difference Vegetation Index
///
/// `NDVI = (NIR - Red) / (NIR + Red)`
///
/// Values range from -1 to 1:
/// - Dense vegetation: 0.6 to 0.9
/// - Sparse vegetation: 0.2 to 0.5
/// - Bare soil: 0.1 to 0.2
/// - Water/clouds: -1.0 to 0.0
///
/// The red band is read from [`CHANNEL_RED`] and the NIR band from
/// [`CHANNEL_NIR`]. With RGB input the latter is the green channel, a
/// stand-in until multispectral sources are wired up, so absolute values
/// are indicative only.
///
/// Pixels where red + NIR is zero come back as NaN; renderers treat NaN
/// as nodata.
pub fn ndvi(buffer: &PixelBuffer) -> Result<Grid<f64>> {
    let channels = buffer.channels();
    if channels < 2 {
        return Err(Error::NotEnoughChannels {
            channels,
            required: 2,
        });
    }

    let nir = buffer.band(CHANNEL_NIR)?;
    let red = buffer.band(CHANNEL_RED)?;
    normalized_difference(&nir, &red)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn is_nodata_f64(value: f64, nodata: Option<f64>) -> bool {
    if value.is_nan() {
        return true;
    }
    match nodata {
        Some(nd) => (value - nd).abs() < f64::EPSILON,
        None => false,
    }
}

fn check_dimensions(a: &Grid<f64>, b: &Grid<f64>) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(Error::SizeMismatch {
            er: a.rows(),
            ec: a.cols(),
            ar: b.rows(),
            ac: b.cols(),
        });
    }
    Ok(())
}

fn build_output(rows: usize, cols: usize, data: Vec<f64>) -> Result<Grid<f64>> {
    let array =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    let mut output = Grid::from_array(array);
    output.set_nodata(Some(f64::NAN));
    Ok(output)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
