//! Decoded pixel buffers

use crate::error::{Error, Result};
use crate::grid::Grid;
use ndarray::{Array3, Axis};

/// Index of the red channel in a decoded buffer.
pub const CHANNEL_RED: usize = 0;

/// Index of the channel treated as near-infrared.
///
/// Consumer image formats carry no real NIR band, so the second color
/// channel (green in RGB order) stands in for it. Vegetation indices
/// computed from it are approximations until multispectral input exists.
pub const CHANNEL_NIR: usize = 1;

/// A decoded image held as a (rows, cols, channels) cube of 8-bit samples.
///
/// Channel order follows the decoder output: for RGB sources channel 0 is
/// red, channel 1 is green, channel 2 is blue.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw interleaved samples in row-major order
    pub fn from_vec(data: Vec<u8>, rows: usize, cols: usize, channels: usize) -> Result<Self> {
        if data.len() != rows * cols * channels {
            return Err(Error::InvalidBufferShape {
                rows,
                cols,
                channels,
                len: data.len(),
            });
        }

        let array = Array3::from_shape_vec((rows, cols, channels), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data: array })
    }

    /// Create a buffer from an ndarray cube
    pub fn from_array(data: Array3<u8>) -> Self {
        Self { data }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.dim().1
    }

    /// Number of channels per pixel
    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Dimensions as (rows, cols, channels)
    pub fn shape(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Whether the buffer holds no pixels
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Get the sample at (row, col, channel)
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Result<u8> {
        self.data
            .get((row, col, channel))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get a reference to the underlying cube
    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }

    /// Extract one channel as a float grid.
    ///
    /// Samples are promoted to `f64` so downstream arithmetic keeps
    /// fractional precision.
    pub fn band(&self, channel: usize) -> Result<Grid<f64>> {
        let channels = self.channels();
        if channel >= channels {
            return Err(Error::ChannelOutOfRange { channel, channels });
        }

        let plane = self.data.index_axis(Axis(2), channel);
        Ok(Grid::from_array(plane.map(|&v| f64::from(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = PixelBuffer::from_vec(vec![0u8; 2 * 3 * 3], 2, 3, 3).unwrap();
        assert_eq!(buffer.rows(), 2);
        assert_eq!(buffer.cols(), 3);
        assert_eq!(buffer.channels(), 3);
        assert_eq!(buffer.shape(), (2, 3, 3));
    }

    #[test]
    fn test_buffer_rejects_bad_length() {
        let result = PixelBuffer::from_vec(vec![0u8; 10], 2, 2, 3);
        assert!(matches!(
            result,
            Err(Error::InvalidBufferShape { len: 10, .. })
        ));
    }

    #[test]
    fn test_buffer_get() {
        // One pixel per channel value to pin the interleaved layout
        let buffer = PixelBuffer::from_vec(vec![10, 20, 30, 40, 50, 60], 1, 2, 3).unwrap();
        assert_eq!(buffer.get(0, 0, 0).unwrap(), 10);
        assert_eq!(buffer.get(0, 0, 2).unwrap(), 30);
        assert_eq!(buffer.get(0, 1, 1).unwrap(), 50);
        assert!(buffer.get(1, 0, 0).is_err());
    }

    #[test]
    fn test_band_extraction() {
        let buffer = PixelBuffer::from_vec(vec![10, 20, 30, 40, 50, 60], 1, 2, 3).unwrap();

        let red = buffer.band(CHANNEL_RED).unwrap();
        assert_eq!(red.shape(), (1, 2));
        assert_eq!(red.get(0, 0).unwrap(), 10.0);
        assert_eq!(red.get(0, 1).unwrap(), 40.0);

        let nir = buffer.band(CHANNEL_NIR).unwrap();
        assert_eq!(nir.get(0, 0).unwrap(), 20.0);
        assert_eq!(nir.get(0, 1).unwrap(), 50.0);
    }

    #[test]
    fn test_band_out_of_range() {
        let buffer = PixelBuffer::from_vec(vec![0u8; 4], 2, 2, 1).unwrap();
        assert!(matches!(
            buffer.band(1),
            Err(Error::ChannelOutOfRange { channel: 1, channels: 1 })
        ));
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = PixelBuffer::from_vec(Vec::new(), 0, 0, 3).unwrap();
        assert!(buffer.is_empty());
        assert!(buffer.band(CHANNEL_RED).unwrap().is_empty());
    }
}
