//! Still-image decoding (PNG, JPEG)

use crate::buffer::PixelBuffer;
use crate::error::Result;
use std::path::Path;

/// Decode a still image from disk into a pixel buffer.
///
/// The decoded image is converted to 8-bit RGB, so the result always has
/// three channels regardless of the source color type.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let img = image::open(path.as_ref())?.into_rgb8();
    buffer_from_rgb(img)
}

/// Decode a still image from an in-memory byte buffer.
///
/// Same conversion rules as [`read_image`], for callers that hold the
/// upload in memory instead of on disk.
pub fn read_image_from_buffer(data: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(data)?.into_rgb8();
    buffer_from_rgb(img)
}

fn buffer_from_rgb(img: image::RgbImage) -> Result<PixelBuffer> {
    let (width, height) = img.dimensions();
    PixelBuffer::from_vec(img.into_raw(), height as usize, width as usize, 3)
}
