//! Sequential frame sources for video processing

use std::path::PathBuf;
use std::vec;

use ndviz_core::io::read_image;
use ndviz_core::{PixelBuffer, Result};

/// A sequential supplier of decoded video frames.
///
/// `next_frame` yields buffers until the stream ends, then returns
/// `Ok(None)`. Implementations holding a decoder handle must release it
/// in `Drop`; the pipeline consumes sources by value, so the handle is
/// closed on every exit path, including mid-stream errors.
pub trait FrameSource {
    /// Decode and return the next frame, or `None` at end of stream.
    fn next_frame(&mut self) -> Result<Option<PixelBuffer>>;
}

/// Frame source over pre-decoded buffers.
#[derive(Debug)]
pub struct BufferSequence {
    frames: vec::IntoIter<PixelBuffer>,
}

impl BufferSequence {
    pub fn new(frames: Vec<PixelBuffer>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }
}

impl FrameSource for BufferSequence {
    fn next_frame(&mut self) -> Result<Option<PixelBuffer>> {
        Ok(self.frames.next())
    }
}

/// Frame source that decodes a list of still images one at a time.
///
/// Stands in for a real video decoder when the frames already exist as
/// image files, e.g. frame dumps or test fixtures.
#[derive(Debug)]
pub struct StillSequence {
    paths: vec::IntoIter<PathBuf>,
}

impl StillSequence {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths: paths.into_iter(),
        }
    }
}

impl FrameSource for StillSequence {
    fn next_frame(&mut self) -> Result<Option<PixelBuffer>> {
        match self.paths.next() {
            Some(path) => read_image(path).map(Some),
            None => Ok(None),
        }
    }
}
