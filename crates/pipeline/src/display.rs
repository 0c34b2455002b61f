//! Display sink abstraction

use ndviz_colormap::ColorMappedImage;
use ndviz_core::Result;

/// Title shown with a rendered still image.
pub const IMAGE_TITLE: &str = "NDVI";

/// Title shown with rendered video frames.
pub const VIDEO_FRAME_TITLE: &str = "NDVI Frame";

/// Receiver for rendered frames.
///
/// The pipeline computes and renders; where the result appears is up to
/// the host. Each presented frame supersedes the previous one, so sinks
/// show results as they arrive instead of accumulating them.
pub trait DisplaySink {
    /// Present a rendered frame under the given title.
    fn present(&mut self, frame: ColorMappedImage, title: &str) -> Result<()>;
}

/// A frame together with the title it was presented under.
#[derive(Debug, Clone)]
pub struct PresentedFrame {
    pub title: String,
    pub frame: ColorMappedImage,
}

/// Sink that keeps only the most recently presented frame.
///
/// Models an in-place display slot: hosts poll [`FrameSlot::latest`] and
/// draw whatever is there. Also convenient as a capture sink in tests.
#[derive(Debug, Default)]
pub struct FrameSlot {
    latest: Option<PresentedFrame>,
    presented: usize,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently presented frame, if any.
    pub fn latest(&self) -> Option<&PresentedFrame> {
        self.latest.as_ref()
    }

    /// Total number of frames presented so far.
    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl DisplaySink for FrameSlot {
    fn present(&mut self, frame: ColorMappedImage, title: &str) -> Result<()> {
        self.latest = Some(PresentedFrame {
            title: title.to_string(),
            frame,
        });
        self.presented += 1;
        Ok(())
    }
}
