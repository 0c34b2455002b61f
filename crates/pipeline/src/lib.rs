//! # ndviz Pipeline
//!
//! Upload-to-display orchestration: classify a file, decode it, compute
//! NDVI, render with the diverging red-yellow-green ramp and hand the
//! frames to a [`DisplaySink`].
//!
//! Still images produce one frame titled "NDVI". Videos are decoded
//! sequentially; every frame is rendered and presented as "NDVI Frame",
//! each one superseding the last, until the source is exhausted.

pub mod display;
pub mod media;
pub mod source;

use std::path::Path;

use tracing::{debug, info};

use ndviz_colormap::{render, ColorScheme};
use ndviz_core::io::read_image;
use ndviz_core::{PixelBuffer, Result};
use ndviz_imagery::ndvi;

pub use display::{DisplaySink, FrameSlot, PresentedFrame, IMAGE_TITLE, VIDEO_FRAME_TITLE};
pub use media::{MediaKind, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
pub use source::{BufferSequence, FrameSource, StillSequence};

/// Compute NDVI for a decoded still image and present the rendered map.
///
/// The color range is fitted to this image's NDVI values; the presented
/// frame carries a legend covering that range.
pub fn process_image<S: DisplaySink>(buffer: &PixelBuffer, sink: &mut S) -> Result<()> {
    info!("Calculating NDVI for {}x{} image", buffer.cols(), buffer.rows());
    let map = ndvi(buffer)?;
    let stats = map.statistics();
    info!(
        "NDVI map {}x{} (min={}, max={})",
        map.cols(),
        map.rows(),
        stats.min.map(|v| format!("{:.3}", v)).unwrap_or_default(),
        stats.max.map(|v| format!("{:.3}", v)).unwrap_or_default(),
    );

    let frame = render(&map, ColorScheme::RdYlGn);
    sink.present(frame, IMAGE_TITLE)
}

/// Decode a still image from disk and present its NDVI rendering.
pub fn process_image_file<P: AsRef<Path>, S: DisplaySink>(path: P, sink: &mut S) -> Result<()> {
    let path = path.as_ref();
    debug!("Decoding {}", path.display());
    let buffer = read_image(path)?;
    process_image(&buffer, sink)
}

/// Process a video stream frame by frame.
///
/// Every decoded frame goes through NDVI and rendering and is presented
/// immediately, replacing the previous frame. Rendering is rescaled per
/// frame, so each frame's own value range spans the full ramp.
///
/// The source is consumed; it is dropped (and with it any decoder
/// handle) whether the stream ends normally or a frame fails.
///
/// Returns the number of frames presented.
pub fn process_video<D: FrameSource, S: DisplaySink>(mut source: D, sink: &mut S) -> Result<usize> {
    let mut frames = 0usize;

    while let Some(buffer) = source.next_frame()? {
        let map = ndvi(&buffer)?;
        debug!("Frame {}: {}x{}", frames, map.cols(), map.rows());

        let frame = render(&map, ColorScheme::RdYlGn);
        sink.present(frame, VIDEO_FRAME_TITLE)?;
        frames += 1;
    }

    info!("Processed {} video frames", frames);
    Ok(frames)
}

/// Process an uploaded file end to end.
///
/// The extension decides the path: still images are decoded with the
/// built-in decoder, videos go through the frame source produced by
/// `open_video`. Unsupported files are rejected before any decoding.
pub fn process_file<P, S, F, D>(path: P, sink: &mut S, open_video: F) -> Result<()>
where
    P: AsRef<Path>,
    S: DisplaySink,
    F: FnOnce(&Path) -> Result<D>,
    D: FrameSource,
{
    let path = path.as_ref();
    let kind = MediaKind::from_path(path)?;
    debug!("{} classified as {:?}", path.display(), kind);
    match kind {
        MediaKind::Image => process_image_file(path, sink),
        MediaKind::Video => {
            let source = open_video(path)?;
            process_video(source, sink)?;
            Ok(())
        }
    }
}
