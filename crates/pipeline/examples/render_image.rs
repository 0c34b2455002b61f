//! Render the NDVI map of a still image and save it next to the input.
//!
//! Usage: cargo run -p ndviz-pipeline --example render_image -- photo.png
//!
//! Writes `photo.ndvi.png` plus a `photo.legend.png` colorbar strip and
//! logs the value range the ramp was fitted to.

use std::path::Path;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ndviz_core::{Error, Result};
use ndviz_pipeline::{process_file, BufferSequence, FrameSlot};

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting tracing subscriber failed");

    let arg = std::env::args()
        .nth(1)
        .ok_or_else(|| Error::Other("usage: render_image <image.png|jpg>".to_string()))?;
    let path = Path::new(&arg);

    let mut sink = FrameSlot::new();
    process_file(path, &mut sink, |_: &Path| -> Result<BufferSequence> {
        Err(Error::UnsupportedMedia(
            "this example only handles still images".to_string(),
        ))
    })?;

    let shown = sink
        .latest()
        .ok_or_else(|| Error::Other("nothing was rendered".to_string()))?;

    info!(
        "{}: {}x{}, range [{:.3}, {:.3}]",
        shown.title,
        shown.frame.width,
        shown.frame.height,
        shown.frame.legend.min,
        shown.frame.legend.max
    );
    for (value, color) in shown.frame.legend.samples(5) {
        info!("  {:>7.3} -> #{:02x}{:02x}{:02x}", value, color.r, color.g, color.b);
    }

    let map_path = path.with_extension("ndvi.png");
    save_rgba(
        &map_path,
        shown.frame.width,
        shown.frame.height,
        shown.frame.pixels.clone(),
    )?;
    info!("Saved {}", map_path.display());

    let legend_path = path.with_extension("legend.png");
    save_rgba(&legend_path, 24, 256, shown.frame.legend.to_rgba(24, 256))?;
    info!("Saved {}", legend_path.display());

    Ok(())
}

fn save_rgba(path: &Path, width: usize, height: usize, pixels: Vec<u8>) -> Result<()> {
    let img = image::RgbaImage::from_raw(width as u32, height as u32, pixels)
        .ok_or_else(|| Error::Other("pixel buffer does not match dimensions".to_string()))?;
    img.save(path)?;
    Ok(())
}
