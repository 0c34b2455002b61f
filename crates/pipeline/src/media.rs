//! Upload classification

use std::path::Path;

use ndviz_core::{Error, Result};

/// Still-image extensions accepted by the upload filter.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Video extensions accepted by the upload filter.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mpeg", "mov"];

/// Media categories the pipeline knows how to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a file by its extension, case-insensitively.
    ///
    /// Anything outside [`IMAGE_EXTENSIONS`] and [`VIDEO_EXTENSIONS`] is
    /// rejected, including paths with no extension at all.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .ok_or_else(|| Error::UnsupportedMedia(path.display().to_string()))?;

        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::Image)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::Video)
        } else {
            Err(Error::UnsupportedMedia(ext))
        }
    }

    /// Classify by MIME type prefix: `image/...` or `video/...`.
    ///
    /// Upload widgets usually report a full MIME type; only the part
    /// before the slash decides the processing path.
    pub fn from_mime(mime: &str) -> Result<Self> {
        match mime.split('/').next() {
            Some("image") => Ok(Self::Image),
            Some("video") => Ok(Self::Video),
            _ => Err(Error::UnsupportedMedia(mime.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions() {
        for ext in ["jpg", "jpeg", "png"] {
            let path = format!("field.{}", ext);
            assert_eq!(MediaKind::from_path(&path).unwrap(), MediaKind::Image);
        }
    }

    #[test]
    fn test_video_extensions() {
        for ext in ["mp4", "mpeg", "mov"] {
            let path = format!("survey.{}", ext);
            assert_eq!(MediaKind::from_path(&path).unwrap(), MediaKind::Video);
        }
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(
            MediaKind::from_path("IMG_0001.JPG").unwrap(),
            MediaKind::Image
        );
        assert_eq!(
            MediaKind::from_path("clip.MOV").unwrap(),
            MediaKind::Video
        );
    }

    #[test]
    fn test_unknown_extension_rejected() {
        assert!(matches!(
            MediaKind::from_path("scan.gif"),
            Err(Error::UnsupportedMedia(_))
        ));
        assert!(matches!(
            MediaKind::from_path("notes.txt"),
            Err(Error::UnsupportedMedia(_))
        ));
    }

    #[test]
    fn test_missing_extension_rejected() {
        assert!(MediaKind::from_path("README").is_err());
    }

    #[test]
    fn test_mime_prefix() {
        assert_eq!(MediaKind::from_mime("image/png").unwrap(), MediaKind::Image);
        assert_eq!(
            MediaKind::from_mime("image/jpeg").unwrap(),
            MediaKind::Image
        );
        assert_eq!(
            MediaKind::from_mime("video/quicktime").unwrap(),
            MediaKind::Video
        );
        assert!(MediaKind::from_mime("application/pdf").is_err());
        assert!(MediaKind::from_mime("").is_err());
    }
}
