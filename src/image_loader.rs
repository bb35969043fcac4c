// Image loading module
// Handles decoding images from their source and encoding them as PNG

use image::{DynamicImage, ImageFormat, ImageResult, Rgba, RgbaImage};
use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Width of the blank canvas created by the "new" command
pub const BLANK_WIDTH: u32 = 800;

/// Height of the blank canvas created by the "new" command
pub const BLANK_HEIGHT: u32 = 600;

/// File extensions the file picker accepts
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Where the current image comes from.
///
/// Rotations are always re-derived from this, not from the displayed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    /// Built-in blank canvas
    Placeholder,
    /// Image file on disk
    File(PathBuf),
}

impl SourceRef {
    /// Path used in error reports
    pub fn path(&self) -> PathBuf {
        match self {
            SourceRef::Placeholder => PathBuf::from("<blank>"),
            SourceRef::File(path) => path.clone(),
        }
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRef::Placeholder => f.write_str("<blank>"),
            SourceRef::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Decode the image a source refers to
pub fn load_source(source: &SourceRef) -> ImageResult<DynamicImage> {
    match source {
        SourceRef::Placeholder => Ok(blank_canvas()),
        SourceRef::File(path) => {
            let data = fs::read(path)?;
            load_from_bytes(&data)
        }
    }
}

/// Opaque white canvas used as the placeholder image
pub fn blank_canvas() -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        BLANK_WIDTH,
        BLANK_HEIGHT,
        Rgba([255, 255, 255, 255]),
    ))
}

/// Load an image from raw bytes, auto-detecting the format
fn load_from_bytes(data: &[u8]) -> ImageResult<DynamicImage> {
    let format = image::guess_format(data)?;
    image::load(Cursor::new(data), format)
}

/// Encode an image as PNG, replacing any file already at `path`
pub fn save_png(img: &DynamicImage, path: &Path) -> ImageResult<()> {
    img.save_with_format(path, ImageFormat::Png)
}

/// Get the image format for a file extension the picker accepts
pub fn format_from_extension(ext: &str) -> Option<ImageFormat> {
    match ext.to_lowercase().as_str() {
        "png" => Some(ImageFormat::Png),
        "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
        _ => None,
    }
}

/// Whether a path has one of the accepted extensions
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(format_from_extension)
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn blank_canvas_is_white() {
        let img = blank_canvas().to_rgba8();
        assert_eq!(img.dimensions(), (BLANK_WIDTH, BLANK_HEIGHT));
        assert!(img.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn load_source_reads_png_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("small.png");
        let buf = RgbaImage::from_pixel(3, 5, Rgba([10, 20, 30, 255]));
        buf.save(&path).expect("failed to write fixture");

        let img = load_source(&SourceRef::File(path)).expect("failed to load");
        assert_eq!((img.width(), img.height()), (3, 5));
    }

    #[test]
    fn load_source_rejects_garbage() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.png");
        fs::write(&path, b"not an image at all").expect("failed to write fixture");

        assert!(load_source(&SourceRef::File(path)).is_err());
    }

    #[test]
    fn load_source_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load_source(&SourceRef::File(dir.path().join("missing.jpg")))
            .expect_err("missing file should fail");
        assert!(matches!(err, image::ImageError::IoError(_)));
    }

    #[test]
    fn extension_filter() {
        assert!(is_supported(Path::new("/a/b/photo.PNG")));
        assert!(is_supported(Path::new("shot.jpeg")));
        assert!(is_supported(Path::new("shot.jpg")));
        assert!(!is_supported(Path::new("anim.gif")));
        assert!(!is_supported(Path::new("noext")));
    }
}
