/// Image decoding
///
/// Decodes an image file into RGBA pixels wrapped in an iced handle, plus the
/// native dimensions the display layer scales from. Decoding is CPU-bound, so
/// it runs on the blocking pool behind a thin async wrapper.

use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use tokio::task;

use super::LoadError;

/// A decoded image ready for display
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// The resolved local path the image was decoded from
    pub path: PathBuf,
    /// Native width in pixels
    pub width: u32,
    /// Native height in pixels
    pub height: u32,
    /// RGBA pixels wrapped for the renderer
    pub handle: Handle,
}

/// Decode an image file into a [`DecodedImage`].
pub async fn decode(path: PathBuf) -> Result<DecodedImage, LoadError> {
    // Spawn blocking because image decoding is CPU-intensive
    task::spawn_blocking(move || decode_blocking(&path))
        .await
        .map_err(|e| LoadError::Decode(format!("task join error: {}", e)))?
}

/// Blocking implementation of image decoding
fn decode_blocking(path: &Path) -> Result<DecodedImage, LoadError> {
    if !path.exists() {
        return Err(LoadError::Decode(format!(
            "file not found: {}",
            path.display()
        )));
    }

    let img = image::open(path)
        .map_err(|e| LoadError::Decode(format!("{}: {}", path.display(), e)))?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    println!("🖼️  Decoded image: {}x{} ({})", width, height, path.display());

    Ok(DecodedImage {
        path: path.to_path_buf(),
        width,
        height,
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img = RgbaImage::from_pixel(width, height, Rgba([120, 30, 200, 255]));
        img.save(&path).expect("failed to write test image");
        path
    }

    #[tokio::test]
    async fn decode_preserves_native_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(dir.path(), "wide.png", 64, 16);

        let decoded = decode(path.clone()).await.unwrap();
        assert_eq!(decoded.width, 64);
        assert_eq!(decoded.height, 16);
        assert_eq!(decoded.width as f32 / decoded.height as f32, 4.0);
        assert_eq!(decoded.path, path);
    }

    #[tokio::test]
    async fn missing_file_is_a_decode_error() {
        let result = decode(PathBuf::from("/nonexistent/photo.png")).await;
        assert!(matches!(result, Err(LoadError::Decode(_))));
    }

    #[tokio::test]
    async fn garbage_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"definitely not pixels").unwrap();

        let result = decode(path).await;
        assert!(matches!(result, Err(LoadError::Decode(_))));
    }
}
