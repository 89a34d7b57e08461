use std::path::Path;

use crate::shared::frame::Frame;
use crate::video::domain::image_reader::ImageReader;
use crate::video::infrastructure::image_conversion::frame_from_image;

/// Decodes still images with the `image` crate.
///
/// The container format is guessed from the file contents, not the
/// extension, so misnamed files still load.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path, index: usize) -> Result<Frame, Box<dyn std::error::Error>> {
        let image = image::ImageReader::open(path)
            .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
            .with_guessed_format()?
            .decode()
            .map_err(|e| format!("Failed to decode {}: {e}", path.display()))?;
        Ok(frame_from_image(image, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let mut img = image::RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgb([50, 100, 200]);
        }
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_read_returns_rgb_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), "test.png", 100, 80);
        let frame = ImageFileReader::new().read(&path, 3).unwrap();
        assert_eq!(frame.width(), 100);
        assert_eq!(frame.height(), 80);
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.index(), 3);
        assert_eq!(&frame.data()[..3], &[50, 100, 200]);
    }

    #[test]
    fn test_read_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        image::RgbaImage::from_pixel(8, 4, image::Rgba([1, 2, 3, 128]))
            .save(&path)
            .unwrap();
        let frame = ImageFileReader::new().read(&path, 0).unwrap();
        assert_eq!(frame.channels(), 4);
        assert_eq!(&frame.data()[..4], &[1, 2, 3, 128]);
    }

    #[test]
    fn test_read_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        image::GrayImage::from_pixel(5, 5, image::Luma([42]))
            .save(&path)
            .unwrap();
        let frame = ImageFileReader::new().read(&path, 0).unwrap();
        assert_eq!(frame.channels(), 1);
        assert_eq!(frame.data()[0], 42);
    }

    #[test]
    fn test_read_misnamed_file() {
        let dir = tempfile::tempdir().unwrap();
        let png = write_test_image(dir.path(), "test.png", 4, 4);
        let misnamed = dir.path().join("test.jpg");
        std::fs::rename(&png, &misnamed).unwrap();
        let frame = ImageFileReader::new().read(&misnamed, 0).unwrap();
        assert_eq!(frame.width(), 4);
    }

    #[test]
    fn test_read_nonexistent_returns_error() {
        let reader = ImageFileReader::new();
        assert!(reader.read(Path::new("/nonexistent/test.png"), 0).is_err());
    }

    #[test]
    fn test_read_garbage_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let err = ImageFileReader::new().read(&path, 0).unwrap_err();
        assert!(err.to_string().contains("broken.png"));
    }
}
