use std::path::Path;

use crate::shared::frame::Frame;

/// Decodes one still image into a [`Frame`].
///
/// Implementations normalize the pixel layout to 8-bit gray, RGB or RGBA so
/// the pipeline never sees other sample formats.
pub trait ImageReader: Send {
    fn read(&self, path: &Path, index: usize) -> Result<Frame, Box<dyn std::error::Error>>;
}
