use image::imageops::FilterType;

use crate::shared::frame::Frame;
use crate::shared::target_shape::TargetShape;
use crate::video::domain::frame_resizer::FrameResizer;
use crate::video::infrastructure::image_conversion::{
    convert_depth, frame_from_image, image_from_frame,
};

/// Resamples frames with the `image` crate.
///
/// The Lanczos3 kernel widens with the downscale ratio, which
/// low-pass filters the source and avoids aliasing on large reductions.
pub struct LanczosFrameResizer;

impl LanczosFrameResizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LanczosFrameResizer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameResizer for LanczosFrameResizer {
    fn resize(
        &self,
        frame: &Frame,
        target: &TargetShape,
    ) -> Result<Frame, Box<dyn std::error::Error>> {
        if target.matches(frame.shape()) {
            return Ok(frame.clone());
        }

        let mut image = image_from_frame(frame)?;
        if (frame.width(), frame.height()) != (target.width, target.height) {
            image = image.resize_exact(target.width, target.height, FilterType::Lanczos3);
        }
        if let Some(depth) = target.depth {
            image = convert_depth(image, depth)?;
        }
        Ok(frame_from_image(image, frame.index()))
    }
}
