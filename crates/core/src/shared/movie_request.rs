use std::path::PathBuf;

use crate::shared::constants::{DEFAULT_FILE_GLOB, DEFAULT_FPS, DEFAULT_VIDEO_NAME};
use crate::shared::encoder_profile::EncoderKind;
use crate::shared::frame::FrameShape;
use crate::shared::target_shape::TargetShape;

/// Parameters of one image-sequence-to-video run.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieRequest {
    pub output_path: PathBuf,
    pub encoder: EncoderKind,
    /// Glob matched against the filesystem, relative to the working directory.
    pub file_glob: String,
    pub shape: Option<TargetShape>,
    /// Number of times the full sequence is repeated; 0 yields no frames.
    pub loop_count: usize,
    /// Use frames as decoded even when `shape` is set.
    pub skip_resize: bool,
    /// Only honored by [`EncoderKind::Ffmpeg`].
    pub fps: u32,
}

impl Default for MovieRequest {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_VIDEO_NAME),
            encoder: EncoderKind::Ffmpeg,
            file_glob: DEFAULT_FILE_GLOB.to_string(),
            shape: None,
            loop_count: 1,
            skip_resize: false,
            fps: DEFAULT_FPS,
        }
    }
}

impl MovieRequest {
    /// True when frames have to go through the resizer.
    pub fn resize_target(&self) -> Option<TargetShape> {
        if self.skip_resize {
            None
        } else {
            self.shape
        }
    }
}

/// What a successful run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieSummary {
    pub source_frames: usize,
    pub encoded_frames: usize,
    pub frame_shape: FrameShape,
    pub fps: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = MovieRequest::default();
        assert_eq!(request.output_path, PathBuf::from("output.mp4"));
        assert_eq!(request.encoder, EncoderKind::Ffmpeg);
        assert_eq!(request.file_glob, "*.png");
        assert_eq!(request.shape, None);
        assert_eq!(request.loop_count, 1);
        assert!(!request.skip_resize);
        assert_eq!(request.fps, 20);
    }

    #[test]
    fn test_resize_target_without_shape() {
        let request = MovieRequest::default();
        assert_eq!(request.resize_target(), None);
    }

    #[test]
    fn test_resize_target_with_shape() {
        let shape = TargetShape::new(100, 100, Some(3));
        let request = MovieRequest {
            shape: Some(shape),
            ..MovieRequest::default()
        };
        assert_eq!(request.resize_target(), Some(shape));
    }

    #[test]
    fn test_skip_resize_suppresses_target() {
        let request = MovieRequest {
            shape: Some(TargetShape::new(100, 100, None)),
            skip_resize: true,
            ..MovieRequest::default()
        };
        assert_eq!(request.resize_target(), None);
    }
}
