use std::fmt;

use crate::shared::constants::{DEFAULT_MUXER_FPS, FFMPEG_KEYWORD};

/// Which encoder settings to use for the output video.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EncoderKind {
    /// Explicit frame rate and `yuv420p` pixel format.
    Ffmpeg,
    /// Muxer defaults; frame rate and pixel format overrides are ignored.
    #[default]
    Mp4,
}

impl EncoderKind {
    /// `"ffmpeg"` in any letter case selects [`EncoderKind::Ffmpeg`];
    /// everything else falls back to [`EncoderKind::Mp4`].
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword.trim().eq_ignore_ascii_case(FFMPEG_KEYWORD) {
            Self::Ffmpeg
        } else {
            Self::Mp4
        }
    }

    /// Resolves the settings the writer is opened with.
    pub fn profile(self, fps: u32) -> EncoderProfile {
        match self {
            Self::Ffmpeg => EncoderProfile {
                fps,
                pixel_format: Some(PixelFormat::Yuv420p),
            },
            Self::Mp4 => EncoderProfile {
                fps: DEFAULT_MUXER_FPS,
                pixel_format: None,
            },
        }
    }
}

impl fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ffmpeg => f.write_str("FFMPEG"),
            Self::Mp4 => f.write_str("MP4"),
        }
    }
}

/// Pixel formats the writer can be asked to encode with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// Planar YUV with 4:2:0 chroma subsampling.
    Yuv420p,
}

impl PixelFormat {
    pub fn name(self) -> &'static str {
        match self {
            Self::Yuv420p => "yuv420p",
        }
    }
}

/// Frame rate and pixel format for one encode. `pixel_format: None`
/// leaves the choice to the codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderProfile {
    pub fps: u32,
    pub pixel_format: Option<PixelFormat>,
}
