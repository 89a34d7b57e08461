use crate::shared::encoder_profile::PixelFormat;

/// Everything the writer needs to know before the first frame arrives.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub fps: u32,
    /// `None` lets the codec pick its preferred format.
    pub pixel_format: Option<PixelFormat>,
}
