use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

use crate::shared::frame::Frame;

/// Normalizes a decoded image to 8-bit gray, RGB or RGBA.
///
/// Alpha wins over color: gray+alpha becomes RGBA. Wider samples are
/// quantized to 8 bits.
pub(crate) fn frame_from_image(image: DynamicImage, index: usize) -> Frame {
    let color = image.color();
    if color.has_alpha() {
        let buffer = image.into_rgba8();
        let (width, height) = buffer.dimensions();
        Frame::new(buffer.into_raw(), width, height, 4, index)
    } else if color.has_color() {
        let buffer = image.into_rgb8();
        let (width, height) = buffer.dimensions();
        Frame::new(buffer.into_raw(), width, height, 3, index)
    } else {
        let buffer = image.into_luma8();
        let (width, height) = buffer.dimensions();
        Frame::new(buffer.into_raw(), width, height, 1, index)
    }
}

pub(crate) fn image_from_frame(frame: &Frame) -> Result<DynamicImage, Box<dyn std::error::Error>> {
    let (width, height) = (frame.width(), frame.height());
    let data = frame.data().to_vec();
    let image = match frame.channels() {
        1 => GrayImage::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
        3 => RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
        n => return Err(format!("Unsupported channel count: {n}").into()),
    };
    Ok(image.ok_or("Failed to create image from frame data")?)
}

pub(crate) fn convert_depth(
    image: DynamicImage,
    depth: u8,
) -> Result<DynamicImage, Box<dyn std::error::Error>> {
    match depth {
        1 => Ok(DynamicImage::ImageLuma8(image.into_luma8())),
        3 => Ok(DynamicImage::ImageRgb8(image.into_rgb8())),
        4 => Ok(DynamicImage::ImageRgba8(image.into_rgba8())),
        n => Err(format!("Unsupported channel depth: {n}").into()),
    }
}
