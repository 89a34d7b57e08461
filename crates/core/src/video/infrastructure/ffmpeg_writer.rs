use std::path::Path;

use ffmpeg_next::format::Pixel;
use ffmpeg_next::software::scaling;

use crate::shared::encoder_profile::PixelFormat;
use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_writer::VideoWriter;

/// Encodes frames to MPEG-4 via ffmpeg-next. The container is picked by
/// libavformat from the output file extension.
///
/// 4:2:0 chroma needs even dimensions, so odd-sized input is scaled down
/// by one pixel on the odd axis during the RGB -> YUV conversion.
pub struct FfmpegWriter {
    octx: Option<ffmpeg_next::format::context::Output>,
    encoder: Option<ffmpeg_next::codec::encoder::video::Encoder>,
    scaler: Option<scaling::Context>,
    input_format: Pixel,
    width: u32,
    height: u32,
    channels: u8,
    time_base: ffmpeg_next::Rational,
    frame_count: usize,
    video_stream_index: usize,
}

// Safety: FfmpegWriter is only used from a single thread at a time.
// The raw pointers inside ffmpeg types are not shared across threads.
unsafe impl Send for FfmpegWriter {}

impl FfmpegWriter {
    pub fn new() -> Self {
        Self {
            octx: None,
            encoder: None,
            scaler: None,
            input_format: Pixel::RGB24,
            width: 0,
            height: 0,
            channels: 0,
            time_base: ffmpeg_next::Rational(1, 1),
            frame_count: 0,
            video_stream_index: 0,
        }
    }
}

impl Default for FfmpegWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoWriter for FfmpegWriter {
    fn open(
        &mut self,
        path: &Path,
        metadata: &VideoMetadata,
    ) -> Result<(), Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;

        if metadata.fps == 0 {
            return Err("Frame rate must be positive".into());
        }
        let fps = i32::try_from(metadata.fps)?;
        let input_format = input_pixel_format(metadata.channels)?;
        let (encoded_width, encoded_height) =
            (even_floor(metadata.width), even_floor(metadata.height));
        if (encoded_width, encoded_height) != (metadata.width, metadata.height) {
            log::info!(
                "Frame size {}x{} is not divisible by 2, encoding at {encoded_width}x{encoded_height}",
                metadata.width,
                metadata.height
            );
        }

        let mut octx = ffmpeg_next::format::output(path)?;

        let global_header = octx
            .format()
            .flags()
            .contains(ffmpeg_next::format::Flags::GLOBAL_HEADER);

        // MPEG4 ships with every libavcodec build, no external library needed
        let codec = ffmpeg_next::encoder::find(ffmpeg_next::codec::Id::MPEG4)
            .ok_or("MPEG4 encoder not found")?;
        let output_format = match metadata.pixel_format {
            Some(PixelFormat::Yuv420p) => Pixel::YUV420P,
            None => preferred_pixel_format(codec),
        };
        log::debug!("Encoding {encoded_width}x{encoded_height} at {fps} fps, {output_format:?}");

        let mut ost = octx.add_stream(Some(codec))?;
        let video_stream_index = ost.index();

        let mut encoder_ctx = ffmpeg_next::codec::context::Context::new_with_codec(codec)
            .encoder()
            .video()?;

        encoder_ctx.set_width(encoded_width);
        encoder_ctx.set_height(encoded_height);
        encoder_ctx.set_format(output_format);

        let time_base = ffmpeg_next::Rational(1, fps);
        encoder_ctx.set_time_base(time_base);
        encoder_ctx.set_frame_rate(Some(ffmpeg_next::Rational(fps, 1)));

        if global_header {
            encoder_ctx.set_flags(ffmpeg_next::codec::Flags::GLOBAL_HEADER);
        }

        let encoder = encoder_ctx.open_with(ffmpeg_next::Dictionary::new())?;
        ost.set_parameters(&encoder);

        octx.write_header()?;

        let scaler = scaling::Context::get(
            input_format,
            metadata.width,
            metadata.height,
            output_format,
            encoded_width,
            encoded_height,
            scaling::Flags::BILINEAR,
        )?;

        self.octx = Some(octx);
        self.encoder = Some(encoder);
        self.scaler = Some(scaler);
        self.input_format = input_format;
        self.width = metadata.width;
        self.height = metadata.height;
        self.channels = metadata.channels;
        self.time_base = time_base;
        self.frame_count = 0;
        self.video_stream_index = video_stream_index;

        Ok(())
    }

    fn write(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let encoder = self.encoder.as_mut().ok_or("FfmpegWriter: not opened")?;
        let scaler = self.scaler.as_mut().ok_or("FfmpegWriter: not opened")?;
        let octx = self.octx.as_mut().ok_or("FfmpegWriter: not opened")?;

        if (frame.width(), frame.height(), frame.channels())
            != (self.width, self.height, self.channels)
        {
            return Err(format!(
                "Frame {} has shape {}, writer was opened for ({}, {}, {})",
                self.frame_count,
                frame.shape(),
                self.width,
                self.height,
                self.channels
            )
            .into());
        }

        let mut source =
            ffmpeg_next::util::frame::video::Video::new(self.input_format, self.width, self.height);
        let stride = source.stride(0);
        let plane = source.data_mut(0);

        // Copy pixel rows, respecting stride
        for (row, line) in frame.as_ndarray().outer_iter().enumerate() {
            let line = line.as_slice().ok_or("Frame rows must be contiguous")?;
            let start = row * stride;
            plane[start..start + line.len()].copy_from_slice(line);
        }

        let mut converted = ffmpeg_next::util::frame::video::Video::empty();
        scaler.run(&source, &mut converted)?;
        converted.set_pts(Some(self.frame_count as i64));

        encoder.send_frame(&converted)?;
        drain_packets(encoder, octx, self.video_stream_index, self.time_base)?;

        self.frame_count += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.scaler = None;
        if let (Some(mut encoder), Some(mut octx)) = (self.encoder.take(), self.octx.take()) {
            encoder.send_eof()?;
            drain_packets(
                &mut encoder,
                &mut octx,
                self.video_stream_index,
                self.time_base,
            )?;
            octx.write_trailer()?;
            log::debug!("Finalized video with {} frames", self.frame_count);
        }
        Ok(())
    }
}

fn drain_packets(
    encoder: &mut ffmpeg_next::codec::encoder::video::Encoder,
    octx: &mut ffmpeg_next::format::context::Output,
    stream_index: usize,
    time_base: ffmpeg_next::Rational,
) -> Result<(), Box<dyn std::error::Error>> {
    let ost_time_base = octx
        .stream(stream_index)
        .ok_or("Output stream missing")?
        .time_base();

    let mut encoded = ffmpeg_next::Packet::empty();
    while encoder.receive_packet(&mut encoded).is_ok() {
        encoded.set_stream(stream_index);
        encoded.rescale_ts(time_base, ost_time_base);
        encoded.write_interleaved(octx)?;
    }
    Ok(())
}

fn input_pixel_format(channels: u8) -> Result<Pixel, Box<dyn std::error::Error>> {
    match channels {
        1 => Ok(Pixel::GRAY8),
        3 => Ok(Pixel::RGB24),
        4 => Ok(Pixel::RGBA),
        n => Err(format!("Cannot encode frames with {n} channels").into()),
    }
}

/// First format the codec advertises, which is what libavcodec would pick.
fn preferred_pixel_format(codec: ffmpeg_next::Codec) -> Pixel {
    codec
        .video()
        .ok()
        .and_then(|video| video.formats())
        .and_then(|mut formats| formats.next())
        .unwrap_or(Pixel::YUV420P)
}

fn even_floor(value: u32) -> u32 {
    (value & !1).max(2)
}
