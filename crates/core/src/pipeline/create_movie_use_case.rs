use std::path::PathBuf;

use crate::pipeline::frame_sequence::{ensure_uniform_shape, repeat_frames, AssemblyError};
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::encoder_profile::PixelFormat;
use crate::shared::frame::Frame;
use crate::shared::movie_request::{MovieRequest, MovieSummary};
use crate::shared::target_shape::TargetShape;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::frame_resizer::FrameResizer;
use crate::video::domain::image_locator::ImageLocator;
use crate::video::domain::image_reader::ImageReader;
use crate::video::domain::video_writer::VideoWriter;

/// Image-sequence-to-video pipeline: locate → read → resize → repeat → encode.
///
/// Every frame (including repetitions) is held in memory before the writer
/// is opened, so a failed load or a ragged `skip_resize` sequence never
/// leaves an output file behind. Failures while encoding may leave a partial file.
pub struct CreateMovieUseCase {
    locator: Box<dyn ImageLocator>,
    reader: Box<dyn ImageReader>,
    resizer: Box<dyn FrameResizer>,
    writer: Box<dyn VideoWriter>,
    logger: Box<dyn PipelineLogger>,
}

impl CreateMovieUseCase {
    pub fn new(
        locator: Box<dyn ImageLocator>,
        reader: Box<dyn ImageReader>,
        resizer: Box<dyn FrameResizer>,
        writer: Box<dyn VideoWriter>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            locator,
            reader,
            resizer,
            writer,
            logger,
        }
    }

    pub fn execute(
        &mut self,
        request: &MovieRequest,
    ) -> Result<MovieSummary, Box<dyn std::error::Error>> {
        let paths = self.locator.locate(&request.file_glob)?;
        let frames = self.load_frames(&paths, request)?;
        self.logger
            .log(1, &format!("Number of original images: {}", frames.len()));
        if request.skip_resize {
            ensure_uniform_shape(&frames)?;
        }

        let sequence = repeat_frames(&frames, request.loop_count);
        self.logger
            .log(1, &format!("Number of concatenated images: {}", sequence.len()));

        let frame_shape = sequence
            .first()
            .map(Frame::shape)
            .ok_or_else(|| AssemblyError::NoFrames {
                pattern: request.file_glob.clone(),
                matched: paths.len(),
                loop_count: request.loop_count,
            })?;

        let profile = request.encoder.profile(request.fps);
        let metadata = VideoMetadata {
            width: frame_shape.width,
            height: frame_shape.height,
            channels: frame_shape.channels,
            fps: profile.fps,
            pixel_format: profile.pixel_format,
        };
        let pixel_format = profile
            .pixel_format
            .map_or("codec default", PixelFormat::name);
        self.logger.log(
            1,
            &format!(
                "Writing {} ({} profile, {} fps, {pixel_format})",
                request.output_path.display(),
                request.encoder,
                profile.fps
            ),
        );

        self.writer.open(&request.output_path, &metadata)?;
        for frame in &sequence {
            self.writer.write(frame)?;
        }
        self.writer.close()?;
        self.logger.summary();

        Ok(MovieSummary {
            source_frames: frames.len(),
            encoded_frames: sequence.len(),
            frame_shape,
            fps: profile.fps,
        })
    }

    /// Without an explicit shape every frame is resized to the first one,
    /// unless resizing is disabled.
    fn load_frames(
        &mut self,
        paths: &[PathBuf],
        request: &MovieRequest,
    ) -> Result<Vec<Frame>, Box<dyn std::error::Error>> {
        let mut target = request.resize_target();
        let mut frames = Vec::with_capacity(paths.len());

        for (index, path) in paths.iter().enumerate() {
            let mut frame = self.reader.read(path, index)?;
            if let Some(target) = &target {
                frame = self.resizer.resize(&frame, target)?;
            } else if !request.skip_resize {
                let shape = frame.shape();
                self.logger
                    .log(1, &format!("Shape of the first image: {shape}"));
                target = Some(TargetShape::new(
                    shape.width,
                    shape.height,
                    Some(shape.channels),
                ));
            }
            self.logger
                .log(2, &format!("{}, shape={}", path.display(), frame.shape()));
            frames.push(frame);
        }

        Ok(frames)
    }
}
