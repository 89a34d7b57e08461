use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use moviecreator_core::pipeline::create_movie_use_case::CreateMovieUseCase;
use moviecreator_core::pipeline::pipeline_logger::VerbosityLogger;
use moviecreator_core::shared::constants::DEFAULT_FPS;
use moviecreator_core::shared::encoder_profile::EncoderKind;
use moviecreator_core::shared::movie_request::MovieRequest;
use moviecreator_core::shared::target_shape::TargetShape;
use moviecreator_core::video::infrastructure::ffmpeg_writer::FfmpegWriter;
use moviecreator_core::video::infrastructure::glob_image_locator::GlobImageLocator;
use moviecreator_core::video::infrastructure::image_file_reader::ImageFileReader;
use moviecreator_core::video::infrastructure::lanczos_frame_resizer::LanczosFrameResizer;

/// Create a movie from the given image files, sorted by name.
///
/// Color images can be converted to grayscale by setting the last element
/// of --shape to 1.
#[derive(Parser, Debug)]
#[command(name = "create_movie", version)]
struct Cli {
    /// Print verbose messages (repeat for more detail).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The name of the output video, e.g. 'output.mp4'.
    #[arg(long)]
    video_name: PathBuf,

    /// FFMPEG (explicit fps, yuv420p) or anything else for MP4 defaults.
    #[arg(long, default_value = "FFMPEG")]
    video_format: String,

    /// A file glob, e.g. '*.png'.
    #[arg(long)]
    files: String,

    /// Shape the images are resized to, e.g. '(2186, 3496, 4)'.
    #[arg(long)]
    shape: Option<TargetShape>,

    /// Frames per second (FFMPEG format only).
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Number of times the video loops over all the frames.
    #[arg(long = "loop", default_value_t = 1)]
    loop_count: usize,

    /// Use the images as they are; they must already share one size.
    #[arg(long = "noresize", visible_alias = "no-resize")]
    no_resize: bool,
}

impl Cli {
    fn to_request(&self) -> MovieRequest {
        MovieRequest {
            output_path: self.video_name.clone(),
            encoder: EncoderKind::from_keyword(&self.video_format),
            file_glob: self.files.clone(),
            shape: self.shape,
            loop_count: self.loop_count,
            skip_resize: self.no_resize,
            fps: self.fps,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let request = cli.to_request();
    if let Some(shape) = request.shape {
        log::info!("shape={shape}");
    }

    let mut use_case = CreateMovieUseCase::new(
        Box::new(GlobImageLocator::new()),
        Box::new(ImageFileReader::new()),
        Box::new(LanczosFrameResizer::new()),
        Box::new(FfmpegWriter::new()),
        Box::new(VerbosityLogger::new(cli.verbose)),
    );
    let summary = use_case.execute(&request)?;
    log::info!(
        "Output written to {} ({} frames of {})",
        request.output_path.display(),
        summary.encoded_frames,
        summary.frame_shape
    );
    Ok(())
}

/// `RUST_LOG` still overrides the level picked from `-v`.
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_filter(verbosity))
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    const REQUIRED: [&str; 5] = ["create_movie", "--video-name", "x.mp4", "--files", "*.png"];

    fn parse(extra: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(REQUIRED.iter().chain(extra))
    }

    #[test]
    fn test_command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_mandatory_arguments() {
        let err = Cli::try_parse_from(["create_movie"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["create_movie", "--video-name", "x.mp4"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["create_movie", "--files", "*.png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let cli = parse(&[]).unwrap();
        assert_eq!(cli.files, "*.png");
        assert_eq!(cli.video_name, PathBuf::from("x.mp4"));
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.video_format, "FFMPEG");
        assert_eq!(cli.shape, None);
        assert_eq!(cli.fps, 20);
        assert_eq!(cli.loop_count, 1);
        assert!(!cli.no_resize);
    }

    #[test]
    fn test_verbose() {
        let cli = Cli::try_parse_from(["", "--verbose", "--video-name", "x.mp4", "--files", "*.png"])
            .unwrap();
        assert_eq!(cli.verbose, 1);

        let cli = parse(&["--verbose", "--verbose"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = parse(&["-v"]).unwrap();
        assert_eq!(cli.verbose, 1);

        let cli = parse(&["-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_shape() {
        let cli = parse(&["--shape", "(1000, 1000)"]).unwrap();
        assert_eq!(cli.shape, Some(TargetShape::new(1000, 1000, None)));

        let cli = parse(&["--shape", "(1000, 1000, 4)"]).unwrap();
        assert_eq!(cli.shape, Some(TargetShape::new(1000, 1000, Some(4))));
    }

    #[test]
    fn test_malformed_shape_is_usage_error() {
        for bad in ["1000, 1000, 4", "(1000)", "(1, 2, 3, 4)", "(a, b)"] {
            let err = parse(&["--shape", bad]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "shape {bad:?}");
            assert_ne!(err.exit_code(), 0);
        }
    }

    #[test]
    fn test_noresize_aliases() {
        assert!(parse(&["--noresize"]).unwrap().no_resize);
        assert!(parse(&["--no-resize"]).unwrap().no_resize);
    }

    #[test]
    fn test_fps_and_loop() {
        let cli = parse(&["--fps", "30", "--loop", "4"]).unwrap();
        assert_eq!(cli.fps, 30);
        assert_eq!(cli.loop_count, 4);

        let cli = parse(&["--loop", "0"]).unwrap();
        assert_eq!(cli.loop_count, 0);
    }

    #[test]
    fn test_zero_fps_is_rejected() {
        let err = parse(&["--fps", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_request_mapping() {
        let cli = parse(&[
            "--video-format",
            "mp4",
            "--shape",
            "(64,48,3)",
            "--fps",
            "12",
            "--loop",
            "3",
            "--noresize",
        ])
        .unwrap();
        let request = cli.to_request();
        assert_eq!(request.output_path, PathBuf::from("x.mp4"));
        assert_eq!(request.encoder, EncoderKind::Mp4);
        assert_eq!(request.file_glob, "*.png");
        assert_eq!(request.shape, Some(TargetShape::new(64, 48, Some(3))));
        assert_eq!(request.loop_count, 3);
        assert!(request.skip_resize);
        assert_eq!(request.fps, 12);
    }

    #[test]
    fn test_video_format_is_case_insensitive() {
        let cli = parse(&["--video-format", "ffmpeg"]).unwrap();
        assert_eq!(cli.to_request().encoder, EncoderKind::Ffmpeg);
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(0), LevelFilter::Warn);
        assert_eq!(level_filter(1), LevelFilter::Info);
        assert_eq!(level_filter(5), LevelFilter::Debug);
    }
}
