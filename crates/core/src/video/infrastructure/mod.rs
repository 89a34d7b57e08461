pub mod ffmpeg_writer;
pub mod glob_image_locator;
pub(crate) mod image_conversion;
pub mod image_file_reader;
pub mod lanczos_frame_resizer;
