pub mod frame_resizer;
pub mod image_locator;
pub mod image_reader;
pub mod video_writer;
