//! Turns a glob of still images into a video.
//!
//! - [`shared`]: frames, target shapes, encoder profiles, run parameters
//! - [`video`]: ports for locating, reading, resizing and encoding, plus
//!   their glob / `image` / ffmpeg adapters
//! - [`pipeline`]: the use case that wires them together

pub mod pipeline;
pub mod shared;
pub mod video;
