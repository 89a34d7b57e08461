pub mod constants;
pub mod encoder_profile;
pub mod frame;
pub mod movie_request;
pub mod target_shape;
pub mod video_metadata;
