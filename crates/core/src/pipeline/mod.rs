pub mod create_movie_use_case;
pub mod frame_sequence;
pub mod pipeline_logger;
