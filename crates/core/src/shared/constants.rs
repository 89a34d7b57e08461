/// Frame rate used by the FFMPEG encoder profile when the caller gives none.
pub const DEFAULT_FPS: u32 = 20;

/// Frame rate the plain MP4 profile always encodes at (the muxer default).
pub const DEFAULT_MUXER_FPS: u32 = 10;

/// Pattern used when no `--files` glob is configured programmatically.
pub const DEFAULT_FILE_GLOB: &str = "*.png";

/// Keyword selecting the explicit FFMPEG profile (compared case-insensitively).
pub const FFMPEG_KEYWORD: &str = "ffmpeg";

/// Output path used when no video name is configured programmatically.
pub const DEFAULT_VIDEO_NAME: &str = "output.mp4";
