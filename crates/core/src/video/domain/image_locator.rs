use std::path::PathBuf;

/// Finds the still images that make up a movie.
pub trait ImageLocator: Send {
    /// Returns the files matching `pattern`, sorted by path.
    fn locate(&self, pattern: &str) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>>;
}
