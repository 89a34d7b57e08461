use std::path::PathBuf;

use glob::MatchOptions;
use thiserror::Error;

use crate::video::domain::image_locator::ImageLocator;

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("invalid file glob '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolves shell-style globs (`frames/*.png`, `shot_??.jpg`) relative to
/// the working directory. Directories that match are skipped, and wildcards
/// never match a leading dot, so hidden files stay out unless named.
pub struct GlobImageLocator;

impl GlobImageLocator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GlobImageLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLocator for GlobImageLocator {
    fn locate(&self, pattern: &str) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        let entries = glob::glob_with(pattern, options).map_err(|source| LocateError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| LocateError::Unreadable {
                path: e.path().to_path_buf(),
                source: e.into_error(),
            })?;
            if path.is_file() {
                paths.push(path);
            }
        }
        // Plain string order: "a-b/x.png" sorts before "a/x.png".
        paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        Ok(paths)
    }
}
