use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::shared::frame::FrameShape;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShapeParseError {
    #[error("shape must be wrapped in parentheses, e.g. '(1920, 1080)', got '{0}'")]
    MissingParentheses(String),
    #[error("shape must have 2 or 3 components, got {0}")]
    ComponentCount(usize),
    #[error("shape component '{0}' is not a non-negative integer")]
    InvalidComponent(String),
    #[error("shape width and height must be positive, got ({width}, {height})")]
    ZeroSize { width: u32, height: u32 },
    #[error("shape depth must be 1, 3 or 4, got {0}")]
    UnsupportedDepth(u32),
}

/// Requested output size of every frame: `(width, height[, depth])`.
///
/// Without a depth the channel count of each source image is kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetShape {
    pub width: u32,
    pub height: u32,
    pub depth: Option<u8>,
}

impl TargetShape {
    pub fn new(width: u32, height: u32, depth: Option<u8>) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// True when a frame of `shape` already satisfies this target.
    pub fn matches(&self, shape: FrameShape) -> bool {
        self.width == shape.width
            && self.height == shape.height
            && self.depth.map_or(true, |d| d == shape.channels)
    }
}

impl FromStr for TargetShape {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ShapeParseError::MissingParentheses(s.to_string()))?;

        let components = inner
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u32>()
                    .map_err(|_| ShapeParseError::InvalidComponent(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (width, height, depth) = match components[..] {
            [w, h] => (w, h, None),
            [w, h, d] => (w, h, Some(d)),
            _ => return Err(ShapeParseError::ComponentCount(components.len())),
        };

        if width == 0 || height == 0 {
            return Err(ShapeParseError::ZeroSize { width, height });
        }
        let depth = match depth {
            None => None,
            Some(d @ (1 | 3 | 4)) => Some(d as u8),
            Some(d) => return Err(ShapeParseError::UnsupportedDepth(d)),
        };

        Ok(Self::new(width, height, depth))
    }
}

impl fmt::Display for TargetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.depth {
            Some(d) => write!(f, "({}, {}, {d})", self.width, self.height),
            None => write!(f, "({}, {})", self.width, self.height),
        }
    }
}
