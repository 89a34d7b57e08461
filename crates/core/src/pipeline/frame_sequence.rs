use thiserror::Error;

use crate::shared::frame::{Frame, FrameShape};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("no frames to encode: '{pattern}' matched {matched} file(s), loop count {loop_count}")]
    NoFrames {
        pattern: String,
        matched: usize,
        loop_count: usize,
    },
    #[error(
        "frame {position} has shape {found} but the first frame has {expected}; \
         frames must share one shape when resizing is disabled"
    )]
    ShapeMismatch {
        position: usize,
        expected: FrameShape,
        found: FrameShape,
    },
}

/// Concatenates `frames` with itself `loop_count` times.
///
/// The result owns `frames.len() * loop_count` frames; nothing is shared
/// between repetitions.
pub fn repeat_frames(frames: &[Frame], loop_count: usize) -> Vec<Frame> {
    let mut sequence = Vec::with_capacity(frames.len() * loop_count);
    for _ in 0..loop_count {
        sequence.extend_from_slice(frames);
    }
    sequence
}

/// Checks that every frame has the shape of the first one.
pub fn ensure_uniform_shape(frames: &[Frame]) -> Result<(), AssemblyError> {
    let Some(first) = frames.first() else {
        return Ok(());
    };
    let expected = first.shape();
    match frames.iter().position(|f| f.shape() != expected) {
        Some(position) => Err(AssemblyError::ShapeMismatch {
            position,
            expected,
            found: frames[position].shape(),
        }),
        None => Ok(()),
    }
}
