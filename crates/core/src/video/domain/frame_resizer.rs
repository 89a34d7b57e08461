use crate::shared::frame::Frame;
use crate::shared::target_shape::TargetShape;

/// Brings a frame to a requested shape.
pub trait FrameResizer: Send {
    /// Returns a new frame of exactly `target.width` x `target.height`,
    /// converted to `target.depth` channels when one is given.
    fn resize(
        &self,
        frame: &Frame,
        target: &TargetShape,
    ) -> Result<Frame, Box<dyn std::error::Error>>;
}
