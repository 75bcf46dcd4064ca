/// A platform event as seen by the frame loop.
///
/// The loop only distinguishes "stop" from "everything else"; richer input
/// handling is deliberately out of scope for the viewer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopEvent {
    /// A request to close the application (window close button, etc.).
    Quit,
    /// Any other platform event. Drained and ignored.
    Other,
}

/// Source of pending platform events.
pub trait EventSource {
    /// Returns every event that arrived since the previous call, in
    /// arrival order. An empty vec means nothing is pending; it does not
    /// mean the source is exhausted.
    fn drain(&mut self) -> Vec<LoopEvent>;
}

/// Target the loop renders into, once per iteration.
///
/// Methods are infallible from the driver's point of view. The wgpu-backed
/// implementation absorbs transient surface errors internally by skipping
/// the affected frame; only the termination event ends the loop.
pub trait FrameSink {
    /// Clears the target to the background color.
    fn clear(&mut self);

    /// Draws the image stretched over the entire target.
    fn draw(&mut self);

    /// Presents the finished frame to the screen.
    fn present(&mut self);
}
