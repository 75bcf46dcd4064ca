//! The frame loop driver.
//!
//! This module is the heart of the viewer: poll for a quit signal, render
//! one frame, sleep out the remainder of the frame budget, repeat. It is
//! written against small collaborator traits (`EventSource`, `FrameSink`,
//! `timing::Clock`) so the loop's ordering and pacing rules are testable
//! without a window system.

mod driver;
mod events;

pub use driver::{LoopStats, run};
pub use events::{EventSource, FrameSink, LoopEvent};
