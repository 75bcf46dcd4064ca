//! Frame timing.
//!
//! Provides the millisecond clock abstraction the frame loop paces itself
//! with, plus the target-interval derivation. Kept separate from the loop
//! driver so tests can substitute a scripted clock.

mod clock;

pub use clock::{Clock, SystemClock, frame_interval_ms};
