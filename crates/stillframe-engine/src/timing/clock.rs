use std::num::NonZeroU32;
use std::time::{Duration, Instant};

/// Millisecond budget for one frame at the given target rate.
///
/// Integer floor division, matching the classic `1000 / fps` pacing rule:
/// 60 fps budgets 16 ms, 30 fps budgets 33 ms, 1 fps budgets 1000 ms.
/// Rates above 1000 fps floor to a zero budget and the loop never sleeps.
pub fn frame_interval_ms(target_fps: NonZeroU32) -> u64 {
    u64::from(1000 / target_fps.get())
}

/// Monotonic millisecond clock plus a blocking sleep primitive.
///
/// The frame loop only ever subtracts two ticks taken within one iteration,
/// so the epoch is irrelevant as long as ticks never go backwards.
pub trait Clock {
    /// Current tick in milliseconds. Monotonically non-decreasing.
    fn now_ms(&self) -> u64;

    /// Blocks the calling thread for `ms` milliseconds.
    fn sleep_ms(&self, ms: u64);
}

/// Wall clock backed by `Instant` and `thread::sleep`.
#[derive(Debug, Clone)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}
