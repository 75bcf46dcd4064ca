use std::num::NonZeroU32;

use crate::timing::{Clock, frame_interval_ms};

use super::events::{EventSource, FrameSink, LoopEvent};

/// Summary of a finished loop run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LoopStats {
    /// Number of frames presented before the loop stopped.
    pub frames: u64,
}

/// Runs the fixed-framerate render loop until a termination event arrives.
///
/// Per iteration:
/// 1. take the start tick
/// 2. drain all pending events; a `Quit` event sets the stop flag but the
///    drain continues so nothing is left queued
/// 3. clear, draw, present
/// 4. take the end tick and sleep out the remainder of the frame budget,
///    if any
///
/// The stop flag is observed at the top of the loop, so the iteration that
/// drains the termination event still renders and presents; the next
/// iteration never starts. Timing is soft: a frame that overruns its
/// budget is not compensated, the next frame simply starts late.
pub fn run<E, S, C>(target_fps: NonZeroU32, events: &mut E, sink: &mut S, clock: &C) -> LoopStats
where
    E: EventSource,
    S: FrameSink,
    C: Clock,
{
    let interval = frame_interval_ms(target_fps);
    let mut quit = false;
    let mut frames: u64 = 0;

    while !quit {
        let start = clock.now_ms();

        for event in events.drain() {
            if event == LoopEvent::Quit {
                log::debug!("termination event drained");
                quit = true;
            }
        }

        sink.clear();
        sink.draw();
        sink.present();
        frames += 1;

        let end = clock.now_ms();
        let elapsed = end.saturating_sub(start);
        if elapsed < interval {
            clock.sleep_ms(interval - elapsed);
        }
    }

    LoopStats { frames }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn fps(v: u32) -> NonZeroU32 {
        NonZeroU32::new(v).unwrap()
    }

    /// Replays one scripted batch of events per iteration. Panics if the
    /// loop outlives the script, so a missing quit event fails loudly
    /// instead of hanging the test run.
    struct ScriptedEvents {
        batches: Vec<Vec<LoopEvent>>,
        next: usize,
    }

    impl ScriptedEvents {
        fn new(batches: Vec<Vec<LoopEvent>>) -> Self {
            Self { batches, next: 0 }
        }
    }

    impl EventSource for ScriptedEvents {
        fn drain(&mut self) -> Vec<LoopEvent> {
            let batch = self
                .batches
                .get(self.next)
                .expect("loop ran past the scripted event stream")
                .clone();
            self.next += 1;
            batch
        }
    }

    /// Records the order of clear/draw/present calls.
    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<&'static str>,
    }

    impl FrameSink for RecordingSink {
        fn clear(&mut self) {
            self.calls.push("clear");
        }

        fn draw(&mut self) {
            self.calls.push("draw");
        }

        fn present(&mut self) {
            self.calls.push("present");
        }
    }

    /// Returns scripted ticks and records sleep requests. Interior
    /// mutability because the driver takes the clock by shared reference.
    struct FakeClock {
        ticks: RefCell<Vec<u64>>,
        sleeps: RefCell<Vec<u64>>,
    }

    impl FakeClock {
        /// `ticks` are consumed front-to-back, two per iteration (start
        /// and end).
        fn new(ticks: Vec<u64>) -> Self {
            Self {
                ticks: RefCell::new(ticks),
                sleeps: RefCell::new(Vec::new()),
            }
        }

        fn sleeps(&self) -> Vec<u64> {
            self.sleeps.borrow().clone()
        }
    }

    impl Clock for FakeClock {
        fn now_ms(&self) -> u64 {
            let mut ticks = self.ticks.borrow_mut();
            if ticks.is_empty() {
                panic!("loop requested more ticks than scripted");
            }
            ticks.remove(0)
        }

        fn sleep_ms(&self, ms: u64) {
            self.sleeps.borrow_mut().push(ms);
        }
    }

    fn quiet_clock(iterations: usize) -> FakeClock {
        // Zero-duration frames; every iteration sleeps the full budget.
        FakeClock::new(vec![0; iterations * 2])
    }

    #[test]
    fn stops_after_rendering_the_quit_iteration() {
        // Quit arrives on iteration 3 of a longer scripted stream: exactly
        // three render cycles happen, then the loop halts.
        let mut events = ScriptedEvents::new(vec![
            vec![],
            vec![LoopEvent::Other],
            vec![LoopEvent::Quit],
            vec![],
            vec![],
        ]);
        let mut sink = RecordingSink::default();
        let clock = quiet_clock(3);

        let stats = run(fps(60), &mut events, &mut sink, &clock);

        assert_eq!(stats.frames, 3);
        assert_eq!(sink.calls.iter().filter(|c| **c == "present").count(), 3);
    }

    #[test]
    fn renders_in_clear_draw_present_order() {
        let mut events = ScriptedEvents::new(vec![vec![LoopEvent::Quit]]);
        let mut sink = RecordingSink::default();
        let clock = quiet_clock(1);

        run(fps(60), &mut events, &mut sink, &clock);

        assert_eq!(sink.calls, vec!["clear", "draw", "present"]);
    }

    #[test]
    fn drains_whole_batch_after_quit() {
        // Quit in the middle of a batch: the remaining events are still
        // consumed in the same iteration and the loop stops afterwards.
        let mut events = ScriptedEvents::new(vec![vec![
            LoopEvent::Other,
            LoopEvent::Quit,
            LoopEvent::Other,
            LoopEvent::Other,
        ]]);
        let mut sink = RecordingSink::default();
        let clock = quiet_clock(1);

        let stats = run(fps(60), &mut events, &mut sink, &clock);

        assert_eq!(stats.frames, 1);
        assert_eq!(events.next, 1);
    }

    #[test]
    fn empty_iterations_render_normally() {
        let mut events = ScriptedEvents::new(vec![vec![], vec![], vec![LoopEvent::Quit]]);
        let mut sink = RecordingSink::default();
        let clock = quiet_clock(3);

        let stats = run(fps(60), &mut events, &mut sink, &clock);

        assert_eq!(stats.frames, 3);
        assert_eq!(sink.calls.len(), 9);
    }

    #[test]
    fn sleeps_exact_remainder_of_fast_frame() {
        // 60 fps => 16 ms budget; a 4 ms frame sleeps 12 ms.
        let mut events = ScriptedEvents::new(vec![vec![LoopEvent::Quit]]);
        let mut sink = RecordingSink::default();
        let clock = FakeClock::new(vec![100, 104]);

        run(fps(60), &mut events, &mut sink, &clock);

        assert_eq!(clock.sleeps(), vec![12]);
    }

    #[test]
    fn skips_sleep_when_frame_meets_budget_exactly() {
        let mut events = ScriptedEvents::new(vec![vec![LoopEvent::Quit]]);
        let mut sink = RecordingSink::default();
        let clock = FakeClock::new(vec![100, 116]);

        run(fps(60), &mut events, &mut sink, &clock);

        assert!(clock.sleeps().is_empty());
    }

    #[test]
    fn skips_sleep_when_frame_overruns_budget() {
        let mut events = ScriptedEvents::new(vec![vec![LoopEvent::Quit]]);
        let mut sink = RecordingSink::default();
        let clock = FakeClock::new(vec![100, 150]);

        run(fps(60), &mut events, &mut sink, &clock);

        assert!(clock.sleeps().is_empty());
    }

    #[test]
    fn one_fps_sleeps_out_a_full_second() {
        let mut events = ScriptedEvents::new(vec![vec![], vec![LoopEvent::Quit]]);
        let mut sink = RecordingSink::default();
        let clock = FakeClock::new(vec![0, 7, 1007, 1010]);

        run(fps(1), &mut events, &mut sink, &clock);

        assert_eq!(clock.sleeps(), vec![993, 997]);
    }

    #[test]
    fn zero_interval_never_sleeps() {
        // Above 1000 fps the budget floors to zero milliseconds.
        let mut events = ScriptedEvents::new(vec![vec![], vec![LoopEvent::Quit]]);
        let mut sink = RecordingSink::default();
        let clock = FakeClock::new(vec![0, 0, 0, 0]);

        run(fps(2000), &mut events, &mut sink, &clock);

        assert!(clock.sleeps().is_empty());
    }
}
