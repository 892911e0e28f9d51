// =============================================================================
// Folio Motion - Frame Scheduling
// =============================================================================
// Table of Contents:
// 1. Scheduler Trait & Handles
// 2. Frame Loop
// 3. Manual Scheduler (tests, headless runs)
// =============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

// -----------------------------------------------------------------------------
// 1. Scheduler Trait & Handles
// -----------------------------------------------------------------------------

/// Called once with the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;
pub type TimerCallback = Box<dyn FnOnce()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Repaint-cadence callbacks plus one-shot timers.
pub trait FrameScheduler {
    /// Run `callback` before the next repaint.
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle;

    fn cancel_frame(&self, handle: FrameHandle);

    /// Run `callback` once after `delay_ms`.
    fn set_timeout(&self, delay_ms: u32, callback: TimerCallback) -> TimerHandle;

    fn clear_timeout(&self, handle: TimerHandle);
}

// -----------------------------------------------------------------------------
// 2. Frame Loop
// -----------------------------------------------------------------------------

struct LoopShared {
    scheduler: Rc<dyn FrameScheduler>,
    tick: RefCell<Box<dyn FnMut(f64)>>,
    running: Cell<bool>,
    pending: Cell<Option<FrameHandle>>,
}

/// Self-rescheduling per-frame callback that runs until stopped.
pub struct FrameLoop {
    shared: Rc<LoopShared>,
}

impl FrameLoop {
    pub fn new(scheduler: Rc<dyn FrameScheduler>, tick: impl FnMut(f64) + 'static) -> Self {
        Self {
            shared: Rc::new(LoopShared {
                scheduler,
                tick: RefCell::new(Box::new(tick)),
                running: Cell::new(false),
                pending: Cell::new(None),
            }),
        }
    }

    pub fn start(&self) {
        if self.shared.running.replace(true) {
            return;
        }
        schedule_next(&self.shared);
    }

    pub fn stop(&self) {
        self.shared.running.set(false);
        if let Some(handle) = self.shared.pending.take() {
            self.shared.scheduler.cancel_frame(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule_next(shared: &Rc<LoopShared>) {
    let weak: Weak<LoopShared> = Rc::downgrade(shared);
    let handle = shared.scheduler.request_frame(Box::new(move |timestamp| {
        let Some(shared) = weak.upgrade() else { return };
        shared.pending.set(None);
        if !shared.running.get() {
            return;
        }
        if let Ok(mut tick) = shared.tick.try_borrow_mut() {
            (tick)(timestamp);
        }
        // The tick may have stopped the loop.
        if shared.running.get() {
            schedule_next(&shared);
        }
    }));
    shared.pending.set(Some(handle));
}

// -----------------------------------------------------------------------------
// 3. Manual Scheduler
// -----------------------------------------------------------------------------

/// Scheduler driven by explicit `run_frame` / `advance_to` calls.
///
/// Frames requested while a frame batch runs go to the next batch, like a
/// browser's animation-frame queue.
#[derive(Default)]
pub struct ManualScheduler {
    now_ms: Cell<f64>,
    next_id: Cell<u64>,
    frames: RefCell<Vec<(FrameHandle, FrameCallback)>>,
    timers: RefCell<Vec<(TimerHandle, f64, TimerCallback)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Run every queued frame callback at `timestamp`, then due timers.
    ///
    /// Returns how many frame callbacks ran.
    pub fn run_frame(&self, timestamp: f64) -> usize {
        self.now_ms.set(timestamp);
        let batch = std::mem::take(&mut *self.frames.borrow_mut());
        let count = batch.len();
        for (_, callback) in batch {
            callback(timestamp);
        }
        self.fire_due_timers();
        count
    }

    /// Run frames every `frame_ms` until `timestamp` is reached.
    pub fn advance_to(&self, timestamp: f64, frame_ms: f64) {
        let mut t = self.now_ms.get();
        while t + frame_ms <= timestamp {
            t += frame_ms;
            self.run_frame(t);
        }
        if t < timestamp {
            self.now_ms.set(timestamp);
            self.fire_due_timers();
        }
    }

    fn fire_due_timers(&self) {
        loop {
            let now = self.now_ms.get();
            let due = {
                let mut timers = self.timers.borrow_mut();
                let index = timers.iter().position(|(_, deadline, _)| *deadline <= now);
                index.map(|i| timers.remove(i))
            };
            match due {
                Some((_, _, callback)) => callback(),
                None => break,
            }
        }
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        self.frames.borrow_mut().push((handle, callback));
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.frames.borrow_mut().retain(|(h, _)| *h != handle);
    }

    fn set_timeout(&self, delay_ms: u32, callback: TimerCallback) -> TimerHandle {
        let handle = TimerHandle(self.next_id());
        let deadline = self.now_ms.get() + f64::from(delay_ms);
        self.timers.borrow_mut().push((handle, deadline, callback));
        handle
    }

    fn clear_timeout(&self, handle: TimerHandle) {
        self.timers.borrow_mut().retain(|(h, _, _)| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_requested_in_callback_run_next_batch() {
        let scheduler = Rc::new(ManualScheduler::new());
        let hits = Rc::new(Cell::new(0));

        let inner_scheduler = scheduler.clone();
        let inner_hits = hits.clone();
        scheduler.request_frame(Box::new(move |_| {
            inner_hits.set(inner_hits.get() + 1);
            let again = inner_hits.clone();
            inner_scheduler.request_frame(Box::new(move |_| again.set(again.get() + 1)));
        }));

        assert_eq!(scheduler.run_frame(16.0), 1);
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.pending_frames(), 1);
        assert_eq!(scheduler.run_frame(32.0), 1);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_timeout_fires_after_delay() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        scheduler.set_timeout(100, Box::new(move || flag.set(true)));

        scheduler.advance_to(99.0, 16.0);
        assert!(!fired.get());
        scheduler.advance_to(100.0, 16.0);
        assert!(fired.get());
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn test_cancel() {
        let scheduler = ManualScheduler::new();
        let frame = scheduler.request_frame(Box::new(|_| panic!("cancelled frame ran")));
        let timer = scheduler.set_timeout(10, Box::new(|| panic!("cancelled timer ran")));
        scheduler.cancel_frame(frame);
        scheduler.clear_timeout(timer);
        scheduler.advance_to(100.0, 16.0);
    }

    #[test]
    fn test_frame_loop_runs_until_stopped() {
        let scheduler = Rc::new(ManualScheduler::new());
        let stamps = Rc::new(RefCell::new(Vec::new()));

        let record = stamps.clone();
        let frame_loop = FrameLoop::new(scheduler.clone(), move |ts| record.borrow_mut().push(ts));
        frame_loop.start();
        frame_loop.start();
        assert_eq!(scheduler.pending_frames(), 1);

        scheduler.run_frame(16.0);
        scheduler.run_frame(32.0);
        frame_loop.stop();
        scheduler.run_frame(48.0);

        assert_eq!(*stamps.borrow(), vec![16.0, 32.0]);
        assert!(!frame_loop.is_running());
        assert_eq!(scheduler.pending_frames(), 0);
    }

    #[test]
    fn test_frame_loop_drop_cancels() {
        let scheduler = Rc::new(ManualScheduler::new());
        let frame_loop = FrameLoop::new(scheduler.clone(), |_| {});
        frame_loop.start();
        drop(frame_loop);
        assert_eq!(scheduler.pending_frames(), 0);
    }
}
