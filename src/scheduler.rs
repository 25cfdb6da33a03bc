//! Deferred work: timers and animation frames
//!
//! Every delayed effect on the page (stagger steps, toast lifecycle, the
//! simulated contact send, coalesced scroll work) goes through [`Scheduler`].
//! The browser build backs it with `setTimeout` / `requestAnimationFrame`;
//! tests use `VirtualScheduler`, which only moves when told to.
//!
//! Nothing scheduled here can be cancelled. A task, once registered, runs.

#[cfg(test)]
use std::cell::RefCell;
use std::time::Duration;

/// A unit of deferred work
pub type Task = Box<dyn FnOnce()>;

/// Single-threaded callback scheduling
pub trait Scheduler {
    /// Run `task` once `delay` has elapsed
    fn after(&self, delay: Duration, task: Task);

    /// Run `task` before the next rendered frame
    fn next_frame(&self, task: Task);
}

#[cfg(test)]
struct PendingTimer {
    due: Duration,
    /// Registration order, breaks ties between timers due at the same instant
    seq: u64,
    task: Task,
}

#[cfg(test)]
#[derive(Default)]
struct VirtualState {
    now: Duration,
    seq: u64,
    timers: Vec<PendingTimer>,
    frame: Vec<Task>,
}

/// Deterministic scheduler with a manual clock
///
/// Time only advances through [`advance`](Self::advance); frame callbacks
/// only run through [`render_frame`](Self::render_frame). Tasks may schedule
/// more work while running.
#[cfg(test)]
#[derive(Default)]
pub struct VirtualScheduler {
    state: RefCell<VirtualState>,
}

#[cfg(test)]
impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of timers not yet fired
    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Number of callbacks waiting for the next frame
    pub fn pending_frame_callbacks(&self) -> usize {
        self.state.borrow().frame.len()
    }

    /// Move the clock forward by `by`, firing every timer that falls due
    ///
    /// Timers fire in due-time order; timers due at the same instant fire in
    /// registration order. Timers registered by a running task fire in the
    /// same call if they fall due before the target time.
    pub fn advance(&self, by: Duration) {
        let target = self.now().saturating_add(by);
        while let Some(timer) = self.pop_due(target) {
            self.state.borrow_mut().now = timer.due;
            (timer.task)();
        }
        self.state.borrow_mut().now = target;
    }

    /// Run every callback queued for this frame
    ///
    /// Callbacks requested while the frame runs wait for the next one.
    /// Returns how many callbacks ran.
    pub fn render_frame(&self) -> usize {
        let batch = std::mem::take(&mut self.state.borrow_mut().frame);
        let count = batch.len();
        for task in batch {
            task();
        }
        count
    }

    fn pop_due(&self, target: Duration) -> Option<PendingTimer> {
        let mut state = self.state.borrow_mut();
        let index = state
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= target)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;
        Some(state.timers.swap_remove(index))
    }
}

#[cfg(test)]
impl Scheduler for VirtualScheduler {
    fn after(&self, delay: Duration, task: Task) {
        let mut state = self.state.borrow_mut();
        let due = state.now.saturating_add(delay);
        let seq = state.seq;
        state.seq += 1;
        state.timers.push(PendingTimer { due, seq, task });
    }

    fn next_frame(&self, task: Task) {
        self.state.borrow_mut().frame.push(task);
    }
}
