// Scroll coordination
//
// Scroll events can arrive many times per frame. The coordinator owns the
// `ticking` flag and makes sure the combined per-frame update (reveal check,
// nav highlight, parallax) runs at most once per rendered frame.
//
// Integration: the DOM layer forwards every window `scroll` event to
// `ScrollCoordinator::on_scroll`; the update closure is built at boot.

use crate::scheduler::Scheduler;
use std::cell::Cell;
use std::rc::Rc;

/// Frame-coalescing flag
///
/// `try_begin` succeeds once until `finish` is called.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    ticking: Cell<bool>,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next frame; false if an update is already pending
    pub fn try_begin(&self) -> bool {
        !self.ticking.replace(true)
    }

    /// Release after the frame's update ran
    pub fn finish(&self) {
        self.ticking.set(false);
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking.get()
    }
}

/// Runs the scroll-driven update at most once per frame
pub struct ScrollCoordinator {
    throttle: FrameThrottle,
    scheduler: Rc<dyn Scheduler>,
    update: Rc<dyn Fn()>,
}

impl ScrollCoordinator {
    pub fn new(scheduler: Rc<dyn Scheduler>, update: impl Fn() + 'static) -> Rc<Self> {
        Rc::new(Self {
            throttle: FrameThrottle::new(),
            scheduler,
            update: Rc::new(update),
        })
    }

    /// Handle one scroll event
    ///
    /// Returns true if this event scheduled the frame update, false if it
    /// was folded into one already pending.
    pub fn on_scroll(self: &Rc<Self>) -> bool {
        if !self.throttle.try_begin() {
            return false;
        }
        let this = self.clone();
        self.scheduler.next_frame(Box::new(move || {
            (this.update)();
            this.throttle.finish();
        }));
        true
    }

    pub fn is_pending(&self) -> bool {
        self.throttle.is_ticking()
    }
}

/// Vertical translation for a parallax layer; positive speed moves it up
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed)
}
