//! Toast notifications
//!
//! A non-blocking message that slides in from the right, holds, slides out
//! and is removed. Toasts stack: each call gets its own element and its own
//! timers, and nothing cancels an earlier toast.

use crate::config::NotificationConfig;
use crate::scheduler::Scheduler;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Identity of one toast for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

/// Page-side toast rendering
pub trait ToastSurface {
    /// Insert the element off-screen, `top_px` from the viewport top
    fn mount(&self, id: ToastId, message: &str, top_px: u32);
    fn slide_in(&self, id: ToastId);
    fn slide_out(&self, id: ToastId);
    /// Remove the element from the document
    fn unmount(&self, id: ToastId);
}

#[derive(Debug, Clone)]
struct ActiveToast {
    id: ToastId,
    /// Stack position, 0 at the top
    slot: u32,
}

/// Lowest slot no live toast holds
fn free_slot(active: &[ActiveToast]) -> u32 {
    (0..=u32::MAX)
        .find(|slot| active.iter().all(|t| t.slot != *slot))
        .unwrap_or(u32::MAX)
}

/// Viewport offset of a stack slot
pub fn slot_top(config: &NotificationConfig, slot: u32) -> u32 {
    config
        .top_px
        .saturating_add(slot.saturating_mul(config.stack_spacing_px))
}

/// Inline style for a toast element
///
/// Starts translated off-screen; `slide_in` clears the translation.
pub fn toast_style(config: &NotificationConfig, top_px: u32) -> String {
    format!(
        "position: fixed; top: {top}px; right: 20px; background: {bg}; color: {fg}; \
         padding: 1rem 1.5rem; border-radius: 8px; z-index: 1001; \
         transform: translateX(100%); transition: transform {exit}ms ease;",
        top = top_px,
        bg = config.background,
        fg = config.foreground,
        exit = config.exit_ms,
    )
}

/// Shows toasts and drives each one through its timeline
pub struct Notifier {
    config: NotificationConfig,
    surface: Rc<dyn ToastSurface>,
    scheduler: Rc<dyn Scheduler>,
    /// Live toasts, oldest first
    active: RefCell<Vec<ActiveToast>>,
    next_id: Cell<u64>,
}

impl Notifier {
    pub fn new(
        config: NotificationConfig,
        surface: Rc<dyn ToastSurface>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Rc<Self> {
        Rc::new(Self {
            config,
            surface,
            scheduler,
            active: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        })
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Show `message`, returning the new toast's id
    ///
    /// Timeline relative to the call: slide in after `enter_delay`, slide
    /// out at `hold`, unmount `exit` later.
    pub fn show(self: &Rc<Self>, message: &str) -> ToastId {
        let id = ToastId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let slot = free_slot(&self.active.borrow());
        let top = slot_top(&self.config, slot);

        self.active.borrow_mut().push(ActiveToast { id, slot });
        self.surface.mount(id, message, top);
        tracing::debug!(toast = id.0, slot, "Toast mounted");

        let this = self.clone();
        self.scheduler.after(
            self.config.enter_delay(),
            Box::new(move || this.surface.slide_in(id)),
        );

        let this = self.clone();
        self.scheduler.after(
            self.config.hold(),
            Box::new(move || {
                this.surface.slide_out(id);

                let inner = this.clone();
                this.scheduler.after(
                    this.config.exit(),
                    Box::new(move || {
                        inner.active.borrow_mut().retain(|t| t.id != id);
                        inner.surface.unmount(id);
                    }),
                );
            }),
        );

        id
    }

    /// Ids of live toasts, oldest first
    #[cfg(test)]
    fn active(&self) -> Vec<ToastId> {
        self.active.borrow().iter().map(|t| t.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::VirtualScheduler;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Mount(u64, String, u32),
        In(u64),
        Out(u64),
        Unmount(u64),
    }

    #[derive(Default)]
    struct Recorder {
        ops: RefCell<Vec<(Duration, Op)>>,
        clock: RefCell<Option<Rc<VirtualScheduler>>>,
    }

    impl Recorder {
        fn record(&self, op: Op) {
            let now = self
                .clock
                .borrow()
                .as_ref()
                .map(|c| c.now())
                .unwrap_or_default();
            self.ops.borrow_mut().push((now, op));
        }

        fn ops_for(&self, id: u64) -> Vec<(Duration, Op)> {
            self.ops
                .borrow()
                .iter()
                .filter(|(_, op)| match op {
                    Op::Mount(i, ..) | Op::In(i) | Op::Out(i) | Op::Unmount(i) => *i == id,
                })
                .cloned()
                .collect()
        }
    }

    impl ToastSurface for Recorder {
        fn mount(&self, id: ToastId, message: &str, top_px: u32) {
            self.record(Op::Mount(id.0, message.to_string(), top_px));
        }
        fn slide_in(&self, id: ToastId) {
            self.record(Op::In(id.0));
        }
        fn slide_out(&self, id: ToastId) {
            self.record(Op::Out(id.0));
        }
        fn unmount(&self, id: ToastId) {
            self.record(Op::Unmount(id.0));
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn setup() -> (Rc<VirtualScheduler>, Rc<Recorder>, Rc<Notifier>) {
        let sched = Rc::new(VirtualScheduler::new());
        let recorder = Rc::new(Recorder::default());
        *recorder.clock.borrow_mut() = Some(sched.clone());
        let notifier = Notifier::new(
            NotificationConfig::default(),
            recorder.clone(),
            sched.clone(),
        );
        (sched, recorder, notifier)
    }

    #[test]
    fn test_single_toast_timeline() {
        let (sched, recorder, notifier) = setup();
        let id = notifier.show("Copiado");
        assert_eq!(notifier.active(), vec![id]);

        sched.advance(ms(3299));
        assert_eq!(notifier.active(), vec![id]);

        sched.advance(ms(1));
        assert!(notifier.active().is_empty());

        assert_eq!(
            recorder.ops_for(id.0),
            vec![
                (ms(0), Op::Mount(1, "Copiado".to_string(), 20)),
                (ms(100), Op::In(1)),
                (ms(3000), Op::Out(1)),
                (ms(3300), Op::Unmount(1)),
            ]
        );
    }

    #[test]
    fn test_overlapping_toasts_keep_independent_timelines() {
        let (sched, recorder, notifier) = setup();
        let first = notifier.show("uno");
        sched.advance(ms(500));
        let second = notifier.show("dos");

        assert_eq!(notifier.active(), vec![first, second]);

        sched.advance(ms(2800));
        // First is gone at 3300; second holds until 3500
        assert_eq!(notifier.active(), vec![second]);
        assert_eq!(
            recorder.ops_for(second.0).last().map(|(_, op)| op.clone()),
            Some(Op::In(2))
        );

        sched.advance(ms(500));
        assert!(notifier.active().is_empty());

        let second_ops = recorder.ops_for(second.0);
        assert_eq!(
            second_ops,
            vec![
                (ms(500), Op::Mount(2, "dos".to_string(), 84)),
                (ms(600), Op::In(2)),
                (ms(3500), Op::Out(2)),
                (ms(3800), Op::Unmount(2)),
            ]
        );
    }

    #[test]
    fn test_new_toast_takes_freed_slot_not_occupied_one() {
        let (sched, recorder, notifier) = setup();
        let a = notifier.show("a");
        sched.advance(ms(500));
        let b = notifier.show("b");
        sched.advance(ms(2900));

        // a unmounted at 3300, b still holds slot 1
        assert_eq!(notifier.active(), vec![b]);
        let c = notifier.show("c");

        let top_of = |id: ToastId| {
            recorder
                .ops_for(id.0)
                .into_iter()
                .find_map(|(_, op)| match op {
                    Op::Mount(_, _, top) => Some(top),
                    _ => None,
                })
        };
        assert_eq!(top_of(a), Some(20));
        assert_eq!(top_of(b), Some(84));
        assert_eq!(top_of(c), Some(20));
    }

    #[test]
    fn test_third_toast_stacks_below_two_live_ones() {
        let (sched, recorder, notifier) = setup();
        notifier.show("a");
        notifier.show("b");
        sched.advance(ms(100));
        let c = notifier.show("c");
        assert_eq!(
            recorder.ops_for(c.0)[0],
            (ms(100), Op::Mount(3, "c".to_string(), 148))
        );
    }

    #[test]
    fn test_slot_top_saturates() {
        let config = NotificationConfig {
            stack_spacing_px: u32::MAX,
            ..NotificationConfig::default()
        };
        assert_eq!(slot_top(&config, 0), 20);
        assert_eq!(slot_top(&config, 3), u32::MAX);
    }

    #[test]
    fn test_stack_slot_reused_after_removal() {
        let (sched, recorder, notifier) = setup();
        notifier.show("a");
        sched.advance(ms(4000));
        let later = notifier.show("b");
        assert_eq!(
            recorder.ops_for(later.0)[0],
            (ms(4000), Op::Mount(2, "b".to_string(), 20))
        );
    }

    #[test]
    fn test_style_starts_off_screen() {
        let style = toast_style(&NotificationConfig::default(), 84);
        assert!(style.contains("top: 84px"));
        assert!(style.contains("translateX(100%)"));
        assert!(style.contains("#10b981"));
    }
}
