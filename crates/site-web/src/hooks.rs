//! Component-scoped browser subscriptions
//!
//! Every listener and timer created here is released by `on_cleanup`, so
//! nothing outlives the component that asked for it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::ev;
use leptos::logging::warn;
use leptos::prelude::*;
use site_core::Route;

/// Vertical scroll offset of the window, kept current while the calling
/// component is mounted.
pub fn use_scroll_y() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(current_scroll_y());
    let handle = window_event_listener(ev::scroll, move |_| set_scroll_y.set(current_scroll_y()));
    on_cleanup(move || handle.remove());
    scroll_y
}

fn current_scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Sets the document title for a page.
pub fn use_page_title(route: Route) {
    document().set_title(route.title());
}

/// Jumps to the top of the page.
pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

/// One-shot timer primitives behind [`ScopedTimeout`]
pub trait TimerBackend: Copy + Send + Sync + 'static {
    type Handle: Send + Sync + 'static;

    /// Arm a timer. `None` when the host refused it.
    fn start(self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    fn clear(self, handle: Self::Handle);
}

/// `window.setTimeout` / `clearTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowTimers;

impl TimerBackend for WindowTimers {
    type Handle = TimeoutHandle;

    fn start(self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
        set_timeout_with_handle(callback, delay)
            .map_err(|err| warn!("failed to schedule timeout: {err:?}"))
            .ok()
    }

    fn clear(self, handle: TimeoutHandle) {
        handle.clear();
    }
}

type Slot<H> = Arc<Mutex<Option<H>>>;

fn take<H>(slot: &Mutex<Option<H>>) -> Option<H> {
    slot.lock().ok().and_then(|mut pending| pending.take())
}

/// A single pending timeout owned by the current component.
///
/// Scheduling again replaces the pending callback. Disposing the owner
/// clears it.
pub struct ScopedTimeout<B: TimerBackend = WindowTimers> {
    backend: B,
    pending: StoredValue<Slot<B::Handle>>,
}

impl<B: TimerBackend> Clone for ScopedTimeout<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: TimerBackend> Copy for ScopedTimeout<B> {}

impl ScopedTimeout {
    pub fn new() -> Self {
        Self::with_backend(WindowTimers)
    }
}

impl Default for ScopedTimeout {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: TimerBackend> ScopedTimeout<B> {
    pub fn with_backend(backend: B) -> Self {
        let slot: Slot<B::Handle> = Arc::default();
        let owned = Arc::clone(&slot);
        on_cleanup(move || {
            if let Some(handle) = take(&owned) {
                backend.clear(handle);
            }
        });
        Self {
            backend,
            pending: StoredValue::new(slot),
        }
    }

    pub fn schedule(self, delay: Duration, callback: impl FnOnce() + 'static) {
        let Some(slot) = self.pending.try_get_value() else {
            return;
        };
        if let Some(previous) = take(&slot) {
            self.backend.clear(previous);
        }

        let fired = Arc::clone(&slot);
        let armed = self.backend.start(
            delay,
            Box::new(move || {
                take(&fired);
                callback();
            }),
        );
        if let (Some(handle), Ok(mut pending)) = (armed, slot.lock()) {
            *pending = Some(handle);
        }
    }

    pub fn cancel(self) {
        if let Some(handle) = self.pending.try_get_value().and_then(|slot| take(&slot)) {
            self.backend.clear(handle);
        }
    }

    /// Whether a callback is armed and has not run yet
    pub fn is_pending(self) -> bool {
        self.pending
            .try_get_value()
            .is_some_and(|slot| slot.lock().is_ok_and(|pending| pending.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use site_core::{INTRO_DURATION, RESET_DELAY};

    use super::*;

    thread_local! {
        static ARMED: RefCell<Vec<(u32, Box<dyn FnOnce()>)>> = RefCell::new(Vec::new());
        static NEXT_ID: Cell<u32> = const { Cell::new(0) };
    }

    /// Timers that only run when the test says time has passed
    #[derive(Clone, Copy)]
    struct ManualTimers;

    impl TimerBackend for ManualTimers {
        type Handle = u32;

        fn start(self, _delay: Duration, callback: Box<dyn FnOnce()>) -> Option<u32> {
            let id = NEXT_ID.with(|next| {
                let id = next.get();
                next.set(id + 1);
                id
            });
            ARMED.with(|armed| armed.borrow_mut().push((id, callback)));
            Some(id)
        }

        fn clear(self, handle: u32) {
            ARMED.with(|armed| armed.borrow_mut().retain(|(id, _)| *id != handle));
        }
    }

    /// Let every armed delay elapse; returns how many callbacks ran
    fn elapse() -> usize {
        let due: Vec<_> = ARMED.with(|armed| armed.borrow_mut().drain(..).collect());
        let count = due.len();
        for (_, callback) in due {
            callback();
        }
        count
    }

    fn recorder() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_callback_runs_once_after_delay() {
        let owner = Owner::new();
        let timeout = owner.with(|| ScopedTimeout::with_backend(ManualTimers));
        let log = recorder();

        let sink = Rc::clone(&log);
        timeout.schedule(RESET_DELAY, move || sink.borrow_mut().push("reset"));
        assert!(timeout.is_pending());

        assert_eq!(elapse(), 1);
        assert_eq!(*log.borrow(), vec!["reset"]);
        assert!(!timeout.is_pending());
        assert_eq!(elapse(), 0);
    }

    #[test]
    fn test_reschedule_replaces_pending_callback() {
        let owner = Owner::new();
        let timeout = owner.with(|| ScopedTimeout::with_backend(ManualTimers));
        let log = recorder();

        let first = Rc::clone(&log);
        timeout.schedule(RESET_DELAY, move || first.borrow_mut().push("first"));
        let second = Rc::clone(&log);
        timeout.schedule(RESET_DELAY, move || second.borrow_mut().push("second"));

        assert_eq!(elapse(), 1);
        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn test_disposing_owner_clears_pending_callback() {
        let owner = Owner::new();
        let timeout = owner.with(|| ScopedTimeout::with_backend(ManualTimers));
        let log = recorder();

        let sink = Rc::clone(&log);
        timeout.schedule(INTRO_DURATION, move || sink.borrow_mut().push("loop"));
        owner.cleanup();

        assert_eq!(elapse(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_cancel_disarms_timer() {
        let owner = Owner::new();
        let timeout = owner.with(|| ScopedTimeout::with_backend(ManualTimers));
        let log = recorder();

        let sink = Rc::clone(&log);
        timeout.schedule(RESET_DELAY, move || sink.borrow_mut().push("reset"));
        timeout.cancel();

        assert!(!timeout.is_pending());
        assert_eq!(elapse(), 0);
        assert!(log.borrow().is_empty());
    }
}
