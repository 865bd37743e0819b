use gloo_timers::callback::Timeout;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// Single pending timer. Scheduling again drops (and thereby cancels) the
/// previous one, so only the last call within the window fires.
#[derive(Clone, Default)]
pub struct Debouncer {
    timer: Rc<RefCell<Option<Timeout>>>,
    armed: Rc<Cell<bool>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let armed = Rc::clone(&self.armed);
        let timeout = Timeout::new(delay_ms, move || {
            armed.set(false);
            callback();
        });
        self.armed.set(true);
        self.timer.borrow_mut().replace(timeout);
    }

    pub fn cancel(&self) {
        self.armed.set(false);
        if let Some(timeout) = self.timer.borrow_mut().take() {
            timeout.cancel();
        }
    }

    /// True from `schedule` until the callback runs or is cancelled.
    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }
}

/// Monotonic ticket counter used to drop responses that were overtaken by
/// a newer request.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}
