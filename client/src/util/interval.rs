//! Holder for at most one running interval.
//!
//! The carousel keeps its browser interval in an [`IntervalSlot`]. Handles
//! are expected to cancel themselves on drop (as `gloo_timers` intervals
//! do), so clearing the slot or dropping it stops the timer.

#[cfg(test)]
#[path = "interval_test.rs"]
mod interval_test;

pub struct IntervalSlot<H> {
    handle: Option<H>,
}

impl<H> Default for IntervalSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> IntervalSlot<H> {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Start a timer unless one is already running. Returns whether `start`
    /// was called.
    pub fn ensure(&mut self, start: impl FnOnce() -> H) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(start());
        true
    }

    /// Drop the running timer, if any. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        self.handle.take().is_some()
    }

    /// Bring the slot in line with `running`.
    pub fn sync(&mut self, running: bool, start: impl FnOnce() -> H) {
        if running {
            self.ensure(start);
        } else {
            self.cancel();
        }
    }
}
