//! Reference-counted body scroll lock.
//!
//! Modals hold a [`ScrollLock`] guard while open. The first guard saves the
//! body's `overflow` style and sets it to `hidden`; dropping the last guard
//! restores the saved value. Nested or overlapping modals therefore never
//! clobber each other's restore value, and unmounting a modal releases its
//! lock through `Drop`.
//!
//! Depth is tracked per thread, which matches the single-threaded browser
//! event loop. SSR and tests track depth without touching any DOM.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

use std::cell::RefCell;
use std::marker::PhantomData;

#[derive(Default)]
struct LockState {
    depth: usize,
    saved_overflow: Option<String>,
}

thread_local! {
    static LOCK: RefCell<LockState> = RefCell::new(LockState::default());
}

/// Guard that keeps page scrolling disabled until dropped.
#[must_use = "scrolling is restored as soon as the guard is dropped"]
pub struct ScrollLock {
    // Tied to the thread-local depth counter.
    _not_send: PhantomData<*const ()>,
}

impl ScrollLock {
    pub fn acquire() -> Self {
        LOCK.with(|cell| {
            let mut state = cell.borrow_mut();
            if state.depth == 0 {
                state.saved_overflow = Some(read_body_overflow());
                write_body_overflow("hidden");
            }
            state.depth += 1;
        });
        Self { _not_send: PhantomData }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        LOCK.with(|cell| {
            let mut state = cell.borrow_mut();
            state.depth = state.depth.saturating_sub(1);
            if state.depth == 0 {
                let saved = state.saved_overflow.take().unwrap_or_default();
                write_body_overflow(&saved);
            }
        });
    }
}

/// Hold a guard in `slot` exactly while `open` is true.
///
/// Re-syncing an already-open slot keeps the existing guard.
pub fn sync(slot: &mut Option<ScrollLock>, open: bool) {
    if !open {
        slot.take();
    } else if slot.is_none() {
        *slot = Some(ScrollLock::acquire());
    }
}

/// Whether any guard is currently held on this thread.
#[must_use]
pub fn is_locked() -> bool {
    depth() > 0
}

/// Number of live guards on this thread.
#[must_use]
pub fn depth() -> usize {
    LOCK.with(|cell| cell.borrow().depth)
}

fn read_body_overflow() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

fn write_body_overflow(value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let style = body.style();
            if value.is_empty() {
                let _ = style.remove_property("overflow");
            } else {
                let _ = style.set_property("overflow", value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}
