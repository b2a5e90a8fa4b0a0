use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::state::carousel::{AUTOPLAY_PERIOD_MS, CarouselState};

/// Fake timer handle that tracks how many are alive.
struct FakeHandle {
    live: Rc<Cell<usize>>,
}

impl FakeHandle {
    fn start(live: &Rc<Cell<usize>>) -> Self {
        live.set(live.get() + 1);
        Self { live: Rc::clone(live) }
    }
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[test]
fn ensure_starts_only_once() {
    let live = Rc::new(Cell::new(0));
    let mut slot = IntervalSlot::default();
    assert!(slot.ensure(|| FakeHandle::start(&live)));
    assert!(!slot.ensure(|| FakeHandle::start(&live)));
    assert_eq!(live.get(), 1);
    assert!(slot.is_active());
}

#[test]
fn cancel_drops_handle() {
    let live = Rc::new(Cell::new(0));
    let mut slot = IntervalSlot::default();
    slot.ensure(|| FakeHandle::start(&live));
    assert!(slot.cancel());
    assert_eq!(live.get(), 0);
    assert!(!slot.cancel());
}

#[test]
fn dropping_slot_cancels_timer() {
    let live = Rc::new(Cell::new(0));
    {
        let mut slot = IntervalSlot::default();
        slot.ensure(|| FakeHandle::start(&live));
        assert_eq!(live.get(), 1);
    }
    assert_eq!(live.get(), 0);
}

#[test]
fn toggling_play_twice_leaves_one_timer() {
    let live = Rc::new(Cell::new(0));
    let mut slot = IntervalSlot::default();
    let mut carousel = CarouselState::new(3).unwrap();

    slot.sync(carousel.is_playing(), || FakeHandle::start(&live));
    carousel.toggle_play();
    slot.sync(carousel.is_playing(), || FakeHandle::start(&live));
    assert_eq!(live.get(), 0);
    carousel.toggle_play();
    slot.sync(carousel.is_playing(), || FakeHandle::start(&live));

    assert!(carousel.is_playing());
    assert_eq!(live.get(), 1);
}

#[test]
fn repeated_sync_while_playing_never_leaks() {
    let live = Rc::new(Cell::new(0));
    let mut slot = IntervalSlot::default();
    for _ in 0..10 {
        slot.sync(true, || FakeHandle::start(&live));
    }
    assert_eq!(live.get(), 1);
}

#[test]
fn each_interval_firing_advances_once() {
    let mut carousel = CarouselState::new(3).unwrap();
    for expected in [1, 2, 0] {
        assert_eq!(carousel.elapse(AUTOPLAY_PERIOD_MS), 1);
        assert_eq!(carousel.current(), expected);
    }
}
