use super::*;

// Each #[test] runs on its own thread, so the thread-local depth starts at 0.

#[test]
fn unlocked_by_default() {
    assert!(!is_locked());
    assert_eq!(depth(), 0);
}

#[test]
fn acquire_locks_and_drop_unlocks() {
    let guard = ScrollLock::acquire();
    assert!(is_locked());
    drop(guard);
    assert!(!is_locked());
}

#[test]
fn nested_locks_release_on_last_drop() {
    let outer = ScrollLock::acquire();
    let inner = ScrollLock::acquire();
    assert_eq!(depth(), 2);
    drop(outer);
    assert!(is_locked());
    drop(inner);
    assert!(!is_locked());
}

#[test]
fn lock_released_during_unwind() {
    let result = std::panic::catch_unwind(|| {
        let _guard = ScrollLock::acquire();
        assert!(is_locked());
        panic!("modal torn down abnormally");
    });
    assert!(result.is_err());
    assert!(!is_locked());
}

#[test]
fn option_slot_take_releases() {
    let mut slot = Some(ScrollLock::acquire());
    assert!(is_locked());
    slot.take();
    assert!(!is_locked());
}

#[test]
fn sync_holds_lock_only_while_open() {
    let mut slot = None;
    sync(&mut slot, true);
    assert!(is_locked());

    sync(&mut slot, false);
    assert!(!is_locked());
    assert!(slot.is_none());
}

#[test]
fn sync_reopen_keeps_single_guard() {
    let mut slot = None;
    sync(&mut slot, true);
    sync(&mut slot, true);
    assert_eq!(depth(), 1);
    sync(&mut slot, false);
    assert_eq!(depth(), 0);
}

#[test]
fn dropping_open_slot_unlocks() {
    let mut slot = None;
    sync(&mut slot, true);
    assert!(is_locked());
    drop(slot);
    assert!(!is_locked());
}
