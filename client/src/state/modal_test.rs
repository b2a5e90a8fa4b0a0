use super::*;

#[test]
fn modal_starts_closed() {
    assert!(!ModalState::default().is_open);
}

#[test]
fn open_then_close() {
    let mut state = ModalState::default();
    state.open();
    assert!(state.is_open);
    state.close();
    assert!(!state.is_open);
}

#[test]
fn close_when_already_closed_stays_closed() {
    let mut state = ModalState::default();
    state.close();
    assert!(!state.is_open);
}

#[test]
fn reopen_is_idempotent() {
    let mut state = ModalState::default();
    state.open();
    state.open();
    assert!(state.is_open);
}
