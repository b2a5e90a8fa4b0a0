//! Open/closed flag for page-level modals.
//!
//! The landing page owns one of these for the contact modal; every
//! call-to-action button opens it and any dismissal path closes it.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
}

impl ModalState {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}
