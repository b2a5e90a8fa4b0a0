//! Single-select FAQ accordion state.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

/// Which panel, if any, is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionState {
    len: usize,
    selection: Selection,
}

impl AccordionState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, selection: Selection::Closed }
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.selection == Selection::Open(index)
    }

    /// Collapse `index` if it is open, otherwise open it (closing any other).
    /// Indices outside the panel list are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.selection = match self.selection {
            Selection::Open(open) if open == index => Selection::Closed,
            _ => Selection::Open(index),
        };
    }
}
