//! Client-side UI state.
//!
//! DESIGN
//! ======
//! Every stateful widget on the landing page keeps its rules in a plain
//! struct here. Components wrap these in `RwSignal`s and only translate
//! DOM events into method calls.

pub mod accordion;
pub mod carousel;
pub mod contact;
pub mod modal;
