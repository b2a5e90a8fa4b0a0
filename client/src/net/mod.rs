//! Network layer for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only server call the page makes is the contact form submission.

pub mod api;
pub mod types;
