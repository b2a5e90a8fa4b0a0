//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and delivery so route handlers can stay
//! focused on protocol translation and rate limiting.

pub mod contact;
pub mod mailer;
