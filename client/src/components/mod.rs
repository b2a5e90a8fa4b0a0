//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render landing page sections. Stateful widgets keep their
//! rules in `crate::state` and only wire DOM events to those types.

pub mod contact_form;
pub mod contact_modal;
pub mod cta_section;
pub mod faq_accordion;
pub mod features;
pub mod footer;
pub mod hero;
pub mod image_carousel;
pub mod modal;
pub mod navbar;
pub mod stats_band;
pub mod testimonial_carousel;
