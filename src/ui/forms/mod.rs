//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `registration_form`: The scrolling registration form

mod field_renderer;
mod registration_form;

pub use field_renderer::{draw_select_field, draw_text_field};
pub use registration_form::draw as draw_registration;
