//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `register_form`: Multi-step registration form

mod field_renderer;
mod register_form;

pub use field_renderer::draw_help_text;
pub use register_form::draw_register;
