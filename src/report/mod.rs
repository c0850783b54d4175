//! Read-only reports over the course catalog.
//!
//! Includes:
//! - `list_all`: every course in course-number order.
//! - `describe`: a single course looked up by exact number.

mod render;

pub use render::*;
