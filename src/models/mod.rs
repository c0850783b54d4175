//! Defines the data structures used throughout the application.
//!
//! The catalog has a single entity, the `Course` record.

mod course;

pub use course::*;
