//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes argument parsing, the menu choices and prompts of the interactive
//! shell, and the `App` state that owns the session's catalog.

mod commands;

pub use commands::*;
