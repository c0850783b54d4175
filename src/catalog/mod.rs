//! The course catalog: validation, file loading and the ordered in-memory store.
//!
//! Data flows file text -> `loader` (tokenize and validate each line) -> `Catalog`
//! (ordered insert). Read-only queries over the result live in `crate::report`.

mod loader;
mod store;
mod validate;

pub use loader::load_courses;
pub use store::Catalog;
pub use validate::trim_ascii_whitespace;
