//! The `Course` record held by the catalog.

use crate::catalog::trim_ascii_whitespace;
use serde::Serialize;
use std::fmt;

/// A single catalog entry.
///
/// Fields are stored in normalized form: `number` and every prerequisite have
/// all ASCII whitespace removed, `name` has ASCII whitespace trimmed at both
/// ends. Prerequisites are not checked for existence in the catalog and may
/// dangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub number: String,
    pub name: String,
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Creates a new `Course`, normalizing the raw field values.
    ///
    /// Does not validate; callers are expected to have run the catalog
    /// validators over the raw values first.
    pub fn new<S: AsRef<str>>(number: &str, name: &str, prerequisites: &[S]) -> Self {
        Self {
            number: strip_whitespace(number),
            name: trim_ascii_whitespace(name).to_string(),
            prerequisites: prerequisites
                .iter()
                .map(|p| strip_whitespace(p.as_ref()))
                .collect(),
        }
    }

    /// Returns true if this course lists any prerequisites.
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// Prerequisites joined with single spaces, empty if there are none.
    pub fn prerequisites_joined(&self) -> String {
        self.prerequisites.join(" ")
    }
}

/// Removes every ASCII whitespace character, including interior ones.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course Number: {}, Course Name: {}",
            self.number, self.name
        )?;
        if self.has_prerequisites() {
            write!(f, ", Prerequisites: {}", self.prerequisites_joined())?;
        }
        Ok(())
    }
}
