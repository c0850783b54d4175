//! The in-memory course catalog, kept sorted by course number.

use crate::models::Course;
use tracing::{debug, warn};

/// An ordered collection of courses.
///
/// Iteration order is always ascending byte-wise order of `Course::number`.
/// Duplicate numbers are not rejected: a later insert lands in front of the
/// existing entries with the same number, so it is the one `lookup` returns.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `course` before the first existing entry whose number is not
    /// less than its own.
    pub fn insert(&mut self, course: Course) {
        let index = self
            .courses
            .partition_point(|existing| existing.number < course.number);

        if self
            .courses
            .get(index)
            .is_some_and(|existing| existing.number == course.number)
        {
            warn!(
                "Course {} is already in the catalog; keeping both entries",
                course.number
            );
        }

        debug!("Inserting course {} at position {}", course.number, index);
        self.courses.insert(index, course);
    }

    /// Returns the first course whose number equals `number` exactly.
    pub fn lookup(&self, number: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.number == number)
    }

    /// All courses in ascending course-number order.
    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    /// Iterates over the courses in course-number order.
    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    /// Number of courses, duplicates included.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns true if nothing has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
