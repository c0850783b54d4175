//! Reads comma-delimited course records from a file into a `Catalog`.
//!
//! Each line has the form `<number>,<name>[,<prerequisite>]*`. There is no
//! header row and no quoting, so a comma inside a name splits the field.
//!
//! Loading stops at the first bad line. Courses inserted from earlier lines of
//! the same call stay in the catalog; nothing is rolled back.

use super::store::Catalog;
use super::validate::{is_valid_course_name, is_valid_course_number};
use crate::error::LoadError;
use crate::models::Course;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Loads every record in the file at `path` into `catalog`.
///
/// Returns the number of courses inserted. The file handle is closed before
/// this returns, on success or failure.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound`/`FileUnreadable` if the file cannot be
/// opened or read, or the record-level variant describing the first bad line.
pub fn load_courses(path: &Path, catalog: &mut Catalog) -> Result<usize, LoadError> {
    info!("Loading courses from {}", path.display());

    let file = File::open(path).map_err(|e| {
        warn!("Failed to open {}: {}", path.display(), e);
        LoadError::from_io(path, e)
    })?;

    let loaded = load_from_reader(BufReader::new(file), path, catalog)?;

    info!(
        "Loaded {} courses from {} ({} in catalog)",
        loaded,
        path.display(),
        catalog.len()
    );
    Ok(loaded)
}

/// Loads records from any buffered reader. `source` names the input in errors.
pub fn load_from_reader<R: BufRead>(
    reader: R,
    source: &Path,
    catalog: &mut Catalog,
) -> Result<usize, LoadError> {
    let mut loaded = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| LoadError::from_io(source, e))?;
        let line_no = index + 1;

        let course = parse_record(&line, line_no).inspect_err(|e| warn!("{}", e))?;
        debug!("Parsed line {}: {}", line_no, course.number);

        catalog.insert(course);
        loaded += 1;
    }

    Ok(loaded)
}

/// Validates a single line and builds the `Course` it describes.
pub fn parse_record(line: &str, line_no: usize) -> Result<Course, LoadError> {
    let tokens = tokenize(line);

    let [number, name, prerequisites @ ..] = tokens.as_slice() else {
        return Err(LoadError::MalformedRecord {
            line_no,
            line: line.to_string(),
        });
    };

    if !is_valid_course_number(number) {
        return Err(LoadError::InvalidCourseNumber {
            line_no,
            line: line.to_string(),
        });
    }

    if !is_valid_course_name(name) {
        return Err(LoadError::InvalidCourseName {
            line_no,
            line: line.to_string(),
        });
    }

    if let Some(bad) = prerequisites.iter().find(|p| !is_valid_course_number(p)) {
        return Err(LoadError::InvalidPrerequisite {
            line_no,
            line: line.to_string(),
            prerequisite: bad.to_string(),
        });
    }

    Ok(Course::new(number, name, prerequisites))
}

/// Splits a line on commas without trimming the fields.
///
/// A trailing `\r` is dropped. An empty line has no fields, and a single
/// empty field after a final comma is not counted.
fn tokenize(line: &str) -> Vec<&str> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Vec::new();
    }

    let mut tokens: Vec<&str> = line.split(',').collect();
    if tokens.last() == Some(&"") {
        tokens.pop();
    }
    tokens
}
