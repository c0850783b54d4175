//! Renders catalog listings and course details as text, a table or JSON.
//!
//! Reports are written to any `io::Write` so the shell can print them to
//! stdout and tests can capture them.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Course;
use clap::ValueEnum;
use comfy_table::Table;
use serde_json::json;
use std::io::Write;
use tracing::debug;

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One `Course Number: ..., Course Name: ...` line per course.
    #[default]
    Text,
    /// A bordered table with one row per course.
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Result of looking up a single course. Not finding a course is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome<'a> {
    Found(&'a Course),
    NotFound(String),
}

impl LookupOutcome<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}

/// Writes every course in ascending course-number order.
///
/// An empty catalog produces an empty listing (an empty array for JSON);
/// deciding whether to show a "load data first" hint is up to the caller.
pub fn list_all<W: Write>(catalog: &Catalog, format: ReportFormat, out: &mut W) -> Result<()> {
    debug!("Listing {} courses as {:?}", catalog.len(), format);

    match format {
        ReportFormat::Text => {
            for course in catalog {
                writeln!(out, "{course}")?;
            }
        },
        ReportFormat::Table => {
            writeln!(out, "{}", course_table(catalog.all()))?;
        },
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, catalog.all())?;
            writeln!(out)?;
        },
    }

    Ok(())
}

/// Looks up `number` exactly and writes either the course or a not-found notice.
pub fn describe<'a, W: Write>(
    catalog: &'a Catalog,
    number: &str,
    format: ReportFormat,
    out: &mut W,
) -> Result<LookupOutcome<'a>> {
    let outcome = match catalog.lookup(number) {
        Some(course) => LookupOutcome::Found(course),
        None => LookupOutcome::NotFound(number.to_string()),
    };
    debug!("Lookup of '{}' found: {}", number, outcome.is_found());

    match (&outcome, format) {
        (LookupOutcome::Found(course), ReportFormat::Text) => writeln!(out, "{course}")?,
        (LookupOutcome::Found(course), ReportFormat::Table) => {
            writeln!(out, "{}", course_table(std::slice::from_ref(*course)))?
        },
        (LookupOutcome::Found(course), ReportFormat::Json) => {
            serde_json::to_writer_pretty(&mut *out, course)?;
            writeln!(out)?;
        },
        (LookupOutcome::NotFound(number), ReportFormat::Json) => {
            serde_json::to_writer_pretty(&mut *out, &json!({ "not_found": number }))?;
            writeln!(out)?;
        },
        (LookupOutcome::NotFound(number), _) => writeln!(out, "Course not found: {number}")?,
    }

    Ok(outcome)
}

fn course_table(courses: &[Course]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Number", "Name", "Prerequisites"]);
    for course in courses {
        table.add_row(vec![
            course.number.clone(),
            course.name.clone(),
            course.prerequisites_joined(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(Course::new("CSCI201", "Data Structures", &["CSCI101"]));
        catalog.insert(Course::new::<&str>("CSCI101", "Intro to Programming", &[]));
        catalog
    }

    fn render_list(catalog: &Catalog, format: ReportFormat) -> String {
        let mut out = Vec::new();
        list_all(catalog, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_all_text_in_course_order() {
        let output = render_list(&sample_catalog(), ReportFormat::Text);
        assert_eq!(
            output,
            "Course Number: CSCI101, Course Name: Intro to Programming\n\
             Course Number: CSCI201, Course Name: Data Structures, Prerequisites: CSCI101\n"
        );
    }

    #[test]
    fn test_list_all_empty_catalog_writes_nothing() {
        assert!(render_list(&Catalog::new(), ReportFormat::Text).is_empty());
        assert_eq!(render_list(&Catalog::new(), ReportFormat::Json).trim(), "[]");
    }

    #[test]
    fn test_list_all_table_has_every_course() {
        let output = render_list(&sample_catalog(), ReportFormat::Table);
        assert!(output.contains("Prerequisites"));
        let first = output.find("CSCI101").unwrap();
        let second = output.find("CSCI201").unwrap();
        assert!(first < second);
        assert!(output.contains("Data Structures"));
    }

    #[test]
    fn test_list_all_json() {
        let output = render_list(&sample_catalog(), ReportFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["number"], "CSCI101");
        assert_eq!(value[1]["prerequisites"][0], "CSCI101");
    }

    #[test]
    fn test_describe_found() {
        let catalog = sample_catalog();
        let mut out = Vec::new();

        let outcome = describe(&catalog, "CSCI201", ReportFormat::Text, &mut out).unwrap();

        assert!(outcome.is_found());
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Data Structures"));
        assert!(output.contains("Prerequisites: CSCI101"));
    }

    #[test]
    fn test_describe_not_found_is_not_an_error() {
        let catalog = sample_catalog();
        let mut out = Vec::new();

        let outcome = describe(&catalog, "CSCI999", ReportFormat::Text, &mut out).unwrap();

        assert_eq!(outcome, LookupOutcome::NotFound("CSCI999".to_string()));
        assert_eq!(String::from_utf8(out).unwrap(), "Course not found: CSCI999\n");
    }

    #[test]
    fn test_describe_not_found_json() {
        let mut out = Vec::new();
        describe(&Catalog::new(), "CSCI999", ReportFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["not_found"], "CSCI999");
    }
}
