//! Syntax checks for course numbers and course names.

/// Required length of a course number once whitespace is removed.
pub const COURSE_NUMBER_LEN: usize = 7;

/// Maximum length in bytes of a course name once trimmed.
pub const MAX_COURSE_NAME_LEN: usize = 55;

/// Checks whether `raw` is a well-formed course number.
///
/// All ASCII whitespace is removed first, interior spaces included. The
/// remainder must be exactly seven ASCII letters or digits.
pub fn is_valid_course_number(raw: &str) -> bool {
    let mut len = 0;
    for c in raw.bytes().filter(|b| !b.is_ascii_whitespace()) {
        if !c.is_ascii_alphanumeric() {
            return false;
        }
        len += 1;
    }
    len == COURSE_NUMBER_LEN
}

/// Checks whether `raw` is an acceptable course name.
///
/// Only leading and trailing ASCII whitespace is ignored. The trimmed name
/// must be non-empty and at most 55 bytes long.
pub fn is_valid_course_name(raw: &str) -> bool {
    let len = trim_ascii_whitespace(raw).len();
    (1..=MAX_COURSE_NAME_LEN).contains(&len)
}

/// Trims ASCII whitespace from both ends, leaving other Unicode spaces alone.
pub fn trim_ascii_whitespace(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_ascii_whitespace())
}
