//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a secret for `Debug` output.
///
/// Values shorter than 12 characters are hidden completely. Longer values keep their first
/// and last three characters so two different keys can still be told apart in logs.
pub struct Redact<'a>(Option<&'a str>);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(Some(value))
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(Some(value.as_str()))
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(v) = self.0 else {
            return f.write_str("None");
        };

        let length = v.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 || !v.is_char_boundary(3) || !v.is_char_boundary(length - 3) {
            f.write_str("***")
        } else {
            write!(f, "{}***{}", &v[..3], &v[length - 3..])
        }
    }
}
