//! Field-format checks shared by all resources.
//!
//! Each check returns the normalized value on pass and `None` on fail;
//! callers decide how to report the failure.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap());

/// Email syntax check; trims surrounding whitespace.
pub fn email(value: &str) -> Option<String> {
    let value = value.trim();
    EMAIL.is_match(value).then(|| value.to_string())
}

/// Integer check, used for ids and ages.
pub fn integer(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Absolute http(s) URL check.
pub fn url(value: &str) -> Option<String> {
    let value = value.trim();
    URL.is_match(value).then(|| value.to_string())
}

/// Strips markup and control characters from a free-text term before it is
/// bound into a query.
pub fn sanitize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_tag = false;
    for c in value.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if in_tag || c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}
