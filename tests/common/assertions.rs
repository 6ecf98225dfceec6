//! Common assertion helpers for test output validation
//!
//! Provides predicates for the single status line gstatus prints and for the
//! silence expected when no line can be produced.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate matching exactly one status line
pub fn status_line(expected: &str) -> impl Predicate<str> {
    predicate::eq(format!("{expected}\n"))
}

/// Creates a predicate for the empty output of a swallowed failure
pub fn no_output() -> impl Predicate<str> {
    predicate::str::is_empty()
}

/// Creates a predicate that checks for a field at a given position of the line
pub fn has_field(index: usize, value: &str) -> impl Predicate<str> {
    let value = value.to_string();
    predicate::function(move |out: &str| out.split_whitespace().nth(index) == Some(value.as_str()))
}

/// Creates a predicate that checks for a reported error on stderr
pub fn reports_error(message: &str) -> impl Predicate<str> {
    predicate::str::contains("gstatus:").and(predicate::str::contains(message.to_string()))
}
