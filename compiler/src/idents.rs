use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A case boundary is an uppercase letter directly after a lowercase
    // letter or a digit. Consecutive uppercase letters are not boundaries,
    // so "ABC" stays a single word.
    static ref CASE_BOUNDARY:  Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Converts a camelCase config key to an UPPER_SNAKE_CASE constant name.
///
/// Non-alphanumeric characters pass through verbatim; the function is total
/// and idempotent on already-normalized input.
pub fn camel_to_constant(input: &str) -> String {
    CASE_BOUNDARY
        .replace_all(input, "${1}_${2}")
        .to_uppercase()
}

/// Collapses every whitespace run to a single space and trims the ends.
///
/// Free text in the schema comes from pretty-printed markup and may carry
/// newlines and indentation; collapsed text is safe to embed in a doc block.
pub fn collapse_whitespace(input: &str) -> String {
    WHITESPACE_RUN.replace_all(input.trim(), " ").into_owned()
}
