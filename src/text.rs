//! Text primitives
//!
//! Small splitting and searching helpers shared by the source analyses. All of
//! them borrow from their input and keep empty pieces, so callers see exactly
//! where delimiters were adjacent or sat at the boundaries.

use crate::java::error::{SourceError, SourceResult};
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").unwrap());

/// Split on `\n` or `\r\n`, keeping empty lines (including a trailing one).
pub fn break_into_lines(input: &str) -> Vec<&str> {
    LINE_BREAK.split(input).collect()
}

/// Split on a regex delimiter, keeping empty pieces.
pub fn break_into_lines_by<'a>(input: &'a str, delimiter: &str) -> SourceResult<Vec<&'a str>> {
    tokenize_regex(input, delimiter)
}

/// Split on any of a set of literal delimiters.
///
/// When several delimiters match at the same position the longest one wins.
/// An empty delimiter set returns the whole input as the single token.
pub fn tokenize<'a>(input: &'a str, delimiters: &[&str]) -> Vec<&'a str> {
    let delimiters: Vec<&str> = delimiters
        .iter()
        .copied()
        .filter(|d| !d.is_empty())
        .collect();
    if delimiters.is_empty() {
        return vec![input];
    }

    let mut tokens = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < input.len() {
        let matched = delimiters
            .iter()
            .filter(|d| input[i..].starts_with(**d))
            .map(|d| d.len())
            .max();
        match matched {
            Some(len) => {
                tokens.push(&input[start..i]);
                i += len;
                start = i;
            }
            None => i += input[i..].chars().next().map_or(1, char::len_utf8),
        }
    }
    tokens.push(&input[start..]);
    tokens
}

/// Split on a regex delimiter.
pub fn tokenize_regex<'a>(input: &'a str, pattern: &str) -> SourceResult<Vec<&'a str>> {
    let regex = Regex::new(pattern)
        .map_err(|e| SourceError::InvalidArgument(format!("invalid delimiter pattern: {}", e)))?;
    Ok(regex.split(input).collect())
}

/// Text after the first occurrence of `search`, or the whole input when absent.
pub fn after_search_string<'a>(input: &'a str, search: &str) -> &'a str {
    match input.find(search) {
        Some(index) => &input[index + search.len()..],
        None => input,
    }
}

pub fn starts_with_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
