//! Generic type parameters
//!
//! Extraction tokenizes the top-level, comma-separated list that follows the
//! first `<` of a type name. Nested brackets are tracked so that
//! `Map<String, List<Integer>>` yields two parameters, not three.
//!
//! Parameters are returned as written (trimmed), bound clauses included:
//! `Widget<T, U extends Number>` gives `["T", "U extends Number"]`. Use
//! [`extract_type_parameter_names`] for the bare names.

use crate::java::declarations::{declared_type_name, split_at_keyword};
use crate::java::error::SourceResult;
use crate::text::after_search_string;

const BOUND_MARKERS: [&str; 2] = [" extends ", " super "];

/// Top-level generic parameters of `type_name`, in source order.
///
/// A non-empty trailing slot is always kept. An empty one is kept only when
/// every slot before it is empty too, so `Map<,>` has two empty parameters
/// while `Map<A,>` has one and `List<>` has none.
pub fn extract_generic_types(type_name: &str) -> Vec<String> {
    let Some(open) = type_name.find('<') else {
        return Vec::new();
    };

    let mut parameters = Vec::new();
    let mut depth = 1usize;
    let mut current = String::new();

    for c in type_name[open + 1..].chars() {
        match c {
            '<' => {
                depth += 1;
                current.push(c);
            }
            '>' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
                current.push(c);
            }
            ',' if depth == 1 => {
                parameters.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    let all_slots_empty = !parameters.is_empty() && parameters.iter().all(String::is_empty);
    if !current.is_empty() || all_slots_empty {
        parameters.push(current.trim().to_string());
    }

    parameters
}

/// Bare parameter name: the text before the first `extends` or `super` bound.
pub fn type_parameter_name(parameter: &str) -> String {
    let bound = BOUND_MARKERS
        .iter()
        .find_map(|marker| parameter.find(marker).filter(|&index| index > 0));

    match bound {
        Some(index) => parameter[..index].trim().to_string(),
        None => parameter.trim().to_string(),
    }
}

/// Like [`extract_generic_types`], with bound clauses stripped.
pub fn extract_type_parameter_names(type_name: &str) -> Vec<String> {
    extract_generic_types(type_name)
        .iter()
        .map(|parameter| type_parameter_name(parameter))
        .collect()
}

/// Generic parameters declared directly on the type of a declaration line.
///
/// Only a `<` right after the type name counts, so the `Bar<String>` in
/// `class Foo extends Bar<String>` is ignored.
pub fn declared_generic_types(line: &str) -> SourceResult<Vec<String>> {
    let name = declared_type_name(line)?;
    let (_, rest) = split_at_keyword(line)?;

    let after_name = after_search_string(rest, &name).trim_start();
    if after_name.starts_with('<') {
        Ok(extract_generic_types(after_name))
    } else {
        Ok(Vec::new())
    }
}
