//! Type declaration scanning
//!
//! A type declaration is a single line introducing a `class`, `interface` or
//! `record`, optionally preceded by modifiers. Detection is a prefix regex
//! match: whatever follows the identifier (generics, braces, `extends`
//! clauses) is neither required nor rejected.
//!
//! A compilation unit usually holds several candidates (nested types, helper
//! classes). [`find_relevant_declaration`] picks "the" type of the file:
//! the unique public one, otherwise the unique non-public one.

use crate::java::classes::has_valid_class_name_format;
use crate::java::error::{SourceError, SourceResult};
use crate::text::{break_into_lines, is_blank, tokenize};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

static TYPE_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\s*)(public\s+|private\s+|protected\s+|static\s+|final\s+|abstract\s+)*(class|interface|record)\s+[A-Za-z0-9_$]+",
    )
    .unwrap()
});

/// Leftmost keyword standing as its own word
static DECLARATION_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)(class|interface|record)\s+").unwrap());

/// Delimiters that end the type name after the keyword
const NAME_DELIMITERS: &[&str] = &[" ", "\t", "\r", "\n", "\x0B", "\x0C", "<", ">", "{"];

const RECORD_COMPONENTS_OPEN: char = '(';

/// One recognized declaration line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub is_public: bool,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, is_public: bool) -> Self {
        TypeDeclaration {
            name: name.into(),
            is_public,
        }
    }

    /// Whether the name follows the conventional class-name format
    pub fn is_type_name_valid(&self) -> bool {
        has_valid_class_name_format(&self.name)
    }
}

pub fn is_type_declaration(line: &str) -> bool {
    TYPE_DECLARATION.is_match(line)
}

/// Parse a declaration line into its name and visibility.
///
/// The type is public when `public` appears among the modifiers in front of
/// the keyword; occurrences after the keyword (bounds, names such as
/// `PublicApi`) do not count.
pub fn parse_type_declaration(line: &str) -> SourceResult<TypeDeclaration> {
    let (modifiers, rest) = split_at_keyword(line)?;

    let name = tokenize(rest, NAME_DELIMITERS)
        .first()
        .copied()
        .unwrap_or_default();
    if name.is_empty() {
        return Err(SourceError::InvalidArgument(format!(
            "no type name in {:?}",
            line.trim()
        )));
    }

    let is_public = modifiers
        .split_whitespace()
        .any(|modifier| modifier == "public");

    Ok(TypeDeclaration::new(name, is_public))
}

/// Declared name with a record component list cut off.
///
/// [`parse_type_declaration`] keeps `Point(int` for `record Point(int x) {`;
/// this returns `Point`.
pub fn declared_type_name(line: &str) -> SourceResult<String> {
    let declaration = parse_type_declaration(line)?;
    let name = match declaration.name.split_once(RECORD_COMPONENTS_OPEN) {
        Some((name, _)) if !name.is_empty() => name,
        _ => declaration.name.as_str(),
    };
    Ok(name.to_string())
}

/// Split a trimmed declaration line into the text before the keyword and the
/// text after it (starting at the type name).
pub(crate) fn split_at_keyword(line: &str) -> SourceResult<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return Err(SourceError::InvalidArgument(
            "line cannot be blank".to_string(),
        ));
    }

    let (keyword, whole) = DECLARATION_KEYWORD
        .captures(line)
        .and_then(|caps| caps.get(1).zip(caps.get(0)))
        .ok_or_else(|| {
            SourceError::InvalidArgument(format!("no class, interface or record in {:?}", line))
        })?;

    Ok((&line[..keyword.start()], &line[whole.end()..]))
}

/// Every declaration line in `source_code`, in document order.
pub fn type_declarations_in(source_code: &str) -> SourceResult<Vec<TypeDeclaration>> {
    break_into_lines(source_code)
        .into_iter()
        .map(str::trim)
        .filter(|line| is_type_declaration(line))
        .map(parse_type_declaration)
        .collect()
}

/// The unique public declaration, else the unique non-public one.
pub fn find_relevant_declaration(declarations: &[TypeDeclaration]) -> SourceResult<TypeDeclaration> {
    if let Some(declaration) = unique_declaration(declarations, true) {
        return Ok(declaration.clone());
    }
    if let Some(declaration) = unique_declaration(declarations, false) {
        return Ok(declaration.clone());
    }

    debug!(
        candidates = declarations.len(),
        "no unique type declaration among candidates"
    );
    Err(SourceError::NoUniqueDeclaration)
}

/// Name of the type a compilation unit declares.
pub fn find_unique_type_name(source_code: &str) -> SourceResult<String> {
    if is_blank(source_code) {
        return Err(SourceError::EmptyInput(
            "Source code cannot be null or blank".to_string(),
        ));
    }

    let declarations = type_declarations_in(source_code.trim())?;
    let declaration = find_relevant_declaration(&declarations)?;
    debug!(name = %declaration.name, public = declaration.is_public, "found unique type");
    Ok(declaration.name)
}

fn unique_declaration(declarations: &[TypeDeclaration], public: bool) -> Option<&TypeDeclaration> {
    let distinct: HashSet<&TypeDeclaration> = declarations
        .iter()
        .filter(|d| d.is_public == public)
        .collect();

    if distinct.len() == 1 {
        distinct.into_iter().next()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_public_generic_class() {
        let declaration = parse_type_declaration("public class Foo<T>").unwrap();
        assert_eq!(declaration, TypeDeclaration::new("Foo", true));
    }

    #[test]
    fn test_record_components_stay_in_the_name() {
        let declaration = parse_type_declaration("record Point(int x, int y) {").unwrap();
        assert_eq!(declaration, TypeDeclaration::new("Point(int", false));
    }

    #[rstest]
    #[case("record Point(int x, int y) {", "Point")]
    #[case("public record Pair<A, B>(A a, B b) {", "Pair")]
    #[case("public class Widget {", "Widget")]
    #[case("class (odd) {", "(odd)")]
    fn test_declared_type_name(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(declared_type_name(line).unwrap(), expected);
    }

    #[test]
    fn test_public_only_counts_as_modifier() {
        let declaration =
            parse_type_declaration("class Handler<T extends publicApi> implements Public {").unwrap();
        assert!(!declaration.is_public);
    }

    #[test]
    fn test_keyword_inside_name_is_not_a_keyword() {
        let declaration = parse_type_declaration("public interface Subclass extends Base").unwrap();
        assert_eq!(declaration.name, "Subclass");
    }

    #[test]
    fn test_blank_or_keywordless_lines_fail() {
        assert!(matches!(
            parse_type_declaration("   "),
            Err(SourceError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_type_declaration("public enum Color"),
            Err(SourceError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_type_declaration("public class {"),
            Err(SourceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_duplicate_public_declarations_collapse() {
        let declarations = vec![
            TypeDeclaration::new("Foo", true),
            TypeDeclaration::new("Foo", true),
            TypeDeclaration::new("Helper", false),
        ];
        assert_eq!(
            find_relevant_declaration(&declarations).unwrap(),
            TypeDeclaration::new("Foo", true)
        );
    }

    #[test]
    fn test_falls_back_to_unique_non_public() {
        let declarations = vec![
            TypeDeclaration::new("A", true),
            TypeDeclaration::new("B", true),
            TypeDeclaration::new("Only", false),
        ];
        assert_eq!(find_relevant_declaration(&declarations).unwrap().name, "Only");
    }

    #[test]
    fn test_ambiguous_or_empty_candidates_fail() {
        assert!(matches!(
            find_relevant_declaration(&[]),
            Err(SourceError::NoUniqueDeclaration)
        ));
        let declarations = vec![
            TypeDeclaration::new("A", false),
            TypeDeclaration::new("B", false),
        ];
        assert!(matches!(
            find_relevant_declaration(&declarations),
            Err(SourceError::NoUniqueDeclaration)
        ));
    }

    #[test]
    fn test_type_name_validity() {
        assert!(TypeDeclaration::new("Widget", true).is_type_name_valid());
        assert!(!TypeDeclaration::new("widget", true).is_type_name_valid());
    }
}
