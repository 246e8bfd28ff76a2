//! Package declarations
//!
//! Extraction works on whole compilation units: block comments are stripped
//! first, then every line that does not start with a comment is matched
//! against the `package` declaration pattern. Only the first declaration in
//! document order counts.

use crate::java::comments::{does_line_not_start_with_a_comment, remove_block_comments};
use crate::java::error::{SourceError, SourceResult};
use crate::text::{break_into_lines, is_blank};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;
use tracing::{debug, trace};

static PACKAGE_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*package\s+([A-Za-z0-9_.]+)\s*;.*$").unwrap());

static ALLOWED_PACKAGE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._]+$").unwrap());

const SUB_PACKAGE_SEPARATOR: char = '.';

/// Dotted name from the first `package <name>;` line.
pub fn extract_package_name(class_content: &str) -> SourceResult<String> {
    if class_content.is_empty() || !class_content.contains("package") {
        trace!("no package keyword present, skipping scan");
        return Err(SourceError::NoPackageFound);
    }

    let stripped = remove_block_comments(class_content.trim());
    let package = break_into_lines(&stripped)
        .into_iter()
        .filter(|line| does_line_not_start_with_a_comment(line))
        .find_map(|line| {
            PACKAGE_DECLARATION
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        });

    match package {
        Some(name) => {
            debug!(package = %name, "extracted package name");
            Ok(name)
        }
        None => Err(SourceError::NoPackageFound),
    }
}

/// Package name with `current_package` (and the separating dot) cut off the end.
///
/// The last occurrence of `current_package` marks the cut. When it does not
/// occur the full package name is returned.
pub fn extract_base_package_name(class_content: &str, current_package: &str) -> SourceResult<String> {
    let full_package = extract_package_name(class_content)?;
    let full_package = full_package.trim();

    let base = match full_package.rfind(current_package) {
        Some(index) => &full_package[..index],
        None => full_package,
    };
    let base = base.strip_suffix(SUB_PACKAGE_SEPARATOR).unwrap_or(base);

    debug!(base = %base, suffix = %current_package, "derived base package");
    Ok(base.to_string())
}

/// Checks the naming rules for a dotted Java package name.
pub fn is_valid_package_name(package_name: &str) -> bool {
    !is_blank(package_name)
        && !package_name.contains(' ')
        && ALLOWED_PACKAGE_CHARS.is_match(package_name)
        && !package_name.contains("..")
        && !package_name.ends_with('.')
        && !package_name.ends_with('_')
        && starts_with_letter(package_name)
        && package_name.split(SUB_PACKAGE_SEPARATOR).all(starts_with_letter)
}

/// Relative directory path for a package, one directory per segment.
pub fn package_path(package_name: &str) -> SourceResult<PathBuf> {
    if !is_valid_package_name(package_name) {
        return Err(SourceError::InvalidArgument(format!(
            "invalid package name: {:?}",
            package_name
        )));
    }
    Ok(package_name.split(SUB_PACKAGE_SEPARATOR).collect())
}

fn starts_with_letter(segment: &str) -> bool {
    segment.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_extracts_simple_package() {
        assert_eq!(extract_package_name("package a.b.c;").unwrap(), "a.b.c");
    }

    #[test]
    fn test_missing_package_fails() {
        assert!(matches!(
            extract_package_name("public class Foo {}"),
            Err(SourceError::NoPackageFound)
        ));
        assert!(matches!(extract_package_name(""), Err(SourceError::NoPackageFound)));
    }

    #[test]
    fn test_commented_packages_are_ignored() {
        let source = "// package wrong.one;\n/* package also.wrong; */\npackage right.one;\n";
        assert_eq!(extract_package_name(source).unwrap(), "right.one");
    }

    #[test]
    fn test_package_inside_block_comment_only() {
        let source = "/*\npackage hidden.away;\n*/\npublic class Foo {}";
        assert!(matches!(extract_package_name(source), Err(SourceError::NoPackageFound)));
    }

    #[test]
    fn test_non_ascii_package_is_not_matched() {
        assert!(matches!(
            extract_package_name("package com.äpfel;"),
            Err(SourceError::NoPackageFound)
        ));
    }

    #[test]
    fn test_first_declaration_wins() {
        let source = "package first.one;\npackage second.one;";
        assert_eq!(extract_package_name(source).unwrap(), "first.one");
    }

    #[test]
    fn test_windows_line_endings_and_trailing_text() {
        let source = "\r\n  package com.acme ; // main\r\nclass A {}";
        assert_eq!(extract_package_name(source).unwrap(), "com.acme");
    }

    #[rstest]
    #[case("package com.example.test;", "test", "com.example")]
    #[case("package com.example.test;", "missing", "com.example.test")]
    #[case("package com.test.test;", "test", "com.test")]
    #[case("package com.example.test;", "com.example.test", "")]
    #[case("package com.example.test;", "", "com.example.test")]
    fn test_base_package(#[case] source: &str, #[case] suffix: &str, #[case] expected: &str) {
        assert_eq!(extract_base_package_name(source, suffix).unwrap(), expected);
    }

    #[test]
    fn test_base_package_propagates_missing_package() {
        assert!(matches!(
            extract_base_package_name("class A {}", "a"),
            Err(SourceError::NoPackageFound)
        ));
    }

    #[rstest]
    #[case("com.example", true)]
    #[case("com.example_app.v2", true)]
    #[case("a", true)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("com example", false)]
    #[case("com.exa-mple", false)]
    #[case("com..example", false)]
    #[case("com.example.", false)]
    #[case("com.example_", false)]
    #[case("1com.example", false)]
    #[case("com.1example", false)]
    #[case("com._example", false)]
    #[case(".com", false)]
    fn test_is_valid_package_name(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_valid_package_name(name), expected);
    }

    #[test]
    fn test_package_path() {
        let path = package_path("com.acme.widgets").unwrap();
        assert_eq!(path, PathBuf::from("com").join("acme").join("widgets"));
        assert!(matches!(
            package_path("com..acme"),
            Err(SourceError::InvalidArgument(_))
        ));
    }
}
