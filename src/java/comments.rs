//! Comment handling
//!
//! Block comments are removed with a single character scan that tracks two
//! pieces of state: how deeply nested the current `/* */` run is, and whether
//! the scanner sits inside a double-quoted string literal. Unlike Java proper,
//! block comments nest here, so `/* a /* b */ c */` disappears entirely.
//!
//! The line predicates are cheap checks used while scanning line by line; they
//! never look across line boundaries.

use once_cell::sync::Lazy;
use regex::Regex;

/// A `//`, `/*` or `*/` marker reached without crossing an unbalanced quote.
static COMMENT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?:"[^"]*"|[^"])*?(//|/\*|\*/)"#).unwrap());

/// Scanner state for one pass over one text.
#[derive(Debug, Default)]
struct CommentScanState {
    nesting: usize,
    in_string: bool,
}

/// Remove all block comments from `content`.
///
/// Quote characters are always kept and toggle string mode unless escaped by
/// a preceding backslash. An unterminated comment swallows the rest of the
/// text.
pub fn remove_block_comments(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = content.chars().collect();
    let mut state = CommentScanState::default();
    let mut result = String::with_capacity(content.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c == '"' && (i == 0 || chars[i - 1] != '\\') {
            state.in_string = !state.in_string;
            result.push(c);
            i += 1;
            continue;
        }

        if !state.in_string {
            if c == '/' && next == Some('*') {
                state.nesting += 1;
                i += 2;
                continue;
            }
            if c == '*' && next == Some('/') && state.nesting > 0 {
                state.nesting -= 1;
                i += 2;
                continue;
            }
        }

        if state.nesting == 0 {
            result.push(c);
        }
        i += 1;
    }

    result
}

pub fn does_line_start_with_a_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("//") || trimmed.starts_with("/*")
}

pub fn does_line_not_start_with_a_comment(line: &str) -> bool {
    !does_line_start_with_a_comment(line)
}

pub fn does_line_end_with_a_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.ends_with("//") || trimmed.ends_with("*/")
}

pub fn does_line_not_end_with_a_comment(line: &str) -> bool {
    !does_line_end_with_a_comment(line)
}

/// True if a comment marker appears outside of any double-quoted run.
pub fn does_line_contain_a_comment(line: &str) -> bool {
    COMMENT_MARKER.is_match(line)
}

pub fn does_line_not_contain_a_comment(line: &str) -> bool {
    !does_line_contain_a_comment(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("int a; /* note */ int b;", "int a;  int b;")]
    #[case("/* outer /* inner */ still outer */x", "x")]
    #[case("keep /* never closed\nint b;", "keep ")]
    #[case(r#"String s = "/* not a comment */";"#, r#"String s = "/* not a comment */";"#)]
    #[case(r#"a "x\"/*y*/" b"#, r#"a "x\"/*y*/" b"#)]
    #[case("stray */ close", "stray */ close")]
    #[case("a/**/b", "ab")]
    fn test_remove_block_comments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(remove_block_comments(input), expected);
    }

    #[test]
    fn test_quotes_inside_comments_are_kept() {
        // Quotes toggle string mode even while nested, and are never dropped
        assert_eq!(remove_block_comments(r#"/* say "hi" */x"#), r#""""#.to_string() + "x");
    }

    #[test]
    fn test_multiline_comment_keeps_following_lines() {
        let source = "/**\n * Header\n */\npackage a.b;\n";
        assert_eq!(remove_block_comments(source), "\npackage a.b;\n");
    }

    #[rstest]
    #[case("// line comment", true)]
    #[case("   /* block", true)]
    #[case("/** javadoc */", true)]
    #[case("int a; // trailing", false)]
    #[case("", false)]
    #[case("   ", false)]
    #[case(r#""// quoted""#, false)]
    fn test_line_starts_with_comment(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(does_line_start_with_a_comment(line), expected);
        assert_eq!(does_line_not_start_with_a_comment(line), !expected);
    }

    #[rstest]
    #[case("int a; //", true)]
    #[case("text */   ", true)]
    #[case("int a; // note", false)]
    #[case("", false)]
    fn test_line_ends_with_comment(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(does_line_end_with_a_comment(line), expected);
        assert_eq!(does_line_not_end_with_a_comment(line), !expected);
    }

    #[rstest]
    #[case("int a; // note", true)]
    #[case("int a; /* note", true)]
    #[case("end of note */", true)]
    #[case(r#"String s = "http://example.com";"#, false)]
    #[case(r#"String s = "//"; // real"#, true)]
    #[case(r#"say "unbalanced // quote"#, false)]
    #[case("plain code", false)]
    #[case("", false)]
    fn test_line_contains_comment(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(does_line_contain_a_comment(line), expected);
        assert_eq!(does_line_not_contain_a_comment(line), !expected);
    }
}
