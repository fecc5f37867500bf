//! Case and whitespace transforms over plain strings.
//!
//! Word boundaries are ASCII/whitespace based throughout; there is no
//! Unicode-aware tokenization here.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of hyphens and/or whitespace, for [`dasherize`].
static DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Runs of two-or-more whitespace chars, for [`collapse_spaces`].
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s\s+").unwrap());

/// Uppercase the first character of every whitespace-delimited word.
///
/// Characters past each word head are left untouched, so interior
/// uppercase stays uppercase ("foo bAR" -> "Foo BAR").
pub fn to_title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Uppercase only the first character of the whole string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Collapse every run of hyphens and/or whitespace into a single `-`.
///
/// Case is preserved; this is run-collapse only, not a slugifier.
pub fn dasherize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    DASH_RUN.replace_all(s, "-").into_owned()
}

/// Collapse every run of two-or-more whitespace chars into one space.
///
/// Leading and trailing whitespace is collapsed, not trimmed, and a
/// lone tab or newline is left as-is (only runs are touched).
pub fn collapse_spaces(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    SPACE_RUN.replace_all(s, " ").into_owned()
}

/// Remove every ASCII digit, preserving the order of what remains.
pub fn strip_digits(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Keep only the ASCII digits, in their original order.
pub fn get_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Replace every occurrence of `find`, interpreted as a regex pattern.
///
/// Callers escape their own metacharacters. An invalid pattern leaves
/// the input unchanged instead of failing.
pub fn replace_all(s: &str, find: &str, replace: &str) -> String {
    match Regex::new(find) {
        Ok(re) => re.replace_all(s, replace).into_owned(),
        Err(_) => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_title_case() {
        assert_eq!(to_title_case("the quick brown fox"), "The Quick Brown Fox");
        assert_eq!(to_title_case("hello"), "Hello");
        assert_eq!(to_title_case("  leading space"), "  Leading Space");
        assert_eq!(to_title_case("a\tb\nc"), "A\tB\nC");
        assert_eq!(to_title_case("mIxEd CaSe"), "MIxEd CaSe");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("hello world"), "Hello world");
        assert_eq!(capitalize_first("h"), "H");
        assert_eq!(capitalize_first("123abc"), "123abc");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_dasherize() {
        assert_eq!(dasherize("foo   bar--baz"), "foo-bar-baz");
        assert_eq!(dasherize("foo bar"), "foo-bar");
        assert_eq!(dasherize("foo - -  bar"), "foo-bar");
        assert_eq!(dasherize("Foo Bar"), "Foo-Bar"); // no case change
        assert_eq!(dasherize("plain"), "plain");
        assert_eq!(dasherize(""), "");
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("a   b  c"), "a b c");
        assert_eq!(collapse_spaces("  x  "), " x ");
        assert_eq!(collapse_spaces("a\t\tb"), "a b");
        // single whitespace chars are untouched, runs are not
        assert_eq!(collapse_spaces("a\tb"), "a\tb");
        assert_eq!(collapse_spaces(""), "");
    }

    #[test]
    fn test_whitespace_runs_cover_unicode_whitespace() {
        // \s is the full White_Space class, not just ASCII space
        assert_eq!(dasherize("foo\u{00A0} bar"), "foo-bar");
        assert_eq!(collapse_spaces("a\u{00A0}\u{00A0}b"), "a b");
    }

    #[test]
    fn test_collapse_spaces_idempotent() {
        for s in ["a   b  c", "  x  ", "a\t \n b", "plain", ""] {
            let once = collapse_spaces(s);
            assert_eq!(collapse_spaces(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_strip_and_get_digits() {
        assert_eq!(strip_digits("a1b2c3"), "abc");
        assert_eq!(get_digits("a1b2c3"), "123");
        assert_eq!(strip_digits("123"), "");
        assert_eq!(get_digits("abc"), "");
        assert_eq!(strip_digits(""), "");
        assert_eq!(get_digits(""), "");
    }

    #[test]
    fn test_digits_partition_input() {
        for s in ["a1b2c3", "2025-08-29", "no digits", "42", ""] {
            let total = strip_digits(s).len() + get_digits(s).len();
            assert_eq!(total, s.len(), "partition failed for {s:?}");
        }
    }

    #[test]
    fn test_replace_all() {
        assert_eq!(replace_all("aaa", "a", "b"), "bbb");
        assert_eq!(replace_all("one two one", "one", "1"), "1 two 1");
        // find is a pattern, not a literal
        assert_eq!(replace_all("a1b2", r"\d", "#"), "a#b#");
        assert_eq!(replace_all("one  two\tthree", r"\s+", " "), "one two three");
        assert_eq!(replace_all("", "a", "b"), "");
    }

    #[test]
    fn test_replace_all_invalid_pattern_is_identity() {
        assert_eq!(replace_all("untouched", "(unclosed", "x"), "untouched");
    }
}
