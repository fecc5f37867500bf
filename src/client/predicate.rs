//! Text predicates: digit checks, boolean coercion, word-set membership.

use crate::client::words::{FILLER_WORDS, RESERVED_KEYWORDS};

/// Check if `s` contains at least one ASCII digit.
#[inline]
pub fn contains_digit(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
}

/// Check if `s` is one-or-more ASCII digits and nothing else.
///
/// No sign, no decimal point, no whitespace. Empty input is false.
#[inline]
pub fn is_digit_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Check if `s` trims to one of the fixed English filler words.
///
/// Matching is case-insensitive and exact-token; "The" is a filler
/// word, "theory" is not.
pub fn is_filler_word(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && FILLER_WORDS.contains(s.to_lowercase().as_str())
}

/// Check if `s` trims to a reserved name.
///
/// Useful for rejecting usernames at signup that would collide with
/// system routes or mail endpoints. Matching is case-insensitive and
/// exact-token, never substring.
pub fn is_reserved_keyword(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && RESERVED_KEYWORDS.contains(s.to_lowercase().as_str())
}

/// Coerce a string to a boolean.
///
/// True only when the input trims to `"true"` (any case) or equals the
/// raw literal `"1"`. Anything else, including "yes", is false.
pub fn to_bool(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("true") || s == "1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_digit() {
        assert!(contains_digit("abc1"));
        assert!(contains_digit("1"));
        assert!(contains_digit("a1b2"));
        assert!(!contains_digit("abc"));
        assert!(!contains_digit(""));
    }

    #[test]
    fn test_is_digit_only() {
        assert!(is_digit_only("0"));
        assert!(is_digit_only("0123456789"));
        assert!(!is_digit_only(""));
        assert!(!is_digit_only("12a"));
        assert!(!is_digit_only("-1"));
        assert!(!is_digit_only("1.5"));
        assert!(!is_digit_only(" 1"));
        assert!(!is_digit_only("1\n"));
    }

    #[test]
    fn test_is_filler_word() {
        assert!(is_filler_word("the"));
        assert!(is_filler_word("The"));
        assert!(is_filler_word("  of  "));
        assert!(is_filler_word("VIA"));
        assert!(!is_filler_word("theory"));
        assert!(!is_filler_word("fox"));
        assert!(!is_filler_word(""));
        assert!(!is_filler_word("   "));
    }

    #[test]
    fn test_is_reserved_keyword() {
        assert!(is_reserved_keyword("admin"));
        assert!(is_reserved_keyword("Admin"));
        assert!(is_reserved_keyword("  WWW  "));
        assert!(is_reserved_keyword("postmaster"));
        assert!(!is_reserved_keyword("zzz-not-reserved"));
        assert!(!is_reserved_keyword("administrator"));
        assert!(!is_reserved_keyword(""));
    }

    #[test]
    fn test_reserved_is_exact_token_not_substring() {
        // "admins" contains the reserved token "admin" but is allowed
        assert!(!is_reserved_keyword("admins"));
        assert!(!is_reserved_keyword("my-admin"));
    }

    #[test]
    fn test_to_bool() {
        assert!(to_bool("true"));
        assert!(to_bool("TRUE"));
        assert!(to_bool(" true "));
        assert!(to_bool("1"));
        assert!(!to_bool(" 1 "));
        assert!(!to_bool("yes"));
        assert!(!to_bool("TRUE!"));
        assert!(!to_bool("0"));
        assert!(!to_bool(""));
    }
}
