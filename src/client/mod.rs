//! Environment-free text helpers, safe for any execution context.
//!
//! - [`predicate`] - digit checks, boolean coercion, word-set membership
//! - [`transform`] - case and whitespace transforms
//! - [`markup`] - HTML element strings and auto-linking
//! - [`summary`] - sentence-preserving excerpts and word counting
//! - [`words`] - the fixed filler-word and reserved-keyword sets

pub mod markup;
pub mod predicate;
pub mod summary;
pub mod transform;
pub mod words;

pub use markup::{html_element, is_void_element, linkify};
pub use predicate::{contains_digit, is_digit_only, is_filler_word, is_reserved_keyword, to_bool};
pub use summary::{excerpt, word_count};
pub use transform::{
    capitalize_first, collapse_spaces, dasherize, get_digits, replace_all, strip_digits,
    to_title_case,
};
