//! Path segment splitting.

use std::path::MAIN_SEPARATOR;

/// Split a path-like string on the platform separator, dropping empty
/// segments and preserving order.
///
/// Leading separators, trailing separators and doubled separators all
/// collapse away; empty input yields an empty vec.
pub fn split_url_path(url: &str) -> Vec<&str> {
    url.split(MAIN_SEPARATOR)
        .filter(|part| !part.is_empty())
        .collect()
}
