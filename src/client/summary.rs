//! Sentence-preserving excerpts and word counting.

/// Count space-delimited tokens.
///
/// Splits on a single literal space, not collapsed whitespace, so
/// consecutive spaces produce empty tokens that are still counted.
/// That quirk is caller-visible behavior and is kept as-is; run
/// [`collapse_spaces`](crate::client::collapse_spaces) first if you
/// want tidy counts. Empty input counts zero.
pub fn word_count(s: &str) -> usize {
    if s.is_empty() { 0 } else { s.split(' ').count() }
}

/// Truncate `s` to roughly `size` characters without cutting a
/// sentence in half.
///
/// Input shorter than `size` (or a `size` of zero) comes back
/// unchanged. Otherwise the text is split on `'.'`; the first segment
/// is always kept, and following segments are re-joined with `". "`
/// while the running length stays strictly under `size`. The result
/// may land well short of `size`, but it always ends on a sentence
/// boundary, trimmed of trailing whitespace.
pub fn excerpt(s: &str, size: usize) -> String {
    if s.is_empty() {
        return String::new();
    }
    if size == 0 || s.len() < size {
        return s.to_string();
    }

    let segments: Vec<&str> = s.split('.').collect();
    let mut res = format!("{}. ", segments[0].trim());

    for next in &segments[1..] {
        let next = next.trim();
        if res.len() + next.len() < size {
            res.push_str(next);
            res.push_str(". ");
        } else {
            break;
        }
    }

    res.trim().to_string()
}
