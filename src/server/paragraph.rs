//! CRLF-delimited text to HTML paragraphs.

/// Wrap each non-empty CRLF-delimited segment in a `<p>` tag pair.
///
/// Segments are concatenated with no separator; empty segments (blank
/// lines, trailing newlines) are dropped. Segment content is emitted
/// raw, without escaping.
pub fn to_paragraph(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    for paragraph in s.split("\r\n") {
        if !paragraph.is_empty() {
            res.push_str("<p>");
            res.push_str(paragraph);
            res.push_str("</p>");
        }
    }
    res
}
