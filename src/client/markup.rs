//! HTML fragment construction: element strings and auto-linking.
//!
//! Output is raw markup. Nothing here escapes attribute values or
//! inner content; callers own XSS safety.

use regex::{Captures, Regex};
use std::fmt::Display;
use std::sync::LazyLock;

/// URL-ish substrings: optional `http(s)://` or `www.` prefix, no
/// embedded whitespace, optional port, optional path/query tail.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)((https?://)|(www\.))(\S+)(\w{2,4})(:[0-9]+)?(/|/([\w#!:.?+=&%@!\-/]))?")
        .unwrap()
});

/// Check if an HTML tag is a void element (no closing tag).
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "command"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "keygen"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Build an HTML element as a string.
///
/// Attributes render in slice order as `name="value"` pairs; values go
/// through `Display`, so numbers work directly. Void elements ignore
/// `inner` and take no closing tag. With no attributes the opening tag
/// carries no extra space.
///
/// # Example
/// ```ignore
/// html_element("button", "Save", &[("id", "save"), ("type", "button")])
/// // => <button id="save" type="button">Save</button>
/// ```
pub fn html_element<V: Display>(tag: &str, inner: &str, attrs: &[(&str, V)]) -> String {
    let mut out = String::with_capacity(tag.len() + inner.len() + 2);
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&value.to_string());
        out.push('"');
    }
    out.push('>');

    if !is_void_element(tag) {
        out.push_str(inner);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
    out
}

/// Wrap every URL-looking substring in an anchor tag.
///
/// The href is the matched text with an `http://` prefix added when no
/// scheme is present; the visible link text stays exactly as written.
/// `nofollow` adds `rel="nofollow"`, `blank` adds `target="_blank"`.
/// Everything between matches passes through untouched.
pub fn linkify(s: &str, nofollow: bool, blank: bool) -> String {
    if s.is_empty() {
        return String::new();
    }

    URL_PATTERN
        .replace_all(s, |caps: &Captures| {
            let url = &caps[0];
            let href = if url.starts_with("http://") || url.starts_with("https://") {
                url.to_string()
            } else {
                format!("http://{url}")
            };

            let mut attr = String::new();
            if nofollow {
                attr.push_str(" rel=\"nofollow\"");
            }
            if blank {
                attr.push_str(" target=\"_blank\"");
            }

            format!("<a{attr} href=\"{href}\">{url}</a>")
        })
        .into_owned()
}
