//! # Escaping, highlighting, truncation
//!
//! The one correctness-critical contract of the renderer lives here: stored
//! or user-supplied text must never be interpreted as structural markup.
//! Everything interpolated into a fragment goes through [`escape`] (or
//! [`highlight`], which escapes internally). Escaping is applied exactly
//! once, to stored text, so repeated renders are byte-identical.

/// Escape the five HTML-significant characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape `text` and wrap every case-insensitive occurrence of `query` in
/// `<mark>`. The query is matched against the raw text, before escaping, so
/// a query cannot straddle an escape sequence.
///
/// Matching is ASCII-case-insensitive; a query that is empty after trimming
/// degrades to plain escaping.
pub fn highlight(text: &str, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return escape(text);
    }

    let mut out = String::with_capacity(text.len());
    let qlen = query.len();
    let mut rest = text;
    loop {
        match find_ignore_ascii_case(rest, query, qlen) {
            Some(pos) => {
                out.push_str(&escape(&rest[..pos]));
                out.push_str("<mark>");
                out.push_str(&escape(&rest[pos..pos + qlen]));
                out.push_str("</mark>");
                rest = &rest[pos + qlen..];
            }
            None => {
                out.push_str(&escape(rest));
                return out;
            }
        }
    }
}

/// Byte offset of the first ASCII-case-insensitive occurrence of `needle`,
/// scanning only char boundaries of `haystack`.
fn find_ignore_ascii_case(haystack: &str, needle: &str, nlen: usize) -> Option<usize> {
    for (pos, _) in haystack.char_indices() {
        match haystack.get(pos..pos + nlen) {
            Some(window) if window.eq_ignore_ascii_case(needle) => return Some(pos),
            Some(_) => {}
            // pos + nlen past the end or not a char boundary
            None => {
                if pos + nlen > haystack.len() {
                    return None;
                }
            }
        }
    }
    None
}

/// Shorten `text` to at most `max_chars` characters, appending `…` when
/// anything was cut. Used for list and search views only; detail views show
/// the full text.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
