// src/core/sanitize.rs
// Text cleanup shared by the HTML helpers.

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Minimal HTML entity decoding: only the entities the pages we read emit.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

/// Title-case a player name for display: first letter of each word upper,
/// rest lower. ASCII-oriented; non-ASCII letters pass through untouched.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => {
                    let mut word: String = c.to_uppercase().collect();
                    word.extend(chars.flat_map(|c| c.to_lowercase()));
                    word
                }
                None => s!(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
