// src/core/html.rs
// Low-level HTML string scanning helpers.
// Deliberately naive; tolerant of attribute order, whitespace and markup
// noise. Case-insensitive on ASCII tag/attribute names. No full parse:
// successive scanning within known blocks is resilient enough for the
// pages we read and keeps the dependency surface flat.

use crate::core::sanitize::normalize_ws;

/// Fast ASCII-only lowercasing for tag/attribute matching.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find the next complete tag block from `from` onwards, case-insensitive.
/// A block runs from the start of the opening tag to the end of the closing
/// tag, e.g. `<tr ...> ... </tr>`.
pub fn next_tag_block_ci(s: &str, open_tag: &str, close_tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open_lc = to_lower(open_tag);
    let close_lc = to_lower(close_tag);

    let start = lc.get(from..)?.find(&open_lc)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&close_lc)?;
    let end = open_end + end_rel + close_tag.len();
    Some((start, end))
}

/// Given a complete tag block like `<td ...>INNER</td>`,
/// return the INNER text without the wrapping tags (may contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return block[open_end + 1..close_start].to_string();
            }
        }
    }
    s!()
}

/// Extract an attribute value from an opening tag, e.g. `href` out of
/// `<a class="result__a" href="...">`. Handles double/single quotes.
pub fn attr_value(tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(tag);
    let needle = join!(name, "=");
    let mut at = lc.find(&needle)? + needle.len();
    let bytes = tag.as_bytes();
    let quote = match *bytes.get(at)? {
        b'"' => b'"',
        b'\'' => b'\'',
        _ => {
            // unquoted value: read to whitespace or '>'
            let rest = &tag[at..];
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '>')
                .unwrap_or(rest.len());
            return Some(rest[..end].to_string());
        }
    };
    at += 1;
    let end_rel = tag[at..].find(quote as char)?;
    Some(tag[at..at + end_rel].to_string())
}

/// Remove all HTML tags `<...>` from the string, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// All `<table>…</table>` blocks in document order (inner HTML, tags kept).
pub fn table_blocks(doc: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        out.push(&doc[s..e]);
        pos = e;
    }
    out
}

/// Cell texts of one `<tr>` block: every `<td>`/`<th>`, tag-stripped and
/// entity-normalized, in source order.
pub fn row_cells(tr: &str) -> Vec<String> {
    use crate::core::sanitize::normalize_entities;

    let mut cells = Vec::new();
    let mut pos = 0usize;
    loop {
        let td = next_tag_block_ci(tr, "<td", "</td>", pos);
        let th = next_tag_block_ci(tr, "<th", "</th>", pos);
        let (s, e) = match (td, th) {
            (Some(a), Some(b)) => {
                if a.0 < b.0 { a } else { b }
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => break,
        };
        let inner = inner_after_open_tag(&tr[s..e]);
        cells.push(strip_tags(normalize_entities(&inner)));
        pos = e;
    }
    cells
}
