//! HTML entity encoding for persisted text

use std::borrow::Cow;

/// Encode text written as element content
///
/// `&`, `<`, `>` and `"` become named entities; characters in the
/// U+00A0..=U+00FF range become decimal references.
pub fn html_encode(value: &str) -> Cow<'_, str> {
    if !value.chars().any(needs_content_encoding) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}'..='\u{ff}' => {
                out.push_str("&#");
                out.push_str(&u32::from(ch).to_string());
                out.push(';');
            }
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Encode text written inside a double-quoted attribute value
pub fn html_attribute_encode(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<']) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

fn needs_content_encoding(ch: char) -> bool {
    matches!(ch, '&' | '<' | '>' | '"' | '\u{a0}'..='\u{ff}')
}
