//! Minimal XML text handling for the generated parts.
//!
//! The package writer emits a small, fixed set of elements, so the only
//! generic XML machinery needed is escaping: user-supplied text lands in
//! element content and (for part templates) attribute values, and must not
//! be able to break the markup.

/// Escape a string for use in XML element content or attribute values.
///
/// Escapes the five XML-reserved characters. Everything else, including
/// multi-byte text, passes through unchanged.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(
            escape(r#"<a href="x">R&D 'lab'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D &apos;lab&apos;&lt;/a&gt;"
        );
    }

    #[test]
    fn passes_plain_and_multibyte_text() {
        assert_eq!(escape("멘토링 Letter"), "멘토링 Letter");
        assert_eq!(escape(""), "");
    }
}
