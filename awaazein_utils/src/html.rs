/// Replaces the characters `&`, `<`, `>`, `"` and `'` with HTML entity
/// references, making `value` safe to embed in element content or quoted
/// attribute values.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn passthrough() {
        assert_eq!(escape("Hello World!"), "Hello World!");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn special_characters() {
        assert_eq!(
            escape(r#"<script>alert("xss" + 'y' & z)</script>"#),
            "&lt;script&gt;alert(&quot;xss&quot; + &#39;y&#39; &amp; z)&lt;/script&gt;"
        );
    }

    #[test]
    fn unicode_unaffected() {
        assert_eq!(escape("älvdalen <ä>"), "älvdalen &lt;ä&gt;");
    }
}
