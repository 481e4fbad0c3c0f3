//! HTML entity encoding for sanitized field values

/// HTML entity encoding utilities
pub struct HtmlEncoder;

impl HtmlEncoder {
    /// Encode every HTML special character
    pub fn encode_html(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '&' => out.push_str("&amp;"),
                '"' => out.push_str("&#34;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
        out
    }

    /// Encode single and double quotes only.
    ///
    /// Used after markup has been stripped, when `<`, `>` and `&` are
    /// already escaped.
    pub fn encode_quotes(text: &str) -> String {
        if !text.contains(['"', '\'']) {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len() + 8);
        for c in text.chars() {
            match c {
                '"' => out.push_str("&#34;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
        out
    }

    /// Decode the entities produced by this encoder and by the sanitizer
    pub fn decode_html(text: &str) -> String {
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&#34;", "\"")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&nbsp;", "\u{a0}")
            .replace("&amp;", "&") // Must be last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_html() {
        let output = HtmlEncoder::encode_html(r#"<a href="x">Tom's & Jerry</a>"#);

        assert_eq!(
            output,
            "&lt;a href=&#34;x&#34;&gt;Tom&#39;s &amp; Jerry&lt;/a&gt;"
        );
    }

    #[test]
    fn test_encode_quotes_leaves_other_characters() {
        assert_eq!(HtmlEncoder::encode_quotes("a &amp; b"), "a &amp; b");
        assert_eq!(
            HtmlEncoder::encode_quotes(r#"say "hi" it's"#),
            "say &#34;hi&#34; it&#39;s"
        );
    }

    #[test]
    fn test_decode_html() {
        assert_eq!(
            HtmlEncoder::decode_html("&lt;b&gt; &#34;x&#34; &amp;amp;"),
            r#"<b> "x" &amp;"#
        );
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let original = r#"<div class="test">Hello & 'goodbye'</div>"#;
        let encoded = HtmlEncoder::encode_html(original);

        assert_eq!(HtmlEncoder::decode_html(&encoded), original);
    }
}
