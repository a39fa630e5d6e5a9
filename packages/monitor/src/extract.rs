//! HTML to plain text extraction.
//!
//! Best-effort regex stripping, never fails on malformed markup. Script
//! and style subtrees are dropped entirely so their contents cannot leak
//! into the classifier prompt.

use regex::Regex;

/// Character budget for extracted text, to bound the classifier payload.
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Extract readable text from an HTML document.
///
/// Removes `<script>` and `<style>` subtrees, strips remaining tags,
/// decodes common entities, trims and drops empty lines, and truncates to
/// the first [`MAX_TEXT_CHARS`] characters.
pub fn extract_text(html: &str) -> String {
    let mut text = html.to_string();

    // Remove scripts and styles including their contents. An unterminated
    // tag swallows everything to the end of input, like a lenient HTML
    // parser treats an unclosed script.
    let script_pattern = Regex::new(r"(?is)<script[^>]*>.*?(?:</script>|\z)").unwrap();
    let style_pattern = Regex::new(r"(?is)<style[^>]*>.*?(?:</style>|\z)").unwrap();
    text = script_pattern.replace_all(&text, "").to_string();
    text = style_pattern.replace_all(&text, "").to_string();

    // Block-level closers imply line breaks before tags are dropped
    let break_pattern = Regex::new(r"(?i)<br\s*/?>|</p>|</div>|</li>|</h[1-6]>|</tr>").unwrap();
    text = break_pattern.replace_all(&text, "\n").to_string();

    // Remove remaining tags
    let tag_pattern = Regex::new(r"<[^>]+>").unwrap();
    text = tag_pattern.replace_all(&text, "").to_string();

    // Decode HTML entities
    text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    // Trim lines, drop empties, rejoin
    let cleaned: String = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    truncate_chars(&cleaned, MAX_TEXT_CHARS)
}

/// Truncate a string to at most `max_chars` characters.
fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_index, _)) => s[..byte_index].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_text_excluded() {
        let html = "<script>evil</script>Hello";
        assert_eq!(extract_text(html), "Hello");
    }

    #[test]
    fn test_style_text_excluded() {
        let html = "<style>.a { color: red; }</style><p>Visible</p>";
        assert_eq!(extract_text(html), "Visible");
    }

    #[test]
    fn test_multiline_script_excluded() {
        let html = "<SCRIPT type=\"text/javascript\">\nvar x = 1;\nalert(x);\n</SCRIPT>Body text";
        let text = extract_text(html);
        assert!(!text.contains("alert"));
        assert!(text.contains("Body text"));
    }

    #[test]
    fn test_whitespace_normalized() {
        let html = "<div>  First  </div>\n\n\n<div>  Second  </div>";
        assert_eq!(extract_text(html), "First\nSecond");
    }

    #[test]
    fn test_entities_decoded() {
        let html = "<p>Bod&oslash;?&nbsp;Glimt &amp; Spurs &lt;3</p>";
        let text = extract_text(html);
        assert!(text.contains("Glimt & Spurs <3"));
    }

    #[test]
    fn test_truncation_bound() {
        let html = format!("<p>{}</p>", "a".repeat(20_000));
        let text = extract_text(&html);
        assert_eq!(text.chars().count(), MAX_TEXT_CHARS);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let html = "ø".repeat(MAX_TEXT_CHARS + 100);
        let text = extract_text(&html);
        assert_eq!(text.chars().count(), MAX_TEXT_CHARS);
    }

    #[test]
    fn test_malformed_markup_tolerated() {
        let html = "<div><p>Unclosed <b>tags <script>bad()";
        let text = extract_text(html);
        assert!(text.contains("Unclosed"));
        assert!(!text.contains("bad()"));
    }

    #[test]
    fn test_unclosed_script_content_excluded() {
        let html = "<p>Kamper</p><script>var secret = fetchToken();";
        let text = extract_text(html);
        assert!(!text.contains("secret"));
        assert!(text.contains("Kamper"));
    }

    #[test]
    fn test_unclosed_style_content_excluded() {
        let html = "<p>Billetter</p><style>.hidden { display: none; }";
        let text = extract_text(html);
        assert!(!text.contains("hidden"));
        assert!(text.contains("Billetter"));
    }

    #[test]
    fn test_block_tags_become_newlines() {
        let html = "<h1>Kamper</h1><p>Tottenham</p><li>Billetter</li>";
        assert_eq!(extract_text(html), "Kamper\nTottenham\nBilletter");
    }
}
