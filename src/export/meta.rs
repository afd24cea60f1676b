//! Meta-description derivation for SEO tags.

use std::sync::LazyLock;

use regex::Regex;

use super::plain_text::to_plain_text;

/// Upper bound for the accumulated description.
const MAX_LEN: usize = 155;

/// A sentence including its terminating punctuation.
static SENTENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

/// Derives a meta description (≤ ~158 chars) from article HTML.
///
/// Accumulates whole sentences greedily while the running length stays
/// within 155 characters. When not even the first sentence fits, falls
/// back to a hard truncation with an ellipsis. Quotes are HTML-escaped so
/// the result can be embedded in an attribute.
pub fn meta_description(html: &str) -> String {
    let text = to_plain_text(html).replace('\n', " ");

    let mut description = String::new();
    for sentence in SENTENCE.find_iter(&text) {
        let sentence = sentence.as_str().trim();
        let next_len = if description.is_empty() {
            sentence.len()
        } else {
            description.len() + 1 + sentence.len()
        };
        if next_len > MAX_LEN {
            break;
        }
        if !description.is_empty() {
            description.push(' ');
        }
        description.push_str(sentence);
    }

    if description.is_empty() && !text.trim().is_empty() {
        description = truncate_with_ellipsis(text.trim(), MAX_LEN);
    }

    html_escape::encode_double_quoted_attribute(&description).into_owned()
}

/// Cuts `text` to at most `max` characters, ellipsis included.
fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max - 3).collect();
    cut.truncate(cut.trim_end().len());
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_whole_sentences() {
        let html = "<p>First sentence here. Second one follows. Third is also short.</p>";
        let desc = meta_description(html);
        assert_eq!(desc, "First sentence here. Second one follows. Third is also short.");
    }

    #[test]
    fn test_stops_before_exceeding_limit() {
        let first = "Short opener.";
        let second = "x".repeat(160);
        let html = format!("<p>{first} {second}.</p>");
        assert_eq!(meta_description(&html), first);
    }

    #[test]
    fn test_truncates_when_no_sentence_fits() {
        let long = "y".repeat(300);
        let desc = meta_description(&format!("<p>{long}</p>"));
        assert!(desc.ends_with("..."));
        assert!(desc.len() <= MAX_LEN);
    }

    #[test]
    fn test_escapes_quotes() {
        let desc = meta_description(r#"<p>The "best" pick.</p>"#);
        assert!(!desc.contains('"'));
        assert!(desc.contains("&quot;"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(meta_description(""), "");
    }
}
