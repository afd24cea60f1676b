//! Plain-text extraction from HTML.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

static HORIZONTAL_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\r\x0b\x0c]+").unwrap());
static BLANK_LINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Tags that terminate a text block when flattening.
const BLOCK_TAGS: [&str; 16] = [
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "table", "tr", "blockquote",
    "pre", "figure",
];

/// Strips all markup from an HTML fragment, leaving readable text.
///
/// Block-level elements become paragraph breaks. Runs of horizontal
/// whitespace collapse to a single space, runs of blank lines collapse to
/// exactly one blank line, and the result is trimmed. Plain text input
/// passes through unchanged apart from that normalization, so the function
/// is idempotent.
pub fn to_plain_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut raw = String::new();
    flatten(fragment.root_element(), &mut raw);
    normalize(&raw)
}

fn flatten(element: ElementRef, out: &mut String) {
    for node in element.children() {
        if let Some(text) = node.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(node) {
            let tag = child.value().name();
            match tag {
                "script" | "style" => {}
                "br" => out.push('\n'),
                _ => {
                    flatten(child, out);
                    if BLOCK_TAGS.contains(&tag) {
                        out.push_str("\n\n");
                    }
                }
            }
        }
    }
}

fn normalize(raw: &str) -> String {
    let collapsed = HORIZONTAL_WS.replace_all(raw, " ");
    let trimmed_lines: Vec<&str> = collapsed.lines().map(str::trim).collect();
    let joined = trimmed_lines.join("\n");
    BLANK_LINE_RUNS.replace_all(&joined, "\n\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(to_plain_text("<p>Hello <strong>world</strong></p>"), "Hello world");
    }

    #[test]
    fn test_paragraphs_become_blank_lines() {
        let text = to_plain_text("<p>one</p><p>two</p>");
        assert_eq!(text, "one\n\ntwo");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(to_plain_text("<p>a   b\t\tc</p>"), "a b c");
    }

    #[test]
    fn test_collapses_blank_line_runs() {
        let text = to_plain_text("<p>one</p><div></div><div></div><p>two</p>");
        assert!(!text.contains("\n\n\n"));
    }

    #[test]
    fn test_br_breaks_line() {
        assert_eq!(to_plain_text("<p>a<br>b</p>"), "a\nb");
    }

    #[test]
    fn test_ignores_script_and_style() {
        let text = to_plain_text("<p>keep</p><script>var x = 1;</script><style>p{}</style>");
        assert_eq!(text, "keep");
    }

    #[test]
    fn test_idempotent_on_plain_text() {
        let input = "just some text with  spacing";
        let once = to_plain_text(&format!("<p>{input}</p>"));
        assert_eq!(to_plain_text(&once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_plain_text(""), "");
        assert_eq!(to_plain_text("<div></div>"), "");
    }
}
