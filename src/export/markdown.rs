//! Markdown rendering and serialization.

use markdown::{CompileOptions, Options, ParseOptions};

/// Renders Markdown to HTML.
///
/// GFM constructs are enabled so generated article tables survive the
/// conversion. Raw HTML embedded in the Markdown passes through; article
/// sources are produced by our own pipeline, not untrusted users.
pub fn markdown_to_html(source: &str) -> String {
    let options = Options {
        parse: ParseOptions::gfm(),
        compile: CompileOptions {
            allow_dangerous_html: true,
            ..CompileOptions::gfm()
        },
    };

    markdown::to_html_with_options(source, &options)
        .unwrap_or_else(|_| markdown::to_html(source))
}

/// Serializes HTML back to Markdown.
pub fn html_to_markdown(html: &str) -> String {
    html2md::parse_html(html).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_emphasis() {
        let html = markdown_to_html("# Hello\n\nSome *emphasis* and **bold**.");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_renders_gfm_tables() {
        let md = "| A | B |\n| --- | --- |\n| 1 | 2 |";
        let html = markdown_to_html(md);
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_renders_links_and_images() {
        let html = markdown_to_html("[site](https://example.com) ![alt](https://example.com/i.png)");
        assert!(html.contains(r#"<a href="https://example.com">site</a>"#));
        assert!(html.contains(r#"<img src="https://example.com/i.png" alt="alt""#));
    }

    #[test]
    fn test_heading_round_trip() {
        // serializer may choose setext or ATX style, so compare re-rendered HTML
        let md = "# Top\n\n## Section";
        let back = html_to_markdown(&markdown_to_html(md));
        let rerendered = markdown_to_html(&back);
        assert!(rerendered.contains("<h1>Top</h1>"));
        assert!(rerendered.contains("<h2>Section</h2>"));
    }

    #[test]
    fn test_list_round_trip() {
        let md = "* one\n* two\n* three";
        let back = html_to_markdown(&markdown_to_html(md));
        for item in ["one", "two", "three"] {
            assert!(back.contains(item));
        }
    }

    #[test]
    fn test_link_round_trip() {
        let md = "[anchor text](https://example.com/page)";
        let back = html_to_markdown(&markdown_to_html(md));
        assert!(back.contains("anchor text"));
        assert!(back.contains("https://example.com/page"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(markdown_to_html(""), "");
        assert_eq!(html_to_markdown(""), "");
    }
}
