//! WordPress Gutenberg block export.
//!
//! The content is parsed into a DOM and re-emitted block by block rather
//! than pattern-matched with regexes, so nested and slightly malformed
//! markup cannot desynchronize the block comments from the tags they wrap.

use scraper::{ElementRef, Html};

/// Converts article HTML into Gutenberg block markup.
///
/// Top-level headings, paragraphs, lists, tables, blockquotes, and images
/// are wrapped in their matching `<!-- wp:* -->` comments. Amazon product
/// anchors become styled button blocks. Unrecognized elements pass through
/// untouched. The output is framed by human-readable import instructions.
pub fn to_wordpress_html(html: &str, title: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();

    out.push_str(&format!(
        "<!-- {}: WordPress export. In the block editor choose the Code editor view \
         (Ctrl+Shift+Alt+M) and paste this markup into a blank post. -->\n",
        comment_safe(title)
    ));

    for node in fragment.root_element().children() {
        if let Some(element) = ElementRef::wrap(node) {
            out.push_str(&render_block(element));
        } else if let Some(text) = node.value().as_text() {
            let text = text.trim();
            if !text.is_empty() {
                out.push_str(&format!(
                    "<!-- wp:paragraph -->\n<p>{text}</p>\n<!-- /wp:paragraph -->\n"
                ));
            }
        }
    }

    out.push_str("<!-- End of WordPress export -->\n");
    out
}

fn render_block(element: ElementRef) -> String {
    match element.value().name() {
        "h1" | "h2" | "h3" | "h4" => heading_block(element),
        "p" => paragraph_block(element),
        "ul" => format!("<!-- wp:list -->\n{}\n<!-- /wp:list -->\n", element.html()),
        "ol" => format!(
            "<!-- wp:list {{\"ordered\":true}} -->\n{}\n<!-- /wp:list -->\n",
            element.html()
        ),
        "table" => format!(
            "<!-- wp:table -->\n<figure class=\"wp-block-table\">{}</figure>\n<!-- /wp:table -->\n",
            element.html()
        ),
        "blockquote" => format!("<!-- wp:quote -->\n{}\n<!-- /wp:quote -->\n", element.html()),
        "img" => format!(
            "<!-- wp:image -->\n<figure class=\"wp-block-image\">{}</figure>\n<!-- /wp:image -->\n",
            element.html()
        ),
        "a" if amazon_anchor(element).is_some() => button_block(element),
        _ => element.html(),
    }
}

fn heading_block(element: ElementRef) -> String {
    // h2 is the Gutenberg default and carries no level attribute
    let level = &element.value().name()[1..];
    let attrs = if level == "2" {
        String::new()
    } else {
        format!(" {{\"level\":{level}}}")
    };
    format!(
        "<!-- wp:heading{attrs} -->\n{}\n<!-- /wp:heading -->\n",
        element.html()
    )
}

/// A paragraph whose sole content is an Amazon product link renders as a
/// call-to-action button; anything else stays a paragraph.
fn paragraph_block(element: ElementRef) -> String {
    if let Some(anchor) = sole_amazon_anchor(element) {
        return button_block(anchor);
    }
    format!(
        "<!-- wp:paragraph -->\n{}\n<!-- /wp:paragraph -->\n",
        element.html()
    )
}

fn button_block(anchor: ElementRef) -> String {
    let href = anchor.value().attr("href").unwrap_or_default();
    let label = anchor.text().collect::<String>();
    let label = label.trim();
    let label = if label.is_empty() { "View on Amazon" } else { label };

    format!(
        "<!-- wp:buttons -->\n<div class=\"wp-block-buttons\"><!-- wp:button -->\n\
         <div class=\"wp-block-button\"><a class=\"wp-block-button__link\" \
         href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer sponsored\">{}</a></div>\n\
         <!-- /wp:button --></div>\n<!-- /wp:buttons -->\n",
        html_escape::encode_double_quoted_attribute(href),
        html_escape::encode_text(label)
    )
}

/// Returns the anchor when `element` is an Amazon product link.
fn amazon_anchor(element: ElementRef) -> Option<ElementRef> {
    let href = element.value().attr("href")?.to_ascii_lowercase();
    (href.contains("amazon") || href.contains("amzn")).then_some(element)
}

/// The paragraph's single child anchor, if it is an Amazon link and the
/// paragraph holds no other visible content.
fn sole_amazon_anchor(paragraph: ElementRef) -> Option<ElementRef> {
    let mut anchor = None;
    for node in paragraph.children() {
        if let Some(text) = node.value().as_text() {
            if !text.trim().is_empty() {
                return None;
            }
        } else if let Some(child) = ElementRef::wrap(node) {
            if child.value().name() != "a" || anchor.is_some() {
                return None;
            }
            anchor = Some(child);
        }
    }
    anchor.and_then(amazon_anchor)
}

/// Keeps user text from terminating the framing HTML comment early.
fn comment_safe(title: &str) -> String {
    title.replace("--", "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_headings_with_level() {
        let wp = to_wordpress_html("<h3>Section</h3>", "T");
        assert!(wp.contains("<!-- wp:heading {\"level\":3} -->"));
        assert!(wp.contains("<h3>Section</h3>"));
        assert!(wp.contains("<!-- /wp:heading -->"));
    }

    #[test]
    fn test_h2_has_no_level_attribute() {
        let wp = to_wordpress_html("<h2>Section</h2>", "T");
        assert!(wp.contains("<!-- wp:heading -->"));
    }

    #[test]
    fn test_wraps_paragraphs_and_lists() {
        let wp = to_wordpress_html("<p>text</p><ul><li>a</li></ul><ol><li>b</li></ol>", "T");
        assert!(wp.contains("<!-- wp:paragraph -->"));
        assert!(wp.contains("<!-- wp:list -->"));
        assert!(wp.contains("<!-- wp:list {\"ordered\":true} -->"));
    }

    #[test]
    fn test_wraps_table_in_figure() {
        let wp = to_wordpress_html("<table><tr><td>1</td></tr></table>", "T");
        assert!(wp.contains("<figure class=\"wp-block-table\">"));
        assert!(wp.contains("<!-- wp:table -->"));
    }

    #[test]
    fn test_amazon_link_paragraph_becomes_button() {
        let wp = to_wordpress_html(
            r#"<p><a href="https://www.amazon.com/dp/B000000000?tag=x">Check price</a></p>"#,
            "T",
        );
        assert!(wp.contains("wp-block-button__link"));
        assert!(wp.contains("rel=\"noopener noreferrer sponsored\""));
        assert!(wp.contains(">Check price</a>"));
        assert!(!wp.contains("<!-- wp:paragraph -->"));
    }

    #[test]
    fn test_short_amzn_link_becomes_button() {
        let wp = to_wordpress_html(r#"<p><a href="https://amzn.to/3xYz">Buy</a></p>"#, "T");
        assert!(wp.contains("wp-block-button"));
    }

    #[test]
    fn test_regular_link_stays_paragraph() {
        let wp = to_wordpress_html(r#"<p><a href="https://example.com">site</a></p>"#, "T");
        assert!(wp.contains("<!-- wp:paragraph -->"));
        assert!(!wp.contains("wp-block-button"));
    }

    #[test]
    fn test_mixed_paragraph_keeps_inline_amazon_link() {
        let wp = to_wordpress_html(
            r#"<p>Read our take on the <a href="https://www.amazon.com/dp/B000000000">widget</a> below.</p>"#,
            "T",
        );
        assert!(wp.contains("<!-- wp:paragraph -->"));
        assert!(!wp.contains("wp-block-button"));
    }

    #[test]
    fn test_import_instructions_frame_output() {
        let wp = to_wordpress_html("<p>x</p>", "My Guide");
        assert!(wp.starts_with("<!-- My Guide: WordPress export."));
        assert!(wp.trim_end().ends_with("<!-- End of WordPress export -->"));
    }

    #[test]
    fn test_empty_input_still_framed() {
        let wp = to_wordpress_html("", "T");
        assert!(wp.contains("WordPress export"));
    }
}
