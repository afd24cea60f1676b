//! Standalone styled HTML document export.

use chrono::{SecondsFormat, Utc};
use scraper::{ElementRef, Html};

use super::meta::meta_description;

/// Design-system stylesheet inlined into every export.
const STYLESHEET: &str = r#"
    :root {
      --ink: #1a202c;
      --ink-soft: #4a5568;
      --paper: #ffffff;
      --accent: #2b6cb0;
      --rule: #e2e8f0;
    }
    * { box-sizing: border-box; }
    body {
      margin: 0 auto;
      padding: 48px 20px 96px;
      max-width: 720px;
      font-family: Georgia, 'Times New Roman', serif;
      font-size: 18px;
      line-height: 1.7;
      color: var(--ink);
      background: var(--paper);
    }
    h1, h2, h3, h4 {
      font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif;
      line-height: 1.25;
      color: var(--ink);
    }
    h1 { font-size: 2rem; }
    h2 { font-size: 1.5rem; margin-top: 2.5rem; }
    h3 { font-size: 1.2rem; margin-top: 2rem; }
    a { color: var(--accent); }
    img { max-width: 100%; height: auto; border-radius: 6px; }
    blockquote {
      margin: 1.5rem 0;
      padding: 0.5rem 1.25rem;
      border-left: 4px solid var(--accent);
      color: var(--ink-soft);
    }
    .table-wrapper { overflow-x: auto; margin: 1.5rem 0; }
    table { border-collapse: collapse; width: 100%; font-size: 0.95rem; }
    th, td { border: 1px solid var(--rule); padding: 10px 14px; text-align: left; }
    th { background: #f7fafc; font-family: -apple-system, 'Segoe UI', sans-serif; }
    #reading-progress {
      position: fixed;
      top: 0;
      left: 0;
      height: 3px;
      width: 0;
      background: var(--accent);
      z-index: 10;
    }
"#;

/// Inline behavior: reading-progress bar, defensive table wrapping, and
/// external-link attributes.
const DOCUMENT_SCRIPT: &str = r#"
    (function () {
      var bar = document.getElementById('reading-progress');
      function update() {
        var doc = document.documentElement;
        var max = doc.scrollHeight - doc.clientHeight;
        bar.style.width = max > 0 ? (100 * doc.scrollTop / max) + '%' : '0%';
      }
      document.addEventListener('scroll', update, { passive: true });
      update();

      document.querySelectorAll('table').forEach(function (table) {
        if (!table.parentElement.classList.contains('table-wrapper')) {
          var wrapper = document.createElement('div');
          wrapper.className = 'table-wrapper';
          table.parentNode.insertBefore(wrapper, table);
          wrapper.appendChild(table);
        }
      });

      document.querySelectorAll('a[href]').forEach(function (anchor) {
        if (anchor.hostname && anchor.hostname !== window.location.hostname) {
          anchor.target = '_blank';
          anchor.rel = 'noopener noreferrer sponsored';
        }
      });
    })();
"#;

/// Produces a complete, self-contained HTML5 document for the article.
///
/// The document carries the title, a derived meta description, Open Graph
/// tags, a JSON-LD `Article` record stamped with the current time, the
/// inlined stylesheet, and the content body with tables wrapped for
/// horizontal scrolling. Output parses as valid HTML5 even for empty
/// content.
pub fn to_styled_html(html: &str, title: &str) -> String {
    let text_title = html_escape::encode_text(title);
    let attr_title = html_escape::encode_double_quoted_attribute(title);
    let description = meta_description(html);
    let body = wrap_tables(html);
    let published = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let json_ld = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": title,
        "datePublished": published,
    })
    .to_string()
    // keep the inline <script> well-formed no matter what the title holds
    .replace("</", "<\\/");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{text_title}</title>
  <meta name="description" content="{description}">
  <meta property="og:type" content="article">
  <meta property="og:title" content="{attr_title}">
  <meta property="og:description" content="{description}">
  <script type="application/ld+json">{json_ld}</script>
  <style>{STYLESHEET}</style>
</head>
<body>
  <div id="reading-progress"></div>
  <article>
{body}
  </article>
  <script>{DOCUMENT_SCRIPT}</script>
</body>
</html>
"#
    )
}

/// Wraps every top-level `<table>` in a scrollable `div.table-wrapper`.
///
/// Tables nested deeper are picked up client-side by the inline script.
fn wrap_tables(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();

    for node in fragment.root_element().children() {
        if let Some(element) = ElementRef::wrap(node) {
            if element.value().name() == "table" {
                out.push_str("<div class=\"table-wrapper\">");
                out.push_str(&element.html());
                out.push_str("</div>");
            } else {
                out.push_str(&element.html());
            }
        } else if let Some(text) = node.value().as_text() {
            out.push_str(text);
        }
    }

    out
}
