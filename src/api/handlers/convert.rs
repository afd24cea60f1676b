//! Handler for the article conversion endpoint.

use axum::{Json, extract::State};
use scraper::{Html, Selector};
use serde_json::json;
use validator::Validate;

use crate::api::dto::convert::{Artifact, ConvertRequest, ConvertResponse};
use crate::error::AppError;
use crate::export::markdown_to_html;
use crate::state::AppState;

/// Converts article content into the requested export formats.
///
/// # Endpoint
///
/// `POST /api/convert`
///
/// # Behavior
///
/// The source may be Markdown or HTML (exactly one). Markdown is rendered
/// once into canonical HTML; every requested artifact derives from that
/// single canonical source. When an associate tag is available, Amazon
/// links are rewritten to affiliate form and CDN images upgraded before
/// rendering.
///
/// # Request Body
///
/// ```json
/// {
///   "markdown": "# Best Headphones\n\n...",
///   "formats": ["html", "wordpress", "plain_text"],
///   "associate_tag": "mysite-20"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when validation fails or when both or neither
/// of `markdown` and `html` are provided.
pub async fn convert_handler(
    State(state): State<AppState>,
    Json(payload): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, AppError> {
    payload.validate()?;

    let html = match (&payload.markdown, &payload.html) {
        (Some(md), None) => markdown_to_html(md),
        (None, Some(html)) => html.clone(),
        _ => {
            return Err(AppError::bad_request(
                "Provide exactly one of 'markdown' and 'html'",
                json!({ "fields": ["markdown", "html"] }),
            ));
        }
    };

    let tag = state
        .affiliate_service
        .resolve_tag(payload.associate_tag.as_deref());

    let (html, markdown_source) = match tag {
        Some(tag) => (state.affiliate_service.rewrite_html(&html, tag), None),
        // without a rewrite the submitted Markdown stays authoritative
        None => (html, payload.markdown.as_deref().map(str::to_string)),
    };

    let title = payload
        .title
        .clone()
        .or_else(|| derive_title(&html))
        .unwrap_or_else(|| "Untitled".to_string());

    let artifacts = payload
        .formats
        .iter()
        .map(|format| Artifact {
            format: *format,
            content: format.render(&html, markdown_source.as_deref(), &title),
        })
        .collect();

    Ok(Json(ConvertResponse { title, artifacts }))
}

/// First `h1` (or failing that, `h2`) text in the document.
fn derive_title(html: &str) -> Option<String> {
    static SELECTORS: [&str; 2] = ["h1", "h2"];

    let document = Html::parse_fragment(html);
    for selector in SELECTORS {
        let selector = Selector::parse(selector).ok()?;
        if let Some(heading) = document.select(&selector).next() {
            let text = heading.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}
