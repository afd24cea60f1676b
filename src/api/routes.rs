//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    affiliate_handler, convert_handler, inspect_handler, length_target_handler, locale_handler,
    locales_handler,
};
use crate::state::AppState;

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /locales`          - List supported marketplaces
/// - `GET  /locales/{domain}` - Look up a marketplace by domain
/// - `POST /links/affiliate`  - Convert product URLs to affiliate links (batch-capable)
/// - `POST /links/inspect`    - Validate a product URL and extract its ASIN
/// - `POST /convert`          - Export article content to other formats
/// - `POST /length-target`    - Compute a minimum word-count target
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/locales", get(locales_handler))
        .route("/locales/{domain}", get(locale_handler))
        .route("/links/affiliate", post(affiliate_handler))
        .route("/links/inspect", post(inspect_handler))
        .route("/convert", post(convert_handler))
        .route("/length-target", post(length_target_handler))
}
