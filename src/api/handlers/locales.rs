//! Handlers for marketplace locale endpoints.

use axum::{Json, extract::Path};
use serde_json::json;

use crate::api::dto::locales::LocalesResponse;
use crate::domain::locale::{AmazonLocale, MARKETPLACES, locale_for_domain};
use crate::error::AppError;

/// Lists every supported marketplace.
///
/// # Endpoint
///
/// `GET /api/locales`
pub async fn locales_handler() -> Json<LocalesResponse> {
    Json(LocalesResponse {
        total: MARKETPLACES.len(),
        locales: MARKETPLACES.to_vec(),
    })
}

/// Looks up a single marketplace by domain.
///
/// # Endpoint
///
/// `GET /api/locales/{domain}`
///
/// The domain may carry a `www.` prefix or be a host variant like
/// `smile.amazon.com`.
///
/// # Errors
///
/// Returns 404 Not Found when the domain is not a known marketplace.
pub async fn locale_handler(
    Path(domain): Path<String>,
) -> Result<Json<&'static AmazonLocale>, AppError> {
    locale_for_domain(&domain).map(Json).ok_or_else(|| {
        AppError::not_found("Unknown marketplace domain", json!({ "domain": domain }))
    })
}
