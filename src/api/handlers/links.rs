//! Handlers for affiliate link endpoints.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{
    AffiliateRequest, AffiliateResponse, AffiliateResultItem, BatchSummary, InspectRequest,
    InspectResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Converts product URLs into affiliate links.
///
/// # Endpoint
///
/// `POST /api/links/affiliate`
///
/// # Batch Processing
///
/// URLs are processed independently. If one fails, others continue; each
/// result carries either the affiliate link or error information.
///
/// # Request Body
///
/// ```json
/// {
///   "urls": [{ "url": "https://www.amazon.com/dp/B08C7KG5LP" }],
///   "associate_tag": "mysite-20"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when validation fails or when no associate tag
/// is available (neither in the request nor configured as default).
/// Individual URL errors are returned in the response items array.
pub async fn affiliate_handler(
    State(state): State<AppState>,
    Json(payload): Json<AffiliateRequest>,
) -> Result<Json<AffiliateResponse>, AppError> {
    payload.validate()?;

    let service = &state.affiliate_service;
    let tag = service
        .resolve_tag(payload.associate_tag.as_deref())
        .ok_or_else(|| {
            AppError::bad_request(
                "No associate tag provided and no default configured",
                json!({ "field": "associate_tag" }),
            )
        })?
        .to_string();

    let total = payload.urls.len();
    let mut items = Vec::with_capacity(total);
    let mut successful = 0;
    let mut failed = 0;

    for item in payload.urls {
        let report = service.inspect(&item.url);
        match report.asin.filter(|_| report.valid) {
            Some(asin) => {
                let affiliate_url = service
                    .format_affiliate_url(asin.as_str(), &tag, Some(&report.marketplace))
                    .map_err(AppError::from)?;
                successful += 1;
                items.push(AffiliateResultItem::Success {
                    original_url: item.url,
                    affiliate_url,
                    asin,
                    marketplace: report.marketplace,
                });
            }
            None => {
                failed += 1;
                items.push(AffiliateResultItem::Error {
                    original_url: item.url.clone(),
                    error: AppError::bad_request(
                        "Not a valid Amazon product URL",
                        json!({ "url": item.url }),
                    )
                    .to_error_info(),
                });
            }
        }
    }

    Ok(Json(AffiliateResponse {
        summary: BatchSummary {
            total,
            successful,
            failed,
        },
        items,
    }))
}

/// Inspects a product URL without converting it.
///
/// # Endpoint
///
/// `POST /api/links/inspect`
///
/// Reports validity, the extracted ASIN, the marketplace (falling back to
/// `amazon.com` when unrecognized), and the locale record when known.
pub async fn inspect_handler(
    State(state): State<AppState>,
    Json(payload): Json<InspectRequest>,
) -> Result<Json<InspectResponse>, AppError> {
    payload.validate()?;

    let report = state.affiliate_service.inspect(&payload.url);
    Ok(Json(InspectResponse {
        valid: report.valid,
        asin: report.asin,
        marketplace: report.marketplace,
        locale: report.locale,
    }))
}
