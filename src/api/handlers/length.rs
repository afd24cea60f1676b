//! Handler for the word-count targeting endpoint.

use axum::Json;
use validator::Validate;

use crate::api::dto::length::{LengthTargetRequest, LengthTargetResponse};
use crate::domain::CompetitorSignals;
use crate::error::AppError;

/// Computes the minimum word count for an article.
///
/// # Endpoint
///
/// `POST /api/length-target`
///
/// The article type selects the targeting policy; competitor signals the
/// selected policy does not read are ignored.
///
/// # Request Body
///
/// ```json
/// {
///   "article_type": "product_roundup",
///   "requested": 3000,
///   "competitor_target": 3500,
///   "competitor_longest": 4000
/// }
/// ```
pub async fn length_target_handler(
    Json(payload): Json<LengthTargetRequest>,
) -> Result<Json<LengthTargetResponse>, AppError> {
    payload.validate()?;

    let policy = payload.article_type.policy();
    let minimum_words = policy.minimum_words(
        payload.requested,
        CompetitorSignals {
            target: payload.competitor_target,
            longest: payload.competitor_longest,
            shortest: payload.competitor_shortest,
        },
    );

    Ok(Json(LengthTargetResponse {
        article_type: payload.article_type,
        policy,
        minimum_words,
    }))
}
