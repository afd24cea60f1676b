//! Error types for the affiliate and export layers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Failure building an affiliate URL.
///
/// The one transform in the crate that raises instead of degrading;
/// everything else falls back to returning its input unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AffiliateError {
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid ASIN: {0:?}")]
    InvalidAsin(String),

    #[error("unknown marketplace domain: {0:?}")]
    UnknownDomain(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Wire representation of an error, also embedded in batch result items.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application-level error mapped onto HTTP responses.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Flattens the error into its wire form for batch result items.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };
        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            json!({ "fields": errors.field_errors().keys().collect::<Vec<_>>() }),
        )
    }
}

impl From<AffiliateError> for AppError {
    fn from(error: AffiliateError) -> Self {
        let details = match &error {
            AffiliateError::MissingArgument(field) => json!({ "field": field }),
            AffiliateError::InvalidAsin(asin) => json!({ "asin": asin }),
            AffiliateError::UnknownDomain(domain) => json!({ "domain": domain }),
        };
        AppError::bad_request(error.to_string(), details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affiliate_error_messages() {
        assert_eq!(
            AffiliateError::MissingArgument("associate_tag").to_string(),
            "missing required argument: associate_tag"
        );
        assert!(AffiliateError::InvalidAsin("abc".into()).to_string().contains("abc"));
    }

    #[test]
    fn test_error_info_codes() {
        let info = AppError::bad_request("nope", json!({})).to_error_info();
        assert_eq!(info.code, "validation_error");

        let info = AppError::not_found("gone", json!({})).to_error_info();
        assert_eq!(info.code, "not_found");
    }

    #[test]
    fn test_affiliate_error_maps_to_validation() {
        let app: AppError = AffiliateError::UnknownDomain("amazon.xx".into()).into();
        assert!(matches!(app, AppError::Validation { .. }));
    }
}
