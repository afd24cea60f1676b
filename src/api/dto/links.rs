//! DTOs for affiliate link endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{AmazonLocale, Asin};
use crate::error::ErrorInfo;

/// Request to convert one or more product URLs into affiliate links.
///
/// Supports batch processing; URLs are handled independently so a single
/// bad link does not fail the whole request.
#[derive(Debug, Deserialize, Validate)]
pub struct AffiliateRequest {
    #[validate(length(min = 1, max = 100, message = "between 1 and 100 URLs per request"))]
    #[validate(nested)]
    pub urls: Vec<UrlItem>,

    /// Associate tag applied to every URL. Falls back to the configured
    /// default when omitted.
    pub associate_tag: Option<String>,
}

/// Individual product URL to convert.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UrlItem {
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response containing batch processing results.
#[derive(Debug, Serialize)]
pub struct AffiliateResponse {
    pub summary: BatchSummary,
    pub items: Vec<AffiliateResultItem>,
}

/// Individual result for a URL in the batch.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AffiliateResultItem {
    Success {
        original_url: String,
        affiliate_url: String,
        asin: Asin,
        marketplace: String,
    },
    Error {
        original_url: String,
        error: ErrorInfo,
    },
}

/// Summary statistics for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

/// Request to inspect a single product URL.
#[derive(Debug, Deserialize, Validate)]
pub struct InspectRequest {
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// What inspection learned about the URL.
#[derive(Debug, Serialize)]
pub struct InspectResponse {
    pub valid: bool,
    pub asin: Option<Asin>,
    pub marketplace: String,
    pub locale: Option<&'static AmazonLocale>,
}
