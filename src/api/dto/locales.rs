//! DTOs for marketplace locale endpoints.

use serde::Serialize;

use crate::domain::AmazonLocale;

/// Response listing every supported marketplace.
#[derive(Debug, Serialize)]
pub struct LocalesResponse {
    pub total: usize,
    pub locales: Vec<AmazonLocale>,
}
