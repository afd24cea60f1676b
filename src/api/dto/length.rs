//! DTOs for the word-count targeting endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{ArticleType, LengthPolicy};

/// Request for a minimum word-count target.
#[derive(Debug, Deserialize, Validate)]
pub struct LengthTargetRequest {
    pub article_type: ArticleType,

    #[validate(range(max = 100_000))]
    pub requested: Option<u32>,

    /// Average target word count across ranking competitors.
    #[validate(range(max = 100_000))]
    pub competitor_target: Option<u32>,

    /// Word count of the longest known competitor.
    #[validate(range(max = 100_000))]
    pub competitor_longest: Option<u32>,

    /// Word count of the shortest known competitor.
    #[validate(range(max = 100_000))]
    pub competitor_shortest: Option<u32>,
}

/// Computed target and the policy that produced it.
#[derive(Debug, Serialize)]
pub struct LengthTargetResponse {
    pub article_type: ArticleType,
    pub policy: LengthPolicy,
    pub minimum_words: u32,
}
