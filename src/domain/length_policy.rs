//! Word-count targeting policies.
//!
//! Two separate strategies, selected by article type. Comprehensive
//! articles must beat every competitor signal: the policy takes the
//! maximum and pads the longest competitor by 25%. Short news-style pieces
//! are capped instead, staying tight even when competitors ramble. The two
//! formulas are not interchangeable and must stay distinct.

use serde::{Deserialize, Serialize};

/// Floor for comprehensive articles; also the default for missing signals.
pub const COMPREHENSIVE_FLOOR: u32 = 3500;

/// Floor and cap for density-first articles.
pub const DENSITY_FLOOR: u32 = 1500;
pub const DENSITY_CAP: u32 = 2000;

/// Multiplier applied to the longest competitor count, as a ratio.
const LONGEST_PAD_NUM: u32 = 5;
const LONGEST_PAD_DEN: u32 = 4;

/// Competitor-derived word counts feeding a length decision.
///
/// All fields optional; each strategy reads only the signals it cares about.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CompetitorSignals {
    /// Average target word count across ranking competitors.
    pub target: Option<u32>,
    /// Word count of the longest known competitor.
    pub longest: Option<u32>,
    /// Word count of the shortest known competitor.
    pub shortest: Option<u32>,
}

/// Length targeting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Always exceed the competition: `max(requested, target,
    /// ceil(longest * 1.25), 3500)`.
    Comprehensive,
    /// Stay tight: `min(requested, shortest, 2000)`, floored at 1500.
    DensityFirst,
}

impl LengthPolicy {
    /// Computes the minimum required word count for an article.
    pub fn minimum_words(self, requested: Option<u32>, competitors: CompetitorSignals) -> u32 {
        match self {
            Self::Comprehensive => comprehensive_minimum(requested, competitors),
            Self::DensityFirst => density_first_minimum(requested, competitors),
        }
    }
}

/// Article types produced by the generation pipeline.
///
/// Each type is bound to the length policy its templates were written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleType {
    ProductRoundup,
    BuyingGuide,
    Comparison,
    SingleReview,
    NewsBrief,
    DealAlert,
}

impl ArticleType {
    /// The length policy this article type generates under.
    pub fn policy(self) -> LengthPolicy {
        match self {
            Self::ProductRoundup | Self::BuyingGuide | Self::Comparison | Self::SingleReview => {
                LengthPolicy::Comprehensive
            }
            Self::NewsBrief | Self::DealAlert => LengthPolicy::DensityFirst,
        }
    }
}

/// Comprehensive targeting: monotonic, never below the requested count or
/// the 3500-word floor. Missing signals default to the floor.
fn comprehensive_minimum(requested: Option<u32>, competitors: CompetitorSignals) -> u32 {
    let requested = requested.unwrap_or(COMPREHENSIVE_FLOOR);
    let target = competitors.target.unwrap_or(COMPREHENSIVE_FLOOR);
    let longest = competitors.longest.unwrap_or(COMPREHENSIVE_FLOOR);

    // ceil(longest * 1.25) in integer arithmetic
    let padded_longest = (longest * LONGEST_PAD_NUM).div_ceil(LONGEST_PAD_DEN);

    requested
        .max(target)
        .max(padded_longest)
        .max(COMPREHENSIVE_FLOOR)
}

/// Density-first targeting: capped at 2000 and never below 1500, taking the
/// tightest of the requested count and the shortest competitor.
fn density_first_minimum(requested: Option<u32>, competitors: CompetitorSignals) -> u32 {
    let requested = requested.unwrap_or(DENSITY_FLOOR);
    let shortest = competitors.shortest.unwrap_or(DENSITY_CAP);

    requested.min(shortest).min(DENSITY_CAP).max(DENSITY_FLOOR)
}
