//! Core domain types: ASINs, marketplace locales, and length policies.

pub mod asin;
pub mod length_policy;
pub mod locale;

pub use asin::Asin;
pub use length_policy::{ArticleType, CompetitorSignals, LengthPolicy};
pub use locale::{AmazonLocale, MARKETPLACES, is_known_marketplace, locale_for_domain};
