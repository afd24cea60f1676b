//! HTTP request handlers for API endpoints.

pub mod convert;
pub mod health;
pub mod length;
pub mod links;
pub mod locales;

pub use convert::convert_handler;
pub use health::health_handler;
pub use length::length_target_handler;
pub use links::{affiliate_handler, inspect_handler};
pub use locales::{locale_handler, locales_handler};
