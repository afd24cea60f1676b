#![allow(dead_code)]

use std::sync::Arc;

use affiliate_press::application::services::AffiliateService;
use affiliate_press::state::AppState;

/// State without a default associate tag; requests must supply their own.
pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(AffiliateService::new(None, "amazon.com".to_string())))
}

/// State with a configured default associate tag.
pub fn create_test_state_with_tag(tag: &str) -> AppState {
    AppState::new(Arc::new(AffiliateService::new(
        Some(tag.to_string()),
        "amazon.com".to_string(),
    )))
}
