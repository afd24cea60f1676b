//! Shared application state injected into handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::services::AffiliateService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub affiliate_service: Arc<AffiliateService>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(affiliate_service: Arc<AffiliateService>) -> Self {
        Self {
            affiliate_service,
            started_at: Utc::now(),
        }
    }

    /// Builds state from validated configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(AffiliateService::new(
            config.associate_tag.clone(),
            config.default_marketplace.clone(),
        )))
    }
}
