//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ASSOCIATE_TAG` - Default Amazon associate tag applied when a request
//!   does not carry one (optional)
//! - `DEFAULT_MARKETPLACE` - Marketplace for affiliate links built without
//!   an explicit domain (default: `amazon.com`)
//! - `MAX_CONTENT_BYTES` - Request body size limit for conversion endpoints
//!   (default: 2097152)

use anyhow::Result;
use std::env;

use crate::domain::locale::is_known_marketplace;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Associate tag used when a request omits one. Requests that omit the
    /// tag while no default is configured fail per-item validation.
    pub associate_tag: Option<String>,
    /// Marketplace domain for affiliate links built from a bare ASIN.
    pub default_marketplace: String,
    /// Upper bound on conversion request bodies, in bytes.
    pub max_content_bytes: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let associate_tag = env::var("ASSOCIATE_TAG").ok().filter(|t| !t.is_empty());

        let default_marketplace =
            env::var("DEFAULT_MARKETPLACE").unwrap_or_else(|_| "amazon.com".to_string());

        let max_content_bytes = env::var("MAX_CONTENT_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2 * 1024 * 1024);

        Self {
            listen_addr,
            log_level,
            log_format,
            associate_tag,
            default_marketplace,
            max_content_bytes,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `default_marketplace` is not a known Amazon marketplace
    /// - `max_content_bytes` is outside 1 KiB ..= 16 MiB
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!("LISTEN must be in format 'host:port', got '{}'", self.listen_addr);
        }

        if !is_known_marketplace(&self.default_marketplace) {
            anyhow::bail!(
                "DEFAULT_MARKETPLACE must be a known Amazon marketplace, got '{}'",
                self.default_marketplace
            );
        }

        if self.max_content_bytes < 1024 || self.max_content_bytes > 16 * 1024 * 1024 {
            anyhow::bail!(
                "MAX_CONTENT_BYTES must be between 1024 and 16777216, got {}",
                self.max_content_bytes
            );
        }

        if let Some(tag) = &self.associate_tag
            && !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            anyhow::bail!("ASSOCIATE_TAG may only contain letters, digits, and hyphens");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Default marketplace: {}", self.default_marketplace);
        match &self.associate_tag {
            Some(tag) => tracing::info!("  Associate tag: {tag}"),
            None => tracing::info!("  Associate tag: none (per-request only)"),
        }
        tracing::info!("  Max content bytes: {}", self.max_content_bytes);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            associate_tag: Some("mysite-20".to_string()),
            default_marketplace: "amazon.com".to_string(),
            max_content_bytes: 2 * 1024 * 1024,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();
        config.default_marketplace = "ebay.com".to_string();
        assert!(config.validate().is_err());

        config.default_marketplace = "amazon.co.uk".to_string();
        config.max_content_bytes = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_malformed_tag() {
        let mut config = base_config();
        config.associate_tag = Some("bad tag!".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("ASSOCIATE_TAG");
            env::remove_var("DEFAULT_MARKETPLACE");
            env::remove_var("MAX_CONTENT_BYTES");
        }

        let config = Config::from_env();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.default_marketplace, "amazon.com");
        assert!(config.associate_tag.is_none());
        assert_eq!(config.max_content_bytes, 2 * 1024 * 1024);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("ASSOCIATE_TAG", "env-tag-21");
            env::set_var("DEFAULT_MARKETPLACE", "amazon.de");
        }

        let config = Config::from_env();
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.associate_tag.as_deref(), Some("env-tag-21"));
        assert_eq!(config.default_marketplace, "amazon.de");

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("ASSOCIATE_TAG");
            env::remove_var("DEFAULT_MARKETPLACE");
        }
    }
}
