//! External catalog lookup configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Hard ceiling on results requested per lookup.
pub const MAX_RESULT_LIMIT: u32 = 100;

fn default_base_url() -> String {
    "https://openlibrary.org".to_string()
}

fn default_covers_url() -> String {
    "https://covers.openlibrary.org".to_string()
}

const fn default_result_limit() -> u32 {
    10
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "stacks/0.1".to_string()
}

fn default_placeholder_cover() -> String {
    "/assets/images/assumption-logo.png".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Catalog API root, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Cover image host, without trailing slash.
    #[serde(default = "default_covers_url")]
    pub covers_url: String,

    /// Results requested per lookup. Clamped to `1..=100` when used.
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,

    /// Seconds before an unsettled lookup is abandoned as failed.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Image shown for records without a cover.
    #[serde(default = "default_placeholder_cover")]
    pub placeholder_cover: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            covers_url: default_covers_url(),
            result_limit: default_result_limit(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            placeholder_cover: default_placeholder_cover(),
        }
    }
}

impl CatalogConfig {
    /// Effective per-lookup result bound.
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        self.result_limit.clamp(1, MAX_RESULT_LIMIT) as usize
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values that would make lookups impossible.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty or non-HTTP base URL
    /// or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, url) in [
            ("catalog.base_url", &self.base_url),
            ("catalog.covers_url", &self.covers_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("expected an http(s) URL, got '{url}'"),
                });
            }
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.timeout_secs",
                reason: "must be at least 1 second".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://openlibrary.org");
        assert_eq!(config.result_limit, 10);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn limit_is_clamped() {
        let mut config = CatalogConfig::default();
        config.result_limit = 0;
        assert_eq!(config.effective_limit(), 1);
        config.result_limit = 5000;
        assert_eq!(config.effective_limit(), 100);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = CatalogConfig {
            base_url: "openlibrary.org".into(),
            ..CatalogConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "catalog.base_url", .. })
        ));

        let config = CatalogConfig {
            timeout_secs: 0,
            ..CatalogConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
