//! # stacks-config
//!
//! Settings for the catalog client, snapshot restore and navigation.
//!
//! Later sources override earlier ones:
//!
//! | source | example |
//! |---|---|
//! | built-in defaults | `result_limit = 10` |
//! | user file | `~/.config/stacks/config.toml` |
//! | project file | `.stacks/config.toml` |
//! | environment | `STACKS_CATALOG__TIMEOUT_SECS=5` |
//!
//! In variable names `__` descends one table, so
//! `STACKS_RESTORE__ALLOW_EMPTY_RESULTS` sets `restore.allow_empty_results`.
//!
//! # Usage
//!
//! ```no_run
//! use stacks_config::StacksConfig;
//!
//! let config = StacksConfig::load_with_dotenv().expect("config");
//! println!("catalog: {}", config.catalog.base_url);
//! ```

mod catalog;
mod error;
mod general;

pub use catalog::{CatalogConfig, MAX_RESULT_LIMIT};
pub use error::ConfigError;
pub use general::{NavigationConfig, RestoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-level settings file, relative to the working directory.
const PROJECT_CONFIG: &str = ".stacks/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StacksConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub restore: RestoreConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

impl StacksConfig {
    /// Merge defaults, TOML files and `STACKS_*` variables, then validate.
    ///
    /// `.env` files are not read here; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Like [`Self::load`], after exporting the nearest `.env` into the
    /// process environment.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Some(path) = Self::dotenv_path() {
            if let Err(error) = dotenvy::from_path(&path) {
                tracing::warn!(path = %path.display(), %error, "ignoring unreadable .env");
            }
        }
        Self::load()
    }

    /// Extract a config from any figment and check it is usable.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.catalog.validate()?;
        Ok(config)
    }

    /// The provider chain, lowest priority first. Exposed for tests.
    #[must_use]
    pub fn figment() -> Figment {
        let files = [Self::user_config_path(), Some(PathBuf::from(PROJECT_CONFIG))];
        files
            .into_iter()
            .flatten()
            .filter(|path| path.exists())
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, path| figment.merge(Toml::file(path)),
            )
            .merge(Env::prefixed("STACKS_").split("__"))
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stacks").join("config.toml"))
    }

    /// First `.env` found walking up from the crate manifest (at most to the
    /// workspace root), else one in the working directory.
    fn dotenv_path() -> Option<PathBuf> {
        let from_manifest = std::env::var_os("CARGO_MANIFEST_DIR").and_then(|dir| {
            PathBuf::from(dir)
                .ancestors()
                .take(3)
                .map(|dir| dir.join(".env"))
                .find(|path| path.exists())
        });
        from_manifest.or_else(|| Some(PathBuf::from(".env")).filter(|path| path.exists()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = StacksConfig::default();
        assert_eq!(config.catalog.effective_limit(), 10);
        assert!(!config.restore.allow_empty_results);
        assert!(config.navigation.canonicalize_unknown);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = StacksConfig::from_figment(&StacksConfig::figment())
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(config, StacksConfig::default());
            Ok(())
        });
    }
}
