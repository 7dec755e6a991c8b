//! Errors raised while loading or validating Stacks settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider (defaults, TOML, or `STACKS_*` environment) failed to merge
    /// or extract.
    #[error("could not load stacks settings: {0}")]
    Figment(#[from] figment::Error),

    /// A setting parsed but would make lookups impossible.
    #[error("{field} is unusable: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    /// Dotted key of the offending setting, when there is one.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidValue { field, .. } => Some(*field),
            Self::Figment(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_names_the_setting() {
        let err = ConfigError::InvalidValue {
            field: "catalog.timeout_secs",
            reason: "must be at least 1 second".into(),
        };
        assert_eq!(err.field(), Some("catalog.timeout_secs"));
        assert_eq!(
            err.to_string(),
            "catalog.timeout_secs is unusable: must be at least 1 second"
        );
    }
}
