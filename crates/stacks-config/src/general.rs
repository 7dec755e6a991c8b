//! Navigation and restore behaviour.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

/// Restore-memory policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RestoreConfig {
    /// Whether a search that settled with zero results can be restored when
    /// returning from a detail view. Off by default: only non-empty result
    /// lists are replayed.
    #[serde(default)]
    pub allow_empty_results: bool,
}

/// Fragment handling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavigationConfig {
    /// Rewrite an unrecognized fragment found on initial load to `home`
    /// (replacing the history entry, never pushing a new one).
    #[serde(default = "default_true")]
    pub canonicalize_unknown: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            canonicalize_unknown: true,
        }
    }
}
