//! Cross-cutting error types for Stacks.
//!
//! Domain-specific errors (`CatalogError`, `AuthError`, ...) live in their
//! own crates. Most coordinator paths recover locally and never surface an
//! error at all; these variants cover strict parsing at the edges.

use thiserror::Error;

/// Errors that can be raised by any Stacks crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A fragment did not name a member of the closed screen set.
    ///
    /// Only produced by strict parsing. Navigation itself always falls back
    /// to the home screen.
    #[error("unknown screen fragment: '{0}'")]
    UnknownScreen(String),

    /// A facet value did not name a known scope.
    #[error("unknown {kind} scope: '{value}'")]
    UnknownScope { kind: &'static str, value: String },
}
