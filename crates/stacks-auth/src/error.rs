use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// A gated action was attempted without a session. The action was
    /// dropped; the user has to sign in and trigger it again.
    #[error("not signed in: sign in to use the catalog search")]
    NotAuthenticated,
}
