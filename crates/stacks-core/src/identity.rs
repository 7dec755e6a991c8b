use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight signed-in user identity for cross-crate passing.
///
/// Produced from identity-provider notifications by `stacks-auth`, shown in
/// the view model. Contains only data fields, no session logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserIdentity {
    /// Provider-assigned user ID. Also the key of the user's backing record.
    pub user_id: String,
    /// Sign-in email, if the provider reports one.
    pub email: Option<String>,
}

impl UserIdentity {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Short display handle: the email's local part, else the user ID.
    #[must_use]
    pub fn display_id(&self) -> &str {
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or(&self.user_id)
    }
}
