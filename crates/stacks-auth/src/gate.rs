//! The check-and-block wrapper around actions that need a session.

use stacks_core::UserIdentity;

use crate::error::AuthError;
use crate::session::{IdentityEvent, SessionState, SessionTransition};

/// Owns the session flag and the sign-in prompt.
///
/// The session is only ever changed through [`AuthGate::apply`], i.e. by
/// identity-provider notifications. UI code can read it and can dismiss the
/// prompt, nothing else.
#[derive(Debug, Default)]
pub struct AuthGate {
    session: SessionState,
    prompt_visible: bool,
}

impl AuthGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub const fn user(&self) -> Option<&UserIdentity> {
        self.session.user()
    }

    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// Whether the sign-in prompt should be shown.
    #[must_use]
    pub const fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    pub fn dismiss_prompt(&mut self) {
        self.prompt_visible = false;
    }

    /// Run `action` now if a session exists.
    ///
    /// Without a session the action is dropped (never queued, never replayed
    /// after sign-in) and the sign-in prompt is raised.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when the action was blocked.
    pub fn require_auth<R>(&mut self, action: impl FnOnce() -> R) -> Result<R, AuthError> {
        if self.session.is_authenticated() {
            return Ok(action());
        }
        tracing::debug!("blocked gated action without a session");
        self.prompt_visible = true;
        Err(AuthError::NotAuthenticated)
    }

    /// Apply an identity-provider notification.
    pub fn apply(&mut self, event: IdentityEvent) -> SessionTransition {
        let transition = self.session.apply(event);
        match &transition {
            SessionTransition::Started(user) => {
                tracing::info!(user_id = %user.user_id, "session started");
                self.prompt_visible = false;
            }
            SessionTransition::Switched { from, to } => {
                tracing::info!(from = %from.user_id, to = %to.user_id, "session switched accounts");
                self.prompt_visible = false;
            }
            SessionTransition::Ended { user, reason } => {
                tracing::info!(user_id = %user.user_id, ?reason, "session ended");
                self.prompt_visible = false;
            }
            SessionTransition::Unchanged => {}
        }
        transition
    }
}
