//! Session flag and identity-provider notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stacks_core::UserIdentity;

/// A notification from the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum IdentityEvent {
    /// The provider reports a signed-in user.
    SignedIn { user: UserIdentity },
    /// The provider reports that nobody is signed in.
    SignedOut,
    /// A user's backing record was removed out-of-band. Treated exactly like
    /// a sign-out when it names the signed-in user.
    RecordRevoked { user_id: String },
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    SignedOut,
    RecordRevoked,
}

/// Current session.
///
/// ```text
/// unauthenticated ──signed_in──▶ authenticated
///        ▲                           │
///        └──signed_out / revoked─────┘
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated {
        user: UserIdentity,
        since: DateTime<Utc>,
    },
}

impl SessionState {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub const fn user(&self) -> Option<&UserIdentity> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            Self::Unauthenticated => None,
        }
    }
}

/// Outcome of applying an [`IdentityEvent`].
///
/// `Switched` and `Ended` both mean the previous user's view state must not
/// survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTransition {
    Started(UserIdentity),
    Switched {
        from: UserIdentity,
        to: UserIdentity,
    },
    Ended {
        user: UserIdentity,
        reason: EndReason,
    },
    Unchanged,
}

impl SessionTransition {
    /// Whether per-user state (results, snapshots, in-flight searches) must
    /// be discarded.
    #[must_use]
    pub const fn ends_previous_user(&self) -> bool {
        matches!(self, Self::Switched { .. } | Self::Ended { .. })
    }
}

impl SessionState {
    /// Apply a provider notification and report what changed.
    pub fn apply(&mut self, event: IdentityEvent) -> SessionTransition {
        match event {
            IdentityEvent::SignedIn { user } => {
                let previous = std::mem::replace(
                    self,
                    Self::Authenticated {
                        user: user.clone(),
                        since: Utc::now(),
                    },
                );
                match previous {
                    Self::Unauthenticated => SessionTransition::Started(user),
                    Self::Authenticated { user: from, since } if from.user_id == user.user_id => {
                        // Same account re-announced: keep the original start time.
                        *self = Self::Authenticated { user, since };
                        SessionTransition::Unchanged
                    }
                    Self::Authenticated { user: from, .. } => {
                        SessionTransition::Switched { from, to: user }
                    }
                }
            }
            IdentityEvent::SignedOut => self.end(EndReason::SignedOut),
            IdentityEvent::RecordRevoked { user_id } => {
                if self.user().is_some_and(|u| u.user_id == user_id) {
                    self.end(EndReason::RecordRevoked)
                } else {
                    tracing::debug!(%user_id, "ignoring revocation for a user who is not signed in");
                    SessionTransition::Unchanged
                }
            }
        }
    }

    fn end(&mut self, reason: EndReason) -> SessionTransition {
        match std::mem::take(self) {
            Self::Authenticated { user, .. } => SessionTransition::Ended { user, reason },
            Self::Unauthenticated => SessionTransition::Unchanged,
        }
    }
}
