//! # stacks-auth
//!
//! Session state for Stacks, driven by an external identity provider.
//!
//! The provider is consumed as a stream of [`IdentityEvent`]s. The
//! [`AuthGate`] turns them into a session flag and wraps query-issuing
//! actions with a check against it. Sign-in protocols are the provider's
//! business; nothing here talks to the network.

pub mod error;
pub mod gate;
pub mod session;

pub use error::AuthError;
pub use gate::AuthGate;
pub use session::{EndReason, IdentityEvent, SessionState, SessionTransition};
