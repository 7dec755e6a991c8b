//! Navigation crate error types.
//!
//! The coordinator itself never fails: lookup failures, stale responses and
//! blocked actions are all folded into view state. Only plumbing around it
//! can error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    /// The driver that owned the event queue has been dropped.
    #[error("event queue closed: the driver is no longer running")]
    QueueClosed,
}
