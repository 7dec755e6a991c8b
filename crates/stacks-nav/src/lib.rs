//! # stacks-nav
//!
//! The navigation coordinator for the Stacks library front end.
//!
//! - [`Navigator`]: current screen, kept in step with a [`History`].
//! - [`SearchController`]: issues lookups and applies only the latest
//!   response (sequence-numbered, last write wins).
//! - [`RestoreMemory`]: the single results snapshot replayed when returning
//!   from a detail view.
//! - [`Coordinator`]: owns all of the above plus the auth gate and turns
//!   [`AppEvent`]s into state changes and [`Effect`]s.
//! - [`Driver`]: async host loop that runs effects against a
//!   [`stacks_catalog::CatalogLookup`] with a timeout and feeds results back.

mod coordinator;
mod driver;
mod error;
mod event;
mod history;
mod navigator;
mod restore;
mod search;
mod view;

pub use coordinator::Coordinator;
pub use driver::{Driver, EventSender};
pub use error::NavError;
pub use event::{AppEvent, Effect, LookupTicket};
pub use history::{History, MemoryHistory};
pub use navigator::{Navigator, ScreenChange};
pub use restore::RestoreMemory;
pub use search::{SearchController, Settlement};
pub use view::{RecordingRenderer, Renderer, View};
