//! # stacks-core
//!
//! Core types and error types for the Stacks catalog site.
//!
//! This crate provides the plain data shared by every Stacks crate:
//! - The closed set of screen identifiers and their URL fragments
//! - Search facets and the search query model
//! - Normalized catalog result items, result sets and work details
//! - The restore snapshot taken when leaving results for a detail view
//! - Cross-cutting error types
//!
//! Nothing here performs I/O or holds shared mutable state.

pub mod enums;
pub mod errors;
pub mod identity;
pub mod query;
pub mod results;
pub mod snapshot;

pub use enums::{CatalogScope, LibraryScope, Screen};
pub use errors::CoreError;
pub use identity::UserIdentity;
pub use query::{SearchForm, SearchQuery};
pub use results::{ResultItem, ResultSet, SearchStatus, WorkDetail};
pub use snapshot::RestoreSnapshot;
