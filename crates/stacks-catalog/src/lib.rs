//! # stacks-catalog
//!
//! External catalog lookup for Stacks.
//!
//! - [`CatalogLookup`]: the request/response contract the coordinator's
//!   driver calls. Relevance and ranking are entirely the catalog's concern.
//! - [`CatalogClient`]: the production implementation over the Open Library
//!   HTTP API (`/search.json` keyword search, `/works/<id>.json` detail).
//! - [`normalize`]: turns raw records into [`stacks_core::ResultItem`]s with
//!   documented defaults for absent fields.

mod error;
mod http;
pub mod normalize;
mod open_library;

pub use error::CatalogError;
pub use normalize::{NormalizeOptions, RawRecord, normalize_records};

use std::future::Future;

use stacks_config::CatalogConfig;
use stacks_core::{SearchQuery, WorkDetail};

// ── Contract ───────────────────────────────────────────────────────

/// One keyword lookup: a frozen query plus a result-count bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub query: SearchQuery,
    pub limit: usize,
}

/// The external catalog as seen by the coordinator.
///
/// Implementations must be cheap to share (`Send + Sync`): the driver holds
/// one behind an `Arc` and runs each lookup on its own task.
pub trait CatalogLookup: Send + Sync + 'static {
    /// Run a keyword search. Records come back unnormalized, in catalog order.
    fn search(
        &self,
        request: &LookupRequest,
    ) -> impl Future<Output = Result<Vec<RawRecord>, CatalogError>> + Send;

    /// Fetch detail for one record by its identifier.
    fn work(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<WorkDetail, CatalogError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Open Library catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    covers_url: String,
}

impl CatalogClient {
    /// Build a client from catalog configuration.
    ///
    /// The transport timeout is the configured lookup timeout; the driver
    /// applies the same bound independently so a misbehaving implementation
    /// cannot hold a lookup open either.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be built (e.g. TLS backend initialization failure).
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            covers_url: config.covers_url.trim_end_matches('/').to_string(),
        })
    }
}

impl CatalogLookup for CatalogClient {
    async fn search(&self, request: &LookupRequest) -> Result<Vec<RawRecord>, CatalogError> {
        self.search_records(request).await
    }

    async fn work(&self, identifier: &str) -> Result<WorkDetail, CatalogError> {
        self.fetch_work(identifier).await
    }
}
