//! Raw catalog records and their normalization into [`ResultItem`]s.
//!
//! Normalization is total: records without a title or identifier are
//! dropped, every other gap is filled with a documented sentinel.

use serde::{Deserialize, Serialize};
use stacks_core::results::{UNKNOWN_AUTHOR, UNKNOWN_PUBLISHER, UNKNOWN_YEAR, clamp_rating};
use stacks_core::{ResultItem, SearchQuery};

/// A record as the catalog returned it, before any defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub identifier: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    pub first_publish_year: Option<i32>,
    /// Fully qualified cover URL, when the record has one.
    pub cover_url: Option<String>,
    pub rating: Option<f64>,
}

/// Inputs to normalization that come from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub placeholder_cover: String,
}

impl NormalizeOptions {
    #[must_use]
    pub fn from_config(config: &stacks_config::CatalogConfig) -> Self {
        Self {
            placeholder_cover: config.placeholder_cover.clone(),
        }
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::from_config(&stacks_config::CatalogConfig::default())
    }
}

/// Normalize a lookup response for `query`, preserving catalog order.
#[must_use]
pub fn normalize_records(
    records: Vec<RawRecord>,
    query: &SearchQuery,
    options: &NormalizeOptions,
) -> Vec<ResultItem> {
    let total = records.len();
    let items: Vec<ResultItem> = records
        .into_iter()
        .filter_map(|record| normalize_record(record, query, options))
        .collect();
    if items.len() < total {
        tracing::debug!(
            dropped = total - items.len(),
            kept = items.len(),
            "dropped catalog records without title or identifier"
        );
    }
    items
}

fn normalize_record(
    record: RawRecord,
    query: &SearchQuery,
    options: &NormalizeOptions,
) -> Option<ResultItem> {
    let title = non_blank(record.title)?;
    let identifier = non_blank(record.identifier)?;

    let mut authors: Vec<String> = record
        .authors
        .into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect();
    if authors.is_empty() {
        authors.push(UNKNOWN_AUTHOR.to_string());
    }

    let publisher = record
        .publishers
        .into_iter()
        .find_map(|p| non_blank(Some(p)))
        .unwrap_or_else(|| UNKNOWN_PUBLISHER.to_string());

    let published_year = record
        .first_publish_year
        .map_or_else(|| UNKNOWN_YEAR.to_string(), |year| year.to_string());

    let cover_image_ref =
        non_blank(record.cover_url).unwrap_or_else(|| options.placeholder_cover.clone());

    let classification_code = classification_code(&identifier, &published_year);
    let availability_label = format!(
        "{} [Call number: {classification_code}] (1)",
        query.library().holding_branch()
    );

    Some(ResultItem {
        identifier,
        title,
        authors,
        publisher,
        published_year,
        cover_image_ref,
        classification_code,
        availability_label,
        rating: clamp_rating(record.rating),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Dewey-style shelf code `NNN.NN YEAR`, stable for a given identifier.
#[must_use]
pub fn classification_code(identifier: &str, year: &str) -> String {
    let hash = fnv1a(identifier.as_bytes());
    let class = 100 + hash % 900;
    let division = (hash >> 16) % 100;
    format!("{class}.{division:02} {year}")
}

// 64-bit FNV-1a; std's hasher is not stable across releases.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(*byte)).wrapping_mul(PRIME))
}
