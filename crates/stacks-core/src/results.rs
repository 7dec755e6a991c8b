//! Normalized catalog results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Author sentinel for records that list none.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
/// Publisher sentinel for records that list none.
pub const UNKNOWN_PUBLISHER: &str = "Unknown Publisher";
/// Year sentinel ("no date") for records without a publication year.
pub const UNKNOWN_YEAR: &str = "n.d.";
/// Rating used when the catalog reports none.
pub const DEFAULT_RATING: f32 = 3.0;
/// Upper bound of the rating scale.
pub const MAX_RATING: f32 = 5.0;

/// One catalog entry after normalization.
///
/// `identifier` is the catalog's own key and the join key for detail
/// retrieval. `authors` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResultItem {
    pub identifier: String,
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: String,
    pub published_year: String,
    pub cover_image_ref: String,
    /// Dewey-style shelf code, derived from the identifier.
    pub classification_code: String,
    pub availability_label: String,
    /// Average rating in `[0, 5]`.
    pub rating: f32,
}

impl ResultItem {
    /// Authors joined for single-line display.
    #[must_use]
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }
}

/// Clamp a raw rating into `[0, 5]`, mapping `None` and NaN to the default.
#[must_use]
pub fn clamp_rating(raw: Option<f64>) -> f32 {
    match raw {
        #[allow(clippy::cast_possible_truncation)]
        Some(value) if !value.is_nan() => value.clamp(0.0, f64::from(MAX_RATING)) as f32,
        _ => DEFAULT_RATING,
    }
}

/// Extra fields fetched for a single work when its detail view opens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WorkDetail {
    pub identifier: String,
    pub description: Option<String>,
    pub subjects: Vec<String>,
}

/// Ordered results plus loading bookkeeping.
///
/// While `loading` is set the previous `items` stay in place; they are only
/// replaced when the new response settles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
    pub loading: bool,
    pub has_searched: bool,
}

impl ResultSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ResultItem> {
        self.items.get(index)
    }
}

/// Where the current search stands, for renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchStatus {
    /// No search issued yet (or state was reset).
    #[default]
    Idle,
    /// A lookup is in flight.
    Loading,
    /// The last lookup returned at least one item.
    Ready,
    /// The last lookup succeeded with zero items.
    Empty,
    /// The last lookup failed. Items are cleared; `retryable` drives the
    /// retry affordance and is set for every failed lookup.
    Failed { message: String, retryable: bool },
}

impl SearchStatus {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
