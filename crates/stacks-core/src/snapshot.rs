use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::query::SearchQuery;
use crate::results::{ResultItem, ResultSet};

/// Search context saved when leaving the results list for a detail view.
///
/// Owned by the navigation coordinator's restore memory. The `results`
/// copy never carries `loading = true`; a snapshot is a settled view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RestoreSnapshot {
    pub query: SearchQuery,
    pub results: ResultSet,
    pub selected: Option<ResultItem>,
}

impl RestoreSnapshot {
    #[must_use]
    pub fn new(query: SearchQuery, results: ResultSet, selected: Option<ResultItem>) -> Self {
        Self {
            query,
            results: ResultSet {
                loading: false,
                ..results
            },
            selected,
        }
    }
}
