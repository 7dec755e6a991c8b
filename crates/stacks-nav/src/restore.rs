//! Single-slot memory of the last results view, for returning from detail.

use stacks_config::RestoreConfig;
use stacks_core::{ResultItem, ResultSet, RestoreSnapshot, SearchQuery};

#[derive(Debug, Default)]
pub struct RestoreMemory {
    slot: Option<RestoreSnapshot>,
    allow_empty_results: bool,
}

impl RestoreMemory {
    #[must_use]
    pub fn new(config: &RestoreConfig) -> Self {
        Self {
            slot: None,
            allow_empty_results: config.allow_empty_results,
        }
    }

    /// Save the results view. Overwrites any earlier snapshot, so capturing
    /// the same view twice leaves one identical snapshot.
    pub fn capture(
        &mut self,
        query: SearchQuery,
        results: ResultSet,
        selected: Option<ResultItem>,
    ) -> &RestoreSnapshot {
        tracing::debug!(query = %query.text(), items = results.len(), "capturing results view");
        self.slot.insert(RestoreSnapshot::new(query, results, selected))
    }

    /// The snapshot to replay, if one exists and is worth replaying.
    ///
    /// A snapshot of an empty list is withheld unless `allow_empty_results`
    /// is configured.
    #[must_use]
    pub fn restore(&self) -> Option<&RestoreSnapshot> {
        self.slot
            .as_ref()
            .filter(|snapshot| self.allow_empty_results || !snapshot.results.is_empty())
    }

    /// The item that was open on the detail screen when the snapshot was
    /// taken.
    #[must_use]
    pub fn held_selection(&self) -> Option<&ResultItem> {
        self.slot.as_ref().and_then(|snapshot| snapshot.selected.as_ref())
    }

    /// Whether anything is held, replayable or not.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.slot.is_some()
    }

    pub fn clear(&mut self) {
        if self.slot.take().is_some() {
            tracing::debug!("restore snapshot cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use stacks_catalog::{NormalizeOptions, RawRecord, normalize_records};
    use stacks_core::{CatalogScope, LibraryScope};

    use super::*;

    fn query() -> SearchQuery {
        SearchQuery::new("harry potter", CatalogScope::LibraryCatalog, LibraryScope::All).unwrap()
    }

    fn results(count: usize) -> ResultSet {
        let records = (0..count)
            .map(|i| RawRecord {
                identifier: Some(format!("/works/OL{i}W")),
                title: Some(format!("Volume {i}")),
                ..RawRecord::default()
            })
            .collect();
        ResultSet {
            items: normalize_records(records, &query(), &NormalizeOptions::default()),
            loading: true,
            has_searched: true,
        }
    }

    #[test]
    fn capture_is_idempotent() {
        let mut memory = RestoreMemory::new(&RestoreConfig::default());
        let first = memory.capture(query(), results(3), None).clone();
        let second = memory.capture(query(), results(3), None).clone();
        assert_eq!(first, second);
        assert_eq!(memory.restore(), Some(&second));
    }

    #[test]
    fn captured_results_are_never_loading() {
        let mut memory = RestoreMemory::new(&RestoreConfig::default());
        let snapshot = memory.capture(query(), results(2), None);
        assert!(!snapshot.results.loading);
    }

    #[test]
    fn later_capture_overwrites() {
        let mut memory = RestoreMemory::new(&RestoreConfig::default());
        memory.capture(query(), results(1), None);
        let set = results(4);
        let pick = set.get(2).cloned();
        memory.capture(query(), set, pick.clone());
        let restored = memory.restore().unwrap();
        assert_eq!(restored.results.len(), 4);
        assert_eq!(restored.selected, pick);
    }

    #[test]
    fn empty_results_are_withheld_by_default() {
        let mut memory = RestoreMemory::new(&RestoreConfig::default());
        memory.capture(query(), results(0), None);
        assert!(memory.is_held());
        assert!(memory.restore().is_none());

        let mut permissive = RestoreMemory::new(&RestoreConfig {
            allow_empty_results: true,
        });
        permissive.capture(query(), results(0), None);
        assert!(permissive.restore().is_some());
    }

    #[test]
    fn clear_empties_the_slot() {
        let mut memory = RestoreMemory::new(&RestoreConfig::default());
        memory.capture(query(), results(2), None);
        memory.clear();
        assert!(!memory.is_held());
        assert!(memory.restore().is_none());
    }
}
