//! The search controller: one search at a time, last write wins.
//!
//! Every issued search gets a fresh sequence number. A settlement is applied
//! only if it carries the number of the most recent search still pending;
//! anything else is stale and dropped. Resetting or restoring bumps the
//! generation the same way, so responses to work the user has abandoned can
//! never land.

use stacks_catalog::{CatalogError, LookupRequest, NormalizeOptions, RawRecord, normalize_records};
use stacks_config::CatalogConfig;
use stacks_core::{ResultItem, ResultSet, RestoreSnapshot, SearchForm, SearchQuery, SearchStatus};

use crate::event::LookupTicket;

/// What happened to a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Items replaced. `count` may be zero.
    Applied { count: usize },
    /// The lookup failed; items were cleared and a failure status set.
    Failed,
    /// Not the latest pending search; state untouched.
    Stale,
}

#[derive(Debug, Clone)]
struct Pending {
    seq: u64,
    query: SearchQuery,
}

#[derive(Debug)]
pub struct SearchController {
    last_seq: u64,
    pending: Option<Pending>,
    /// Query whose response produced the visible items.
    shown: Option<SearchQuery>,
    /// Query of the last failed lookup, for retry.
    failed: Option<SearchQuery>,
    results: ResultSet,
    status: SearchStatus,
    limit: usize,
    options: NormalizeOptions,
}

impl SearchController {
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            last_seq: 0,
            pending: None,
            shown: None,
            failed: None,
            results: ResultSet::default(),
            status: SearchStatus::Idle,
            limit: config.effective_limit(),
            options: NormalizeOptions::from_config(config),
        }
    }

    #[must_use]
    pub const fn results(&self) -> &ResultSet {
        &self.results
    }

    #[must_use]
    pub const fn status(&self) -> &SearchStatus {
        &self.status
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.results.loading
    }

    /// The query behind the visible items, if any.
    #[must_use]
    pub const fn shown_query(&self) -> Option<&SearchQuery> {
        self.shown.as_ref()
    }

    /// Sequence number of the search currently awaiting a response.
    #[must_use]
    pub fn pending_seq(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.seq)
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&ResultItem> {
        self.results.get(index)
    }

    /// Start a search for the form's current contents.
    ///
    /// Blank text is a no-op: nothing is issued and nothing changes. Otherwise
    /// any earlier pending search is superseded, `loading` is set and the
    /// current items stay visible until the new response settles.
    pub fn search(&mut self, form: &SearchForm) -> Option<LookupTicket> {
        let query = form.to_query()?;
        Some(self.issue(query))
    }

    /// Re-issue the last failed query. `None` unless the status is failed.
    pub fn retry(&mut self) -> Option<LookupTicket> {
        if !self.status.is_failed() {
            return None;
        }
        let query = self.failed.clone()?;
        Some(self.issue(query))
    }

    fn issue(&mut self, query: SearchQuery) -> LookupTicket {
        self.last_seq += 1;
        let seq = self.last_seq;
        if let Some(previous) = self.pending.as_ref() {
            tracing::debug!(superseded = previous.seq, seq, "search superseded");
        }
        tracing::info!(seq, query = %query.text(), catalog = %query.catalog(), "search issued");
        self.pending = Some(Pending {
            seq,
            query: query.clone(),
        });
        self.results.loading = true;
        self.results.has_searched = true;
        self.status = SearchStatus::Loading;
        LookupTicket {
            seq,
            request: LookupRequest {
                query,
                limit: self.limit,
            },
        }
    }

    /// Apply a lookup outcome if `seq` is the latest pending search.
    pub fn settle(
        &mut self,
        seq: u64,
        outcome: Result<Vec<RawRecord>, CatalogError>,
    ) -> Settlement {
        let Some(pending) = self.pending.take_if(|p| p.seq == seq) else {
            tracing::debug!(seq, latest = ?self.pending_seq(), "discarding stale lookup response");
            return Settlement::Stale;
        };
        self.results.loading = false;
        match outcome {
            Ok(records) => {
                let items = normalize_records(records, &pending.query, &self.options);
                let count = items.len();
                tracing::info!(seq, count, "search settled");
                self.results.items = items;
                self.status = if count == 0 {
                    SearchStatus::Empty
                } else {
                    SearchStatus::Ready
                };
                self.shown = Some(pending.query);
                self.failed = None;
                Settlement::Applied { count }
            }
            Err(error) => {
                tracing::warn!(seq, %error, transient = error.is_retryable(), "search failed");
                self.results.items.clear();
                // Retry is offered whatever the cause.
                self.status = SearchStatus::Failed {
                    message: error.to_string(),
                    retryable: true,
                };
                self.shown = Some(pending.query.clone());
                self.failed = Some(pending.query);
                Settlement::Failed
            }
        }
    }

    /// Drop everything: items, status, and any pending search.
    pub fn reset(&mut self) {
        self.invalidate();
        self.results = ResultSet::default();
        self.status = SearchStatus::Idle;
        self.shown = None;
        self.failed = None;
    }

    /// Make every outstanding response stale without touching visible state.
    pub fn invalidate(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(seq = pending.seq, "pending search cancelled");
        }
        self.results.loading = false;
        if self.status == SearchStatus::Loading {
            self.status = if self.results.has_searched && self.results.is_empty() {
                SearchStatus::Empty
            } else if self.results.is_empty() {
                SearchStatus::Idle
            } else {
                SearchStatus::Ready
            };
        }
    }

    /// Replace state wholesale from a snapshot. Issues no lookup.
    pub fn overwrite(&mut self, snapshot: &RestoreSnapshot) {
        self.invalidate();
        self.results = snapshot.results.clone();
        self.results.loading = false;
        self.status = if self.results.is_empty() {
            SearchStatus::Empty
        } else {
            SearchStatus::Ready
        };
        self.shown = Some(snapshot.query.clone());
        self.failed = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn controller() -> SearchController {
        SearchController::new(&CatalogConfig::default())
    }

    fn record(id: &str, title: &str) -> RawRecord {
        RawRecord {
            identifier: Some(id.into()),
            title: Some(title.into()),
            ..RawRecord::default()
        }
    }

    fn titles(controller: &SearchController) -> Vec<&str> {
        controller
            .results()
            .items
            .iter()
            .map(|i| i.title.as_str())
            .collect()
    }

    #[test]
    fn blank_search_is_a_no_op() {
        let mut c = controller();
        assert!(c.search(&SearchForm::new("   ")).is_none());
        assert_eq!(c.results(), &ResultSet::default());
        assert_eq!(c.status(), &SearchStatus::Idle);
    }

    #[test]
    fn search_marks_loading_and_keeps_previous_items() {
        let mut c = controller();
        let first = c.search(&SearchForm::new("owls")).unwrap();
        c.settle(first.seq, Ok(vec![record("/works/OL1W", "Owls")]));

        let second = c.search(&SearchForm::new("hawks")).unwrap();
        assert!(second.seq > first.seq);
        assert!(c.is_loading());
        assert_eq!(c.status(), &SearchStatus::Loading);
        assert_eq!(titles(&c), vec!["Owls"]);
        assert_eq!(second.request.query.text(), "hawks");
        assert_eq!(second.request.limit, 10);
    }

    #[test]
    fn out_of_order_responses_keep_the_latest() {
        let mut c = controller();
        let a = c.search(&SearchForm::new("a")).unwrap();
        let b = c.search(&SearchForm::new("b")).unwrap();

        assert_eq!(
            c.settle(b.seq, Ok(vec![record("/works/B", "B")])),
            Settlement::Applied { count: 1 }
        );
        assert_eq!(
            c.settle(a.seq, Ok(vec![record("/works/A", "A")])),
            Settlement::Stale
        );
        assert_eq!(titles(&c), vec!["B"]);
        assert_eq!(c.shown_query().map(SearchQuery::text), Some("b"));
        assert!(!c.is_loading());
    }

    #[test]
    fn earlier_response_arriving_first_is_still_stale() {
        let mut c = controller();
        let a = c.search(&SearchForm::new("a")).unwrap();
        let b = c.search(&SearchForm::new("b")).unwrap();
        assert_eq!(c.settle(a.seq, Ok(vec![record("/works/A", "A")])), Settlement::Stale);
        assert!(c.is_loading());
        c.settle(b.seq, Ok(vec![record("/works/B", "B")]));
        assert_eq!(titles(&c), vec!["B"]);
    }

    #[test]
    fn settling_twice_is_stale_the_second_time() {
        let mut c = controller();
        let t = c.search(&SearchForm::new("a")).unwrap();
        c.settle(t.seq, Ok(vec![]));
        assert_eq!(c.settle(t.seq, Ok(vec![])), Settlement::Stale);
        assert_eq!(c.status(), &SearchStatus::Empty);
        assert!(c.results().has_searched);
    }

    #[test]
    fn failure_clears_items_and_allows_retry() {
        let mut c = controller();
        let t = c.search(&SearchForm::new("owls")).unwrap();
        c.settle(t.seq, Ok(vec![record("/works/OL1W", "Owls")]));
        let t = c.search(&SearchForm::new("owls")).unwrap();
        assert_eq!(
            c.settle(t.seq, Err(CatalogError::TimedOut { secs: 10 })),
            Settlement::Failed
        );
        assert!(c.results().is_empty());
        assert!(!c.is_loading());
        assert!(matches!(
            c.status(),
            SearchStatus::Failed { retryable: true, .. }
        ));

        let retry = c.retry().unwrap();
        assert_eq!(retry.request.query.text(), "owls");
        assert!(retry.seq > t.seq);
        c.settle(retry.seq, Ok(vec![record("/works/OL1W", "Owls")]));
        assert_eq!(c.status(), &SearchStatus::Ready);
        assert!(c.retry().is_none());
    }

    #[test]
    fn malformed_response_still_offers_retry() {
        let mut c = controller();
        let t = c.search(&SearchForm::new("owls")).unwrap();
        assert_eq!(
            c.settle(t.seq, Err(CatalogError::Parse("bad json".into()))),
            Settlement::Failed
        );
        assert!(matches!(
            c.status(),
            SearchStatus::Failed { retryable: true, message } if message.contains("bad json")
        ));
        assert!(c.retry().is_some());
    }

    #[test]
    fn reset_invalidates_pending_search() {
        let mut c = controller();
        let t = c.search(&SearchForm::new("owls")).unwrap();
        c.reset();
        assert_eq!(c.settle(t.seq, Ok(vec![record("/works/OL1W", "Owls")])), Settlement::Stale);
        assert_eq!(c.results(), &ResultSet::default());
        assert_eq!(c.status(), &SearchStatus::Idle);
        assert!(c.shown_query().is_none());
    }

    #[test]
    fn overwrite_restores_without_issuing() {
        let mut c = controller();
        let query = SearchQuery::new(
            "harry potter",
            stacks_core::CatalogScope::LibraryCatalog,
            stacks_core::LibraryScope::All,
        )
        .unwrap();
        let t = c.search(&SearchForm::new("something else")).unwrap();
        let items = normalize_records(
            vec![record("/works/OL82563W", "Harry Potter")],
            &query,
            &NormalizeOptions::default(),
        );
        let snapshot = RestoreSnapshot::new(
            query.clone(),
            ResultSet {
                items,
                loading: false,
                has_searched: true,
            },
            None,
        );
        c.overwrite(&snapshot);
        assert_eq!(c.pending_seq(), None);
        assert_eq!(c.settle(t.seq, Ok(vec![])), Settlement::Stale);
        assert_eq!(titles(&c), vec!["Harry Potter"]);
        assert_eq!(c.shown_query(), Some(&query));
        assert_eq!(c.status(), &SearchStatus::Ready);
    }
}
