//! Inputs to and outputs from the coordinator.
//!
//! The coordinator is driven entirely by [`AppEvent`]s and answers each with
//! a list of [`Effect`]s for the host to perform. Lookups are the only
//! asynchronous work; their outcomes come back as events.

use stacks_auth::IdentityEvent;
use stacks_catalog::{CatalogError, LookupRequest, RawRecord};
use stacks_core::{CatalogScope, LibraryScope, Screen, WorkDetail};

/// A search the host should run, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub seq: u64,
    pub request: LookupRequest,
}

#[derive(Debug)]
pub enum AppEvent {
    /// First event after page load.
    Initialize,
    /// Programmatic navigation (nav bar, links).
    Navigate(Screen),
    /// The host's history moved (back/forward/manual edit) to this fragment.
    HistoryChanged(String),
    SetQueryText(String),
    SetCatalogScope(CatalogScope),
    SetLibraryScope(LibraryScope),
    SubmitSearch,
    /// Re-run the last failed search.
    RetrySearch,
    /// Open the item at this index of the visible results.
    SelectItem(usize),
    /// The detail view's back control.
    BackToResults,
    LookupSettled {
        seq: u64,
        outcome: Result<Vec<RawRecord>, CatalogError>,
    },
    LookupTimedOut {
        seq: u64,
        after_secs: u64,
    },
    DetailSettled {
        identifier: String,
        outcome: Result<WorkDetail, CatalogError>,
    },
    Identity(IdentityEvent),
    DismissSignInPrompt,
}

impl AppEvent {
    /// Whether this event settles work the host started for an [`Effect`].
    #[must_use]
    pub const fn is_settlement(&self) -> bool {
        matches!(
            self,
            Self::LookupSettled { .. } | Self::LookupTimedOut { .. } | Self::DetailSettled { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run a catalog search and report back with `LookupSettled`.
    IssueLookup(LookupTicket),
    /// Fetch work detail and report back with `DetailSettled`.
    FetchDetail { identifier: String },
    /// A gated action was blocked; ask the user to sign in.
    PromptSignIn,
}
