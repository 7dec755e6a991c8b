//! The navigation coordinator.
//!
//! Single owner of the current screen, the search controller, restore memory
//! and the auth gate. All state changes happen inside [`Coordinator::handle`],
//! one event at a time; side effects are returned as [`Effect`]s.

use stacks_auth::{AuthGate, IdentityEvent};
use stacks_catalog::CatalogError;
use stacks_config::StacksConfig;
use stacks_core::{ResultItem, Screen, SearchForm, WorkDetail};

use crate::event::{AppEvent, Effect};
use crate::history::History;
use crate::navigator::{Navigator, ScreenChange};
use crate::restore::RestoreMemory;
use crate::search::{SearchController, Settlement};
use crate::view::View;

/// Why a screen change is happening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cause {
    /// User or host navigation.
    Navigation,
    /// A new search just moved the user to the results list; the controller
    /// already owns fresh state and must not be restored or reset.
    NewSearch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DetailState {
    None,
    Loading(String),
    Loaded(WorkDetail),
    Unavailable,
}

pub struct Coordinator<H> {
    nav: Navigator<H>,
    search: SearchController,
    memory: RestoreMemory,
    gate: AuthGate,
    form: SearchForm,
    selected: Option<ResultItem>,
    detail: DetailState,
}

impl<H: History> Coordinator<H> {
    pub fn new(history: H, config: &StacksConfig) -> Self {
        Self {
            nav: Navigator::new(history, &config.navigation),
            search: SearchController::new(&config.catalog),
            memory: RestoreMemory::new(&config.restore),
            gate: AuthGate::new(),
            form: SearchForm::default(),
            selected: None,
            detail: DetailState::None,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.nav.current()
    }

    #[must_use]
    pub const fn navigator(&self) -> &Navigator<H> {
        &self.nav
    }

    /// Host access to the navigator, for subscriptions and back/forward.
    pub fn navigator_mut(&mut self) -> &mut Navigator<H> {
        &mut self.nav
    }

    #[must_use]
    pub const fn search(&self) -> &SearchController {
        &self.search
    }

    #[must_use]
    pub const fn memory(&self) -> &RestoreMemory {
        &self.memory
    }

    #[must_use]
    pub const fn gate(&self) -> &AuthGate {
        &self.gate
    }

    /// Handle one event to completion.
    pub fn handle(&mut self, event: AppEvent) -> Vec<Effect> {
        match event {
            AppEvent::Initialize => {
                let change = self.nav.initialize();
                self.on_screen_change(change, Cause::Navigation)
            }
            AppEvent::Navigate(screen) => {
                let change = self.nav.navigate(screen);
                self.on_screen_change(change, Cause::Navigation)
            }
            AppEvent::HistoryChanged(fragment) => {
                let change = self.nav.on_external_change(&fragment);
                self.on_screen_change(change, Cause::Navigation)
            }
            AppEvent::SetQueryText(text) => {
                self.form.text = text;
                Vec::new()
            }
            AppEvent::SetCatalogScope(catalog) => {
                self.form.catalog = catalog;
                Vec::new()
            }
            AppEvent::SetLibraryScope(library) => {
                self.form.library = library;
                Vec::new()
            }
            AppEvent::SubmitSearch => self.submit_search(),
            AppEvent::RetrySearch => self.retry_search(),
            AppEvent::SelectItem(index) => self.select_item(index),
            AppEvent::BackToResults => {
                let change = self.nav.navigate(Screen::Results);
                self.on_screen_change(change, Cause::Navigation)
            }
            AppEvent::LookupSettled { seq, outcome } => {
                self.search.settle(seq, outcome);
                Vec::new()
            }
            AppEvent::LookupTimedOut { seq, after_secs } => {
                if self.search.settle(seq, Err(CatalogError::TimedOut { secs: after_secs }))
                    != Settlement::Stale
                {
                    tracing::warn!(seq, after_secs, "catalog lookup timed out");
                }
                Vec::new()
            }
            AppEvent::DetailSettled {
                identifier,
                outcome,
            } => {
                self.settle_detail(&identifier, outcome);
                Vec::new()
            }
            AppEvent::Identity(event) => {
                self.apply_identity(event);
                Vec::new()
            }
            AppEvent::DismissSignInPrompt => {
                self.gate.dismiss_prompt();
                Vec::new()
            }
        }
    }

    /// Project current state for rendering.
    #[must_use]
    pub fn view(&self) -> View {
        let screen = self.nav.current();
        View {
            screen,
            title: screen.title().to_string(),
            form: self.form.clone(),
            shown_query: self.search.shown_query().cloned(),
            results: self.search.results().clone(),
            status: self.search.status().clone(),
            selected: self.selected.clone(),
            detail: match &self.detail {
                DetailState::Loaded(detail) => Some(detail.clone()),
                _ => None,
            },
            user: self.gate.user().cloned(),
            sign_in_prompt: self.gate.prompt_visible(),
        }
    }

    // ── Transitions ────────────────────────────────────────────────

    fn on_screen_change(&mut self, change: ScreenChange, cause: Cause) -> Vec<Effect> {
        if !change.is_change() {
            return Vec::new();
        }
        if change.leaves_library_pair() {
            self.memory.clear();
            self.search.reset();
            self.clear_selection();
            return Vec::new();
        }
        if cause == Cause::NewSearch {
            return Vec::new();
        }
        if change.is_results_to_detail() {
            // Forward into detail from history: reopen the remembered item
            // and leave the snapshot as it was.
            if self.selected.is_none() {
                if let Some(item) = self.memory.held_selection().cloned() {
                    tracing::debug!(identifier = %item.identifier, "reopening remembered selection");
                    return self.open_detail(item);
                }
            }
            if let Some(query) = self.search.shown_query().cloned() {
                self.memory.capture(
                    query,
                    self.search.results().clone(),
                    self.selected.clone(),
                );
            }
        } else if change.is_return_to_results() {
            match self.memory.restore() {
                Some(snapshot) => {
                    tracing::debug!(items = snapshot.results.len(), "restoring results view");
                    self.search.overwrite(snapshot);
                    self.form = snapshot.query.to_form();
                }
                None => self.search.reset(),
            }
            self.clear_selection();
        } else if change.to == Screen::Detail && self.selected.is_none() {
            tracing::debug!(from = %change.from, "detail opened without a selection");
        }
        Vec::new()
    }

    fn submit_search(&mut self) -> Vec<Effect> {
        if self.form.to_query().is_none() {
            return Vec::new();
        }
        let issued = self.gate.require_auth(|| self.search.search(&self.form));
        match issued {
            Ok(Some(ticket)) => {
                self.memory.clear();
                self.clear_selection();
                let change = self.nav.navigate(Screen::Results);
                let mut effects = self.on_screen_change(change, Cause::NewSearch);
                effects.push(Effect::IssueLookup(ticket));
                effects
            }
            Ok(None) => Vec::new(),
            Err(_) => vec![Effect::PromptSignIn],
        }
    }

    fn retry_search(&mut self) -> Vec<Effect> {
        match self.gate.require_auth(|| self.search.retry()) {
            Ok(Some(ticket)) => vec![Effect::IssueLookup(ticket)],
            Ok(None) => Vec::new(),
            Err(_) => vec![Effect::PromptSignIn],
        }
    }

    fn select_item(&mut self, index: usize) -> Vec<Effect> {
        if self.nav.current() != Screen::Results {
            tracing::debug!(index, screen = %self.nav.current(), "ignoring selection off the results screen");
            return Vec::new();
        }
        let Some(item) = self.search.item(index).cloned() else {
            tracing::debug!(index, len = self.search.results().len(), "ignoring out-of-range selection");
            return Vec::new();
        };
        self.selected = Some(item.clone());
        let change = self.nav.navigate(Screen::Detail);
        let mut effects = self.on_screen_change(change, Cause::Navigation);
        effects.extend(self.open_detail(item));
        effects
    }

    fn open_detail(&mut self, item: ResultItem) -> Vec<Effect> {
        let identifier = item.identifier.clone();
        self.selected = Some(item);
        self.detail = DetailState::Loading(identifier.clone());
        vec![Effect::FetchDetail { identifier }]
    }

    fn settle_detail(&mut self, identifier: &str, outcome: Result<WorkDetail, CatalogError>) {
        let awaited = matches!(&self.detail, DetailState::Loading(id) if id == identifier)
            && self.nav.current() == Screen::Detail;
        if !awaited {
            tracing::debug!(%identifier, "discarding detail for an item no longer shown");
            return;
        }
        self.detail = match outcome {
            Ok(detail) => DetailState::Loaded(detail),
            Err(error) => {
                // The item stays visible with its summary fields.
                tracing::warn!(%identifier, %error, "work detail unavailable");
                DetailState::Unavailable
            }
        };
    }

    fn apply_identity(&mut self, event: IdentityEvent) {
        let transition = self.gate.apply(event);
        if transition.ends_previous_user() {
            self.search.reset();
            self.memory.clear();
            self.clear_selection();
            self.form = SearchForm::default();
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.detail = DetailState::None;
    }
}

impl<H: std::fmt::Debug> std::fmt::Debug for Coordinator<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("nav", &self.nav)
            .field("search", &self.search)
            .field("memory", &self.memory)
            .field("gate", &self.gate)
            .field("form", &self.form)
            .field("selected", &self.selected.as_ref().map(|i| &i.identifier))
            .field("detail", &self.detail)
            .finish()
    }
}
