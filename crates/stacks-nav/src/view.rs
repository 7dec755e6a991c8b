//! Render-ready projection of coordinator state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use stacks_core::{
    ResultItem, ResultSet, Screen, SearchForm, SearchQuery, SearchStatus, UserIdentity, WorkDetail,
};

/// Everything a renderer needs, and nothing it could mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct View {
    pub screen: Screen,
    pub title: String,
    /// Editable form contents.
    pub form: SearchForm,
    /// The query whose response produced `results`.
    pub shown_query: Option<SearchQuery>,
    pub results: ResultSet,
    pub status: SearchStatus,
    pub selected: Option<ResultItem>,
    /// Extra detail for `selected`, once fetched.
    pub detail: Option<WorkDetail>,
    pub user: Option<UserIdentity>,
    pub sign_in_prompt: bool,
}

impl View {
    /// Whether a retry control should be offered.
    #[must_use]
    pub const fn can_retry(&self) -> bool {
        matches!(self.status, SearchStatus::Failed { retryable: true, .. })
    }
}

/// Draws a [`View`]. Called by the driver after every handled event.
pub trait Renderer {
    fn render(&mut self, view: &View);
}

/// Renderer that keeps every frame, for headless hosts and tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<View>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn last(&self) -> Option<&View> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &View) {
        self.frames.push(view.clone());
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, view: &View) {
        (**self).render(view);
    }
}
