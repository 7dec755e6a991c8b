use anyhow::{Context, bail};
use stacks_auth::IdentityEvent;
use stacks_catalog::{CatalogClient, CatalogLookup};
use stacks_config::StacksConfig;
use stacks_core::{Screen, SearchStatus, UserIdentity};
use stacks_nav::{AppEvent, Coordinator, Driver, MemoryHistory, Renderer, View};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::output::{self, Table, Tabular};

/// Identity the terminal session runs as. Searches are gated on a session,
/// so the CLI announces one before doing anything.
const CLI_USER: &str = "cli";

/// Logs each frame instead of drawing it; the last view is printed at the end.
#[derive(Debug, Default)]
struct FrameLog {
    frames: usize,
}

impl Renderer for FrameLog {
    fn render(&mut self, view: &View) {
        self.frames += 1;
        tracing::debug!(
            frame = self.frames,
            screen = %view.screen,
            items = view.results.len(),
            loading = view.results.loading,
            "render"
        );
    }
}

impl Tabular for View {
    fn to_table(&self) -> Table {
        if self.screen == Screen::Detail {
            if let Some(item) = &self.selected {
                let detail = self.detail.as_ref();
                return Table::key_value(vec![
                    ("title", item.title.clone()),
                    ("authors", item.author_line()),
                    ("publisher", item.publisher.clone()),
                    ("year", item.published_year.clone()),
                    ("availability", item.availability_label.clone()),
                    ("rating", format!("{:.1}", item.rating)),
                    (
                        "description",
                        detail
                            .and_then(|d| d.description.clone())
                            .unwrap_or_else(|| "-".into()),
                    ),
                    (
                        "subjects",
                        detail.map_or_else(|| "-".into(), |d| d.subjects.join(", ")),
                    ),
                ]);
            }
        }
        if let SearchStatus::Failed { message, retryable } = &self.status {
            return Table::key_value(vec![
                ("status", "failed".into()),
                ("message", message.clone()),
                ("retryable", retryable.to_string()),
            ]);
        }
        let mut table = Table::new(vec!["#", "title", "authors", "year", "call number", "rating"]);
        for (index, item) in self.results.items.iter().enumerate() {
            table.push(vec![
                index.to_string(),
                item.title.clone(),
                item.author_line(),
                item.published_year.clone(),
                item.classification_code.clone(),
                format!("{:.1}", item.rating),
            ]);
        }
        table
    }
}

/// Handle `stacks search`.
pub async fn handle(
    args: &SearchArgs,
    config: &StacksConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = CatalogClient::new(&config.catalog).context("failed to build catalog client")?;
    let view = run(client, config, args).await?;
    if let SearchStatus::Failed { message, .. } = &view.status {
        tracing::warn!(%message, "catalog lookup failed");
    }
    output::output(&view, flags.format)
}

/// Drive one search (and optionally one detail view) to completion.
pub async fn run<L: CatalogLookup>(
    lookup: L,
    config: &StacksConfig,
    args: &SearchArgs,
) -> anyhow::Result<View> {
    let coordinator = Coordinator::new(MemoryHistory::new(), config);
    let mut driver = Driver::new(
        coordinator,
        lookup,
        FrameLog::default(),
        config.catalog.timeout(),
    );

    driver.dispatch(AppEvent::Initialize);
    driver.dispatch(AppEvent::Identity(IdentityEvent::SignedIn {
        user: UserIdentity::new(CLI_USER),
    }));
    driver.dispatch(AppEvent::SetCatalogScope(args.catalog.into()));
    driver.dispatch(AppEvent::SetLibraryScope(args.library.into()));
    driver.dispatch(AppEvent::SetQueryText(args.text()));

    if driver.dispatch(AppEvent::SubmitSearch).is_empty() {
        bail!("search query must not be blank");
    }
    driver.run_until_settled().await;

    if let Some(index) = args.open {
        if driver.dispatch(AppEvent::SelectItem(index)).is_empty() {
            let count = driver.coordinator().view().results.len();
            bail!("no result at index {index} ({count} results)");
        }
        driver.run_until_settled().await;
    }

    Ok(driver.coordinator().view())
}
