use serde::Serialize;
use stacks_core::Screen;

use crate::cli::GlobalFlags;
use crate::output::{self, Table, Tabular};

#[derive(Debug, Serialize)]
pub struct ScreenRow {
    pub fragment: &'static str,
    pub title: &'static str,
    pub library_pair: bool,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ScreenList(pub Vec<ScreenRow>);

impl Tabular for ScreenList {
    fn to_table(&self) -> Table {
        let mut table = Table::new(vec!["fragment", "title", "library_pair"]);
        for row in &self.0 {
            table.push(vec![
                format!("#{}", row.fragment),
                row.title.to_string(),
                row.library_pair.to_string(),
            ]);
        }
        table
    }
}

#[must_use]
pub fn list() -> ScreenList {
    ScreenList(
        Screen::ALL
            .into_iter()
            .map(|screen| ScreenRow {
                fragment: screen.as_str(),
                title: screen.title(),
                library_pair: screen.is_library_pair(),
            })
            .collect(),
    )
}

/// Handle `stacks screens`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output::output(&list(), flags.format)
}
