use serde::Serialize;
use stacks_core::Screen;
use stacks_nav::{MemoryHistory, Navigator};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResolveArgs;
use crate::output::{self, Table, Tabular};

#[derive(Debug, Serialize)]
pub struct Resolution {
    pub input: String,
    pub screen: Screen,
    pub fragment: &'static str,
    pub title: &'static str,
    /// False when the input fell back to the default screen.
    pub recognized: bool,
}

impl Tabular for Resolution {
    fn to_table(&self) -> Table {
        Table::key_value(vec![
            ("input", self.input.clone()),
            ("screen", self.screen.to_string()),
            ("fragment", format!("#{}", self.fragment)),
            ("title", self.title.to_string()),
            ("recognized", self.recognized.to_string()),
        ])
    }
}

#[must_use]
pub fn resolve(input: &str) -> Resolution {
    let screen = Navigator::<MemoryHistory>::resolve_screen(input);
    Resolution {
        input: input.to_string(),
        screen,
        fragment: screen.as_str(),
        title: screen.title(),
        recognized: Screen::parse_fragment(input).is_some(),
    }
}

/// Handle `stacks resolve`.
pub fn handle(args: &ResolveArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output::output(&resolve(&args.fragment), flags.format)
}
