use clap::{Args, Subcommand, ValueEnum};
use stacks_core::{CatalogScope, LibraryScope};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run a catalog search through the navigation core and print the view.
    Search(SearchArgs),
    /// Show which screen a URL fragment resolves to.
    Resolve(ResolveArgs),
    /// List every screen and its fragment.
    Screens,
    /// Print the JSON schema of a renderer-facing type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Free-text query (words are joined with spaces).
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Which catalog to search.
    #[arg(long, value_enum, default_value_t = CatalogArg::LibraryCatalog)]
    pub catalog: CatalogArg,

    /// Which library's holdings to label results with.
    #[arg(long, value_enum, default_value_t = LibraryArg::All)]
    pub library: LibraryArg,

    /// Open the result at this index and print its detail view.
    #[arg(long)]
    pub open: Option<usize>,
}

impl SearchArgs {
    #[must_use]
    pub fn text(&self) -> String {
        self.query.join(" ")
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CatalogArg {
    LibraryCatalog,
    Ebooks,
    Journals,
}

impl From<CatalogArg> for CatalogScope {
    fn from(value: CatalogArg) -> Self {
        match value {
            CatalogArg::LibraryCatalog => Self::LibraryCatalog,
            CatalogArg::Ebooks => Self::Ebooks,
            CatalogArg::Journals => Self::Journals,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LibraryArg {
    All,
    HighSchool,
    Elementary,
    Preschool,
}

impl From<LibraryArg> for LibraryScope {
    fn from(value: LibraryArg) -> Self {
        match value {
            LibraryArg::All => Self::All,
            LibraryArg::HighSchool => Self::HighSchool,
            LibraryArg::Elementary => Self::Elementary,
            LibraryArg::Preschool => Self::Preschool,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct ResolveArgs {
    /// Fragment to resolve, with or without the leading `#`.
    pub fragment: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Which type to describe.
    #[arg(value_enum, default_value_t = SchemaType::View)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    View,
    ResultItem,
    Snapshot,
    Status,
}
