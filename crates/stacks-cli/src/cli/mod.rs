use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// `stacks`: drive the catalog navigator from a terminal.
#[derive(Debug, Parser)]
#[command(
    name = "stacks",
    version,
    about = "Search the school library catalog and walk its screens"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// How to print results
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Results per lookup, overriding catalog.result_limit
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log lookups and screen changes
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Copy the global options out for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
