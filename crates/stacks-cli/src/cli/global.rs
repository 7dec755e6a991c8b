use clap::ValueEnum;

/// How command results are written to stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns for a terminal.
    Table,
    /// Single-line JSON for piping.
    Raw,
}

/// Flags shared by every `stacks` subcommand.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    /// Overrides `catalog.result_limit` for this invocation.
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
}

impl GlobalFlags {
    /// Log filter used when `STACKS_LOG` is unset. `--quiet` wins over
    /// `--verbose`.
    #[must_use]
    pub const fn default_log_filter(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "stacks=debug,warn"
        } else {
            "warn"
        }
    }
}
