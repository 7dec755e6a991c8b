use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bootstrap;
mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("stacks: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    tracing::debug!(format = ?flags.format, limit = ?flags.limit, "starting");

    commands::dispatch(&cli.command, &flags).await
}

/// Logs go to stderr so stdout stays machine-readable for `--format json`.
fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("STACKS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(flags.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(flags.verbose)
        .try_init()
        .map_err(|error| anyhow::anyhow!("tracing subscriber already installed: {error}"))
}
