use anyhow::Context;
use stacks_config::StacksConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (`.env`, TOML files, `STACKS_*` env) and apply
/// command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<StacksConfig> {
    let mut config = StacksConfig::load_with_dotenv().context("failed to load stacks config")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut StacksConfig, flags: &GlobalFlags) {
    if let Some(limit) = flags.limit {
        tracing::debug!(limit, "result limit overridden from command line");
        config.catalog.result_limit = limit;
    }
}
