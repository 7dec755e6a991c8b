pub mod resolve;
pub mod schema;
pub mod screens;
pub mod search;

use crate::bootstrap;
use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Search(args) => {
            let config = bootstrap::load_config(flags)?;
            search::handle(args, &config, flags).await
        }
        Commands::Resolve(args) => resolve::handle(args, flags),
        Commands::Screens => screens::handle(flags),
        Commands::Schema(args) => schema::handle(args, flags),
    }
}
