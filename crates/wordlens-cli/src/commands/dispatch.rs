use wordlens_config::WordlensConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// Only commands that talk to the dictionary build the HTTP client.
pub async fn dispatch(
    command: Commands,
    config: WordlensConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => commands::config::handle(&config, flags),
        Commands::Lookup(args) => {
            let ctx = AppContext::init(config)?;
            commands::lookup::handle(&args, &ctx, flags).await
        }
        Commands::Interactive(args) => {
            let ctx = AppContext::init(config)?;
            commands::interactive::handle(&args, &ctx, flags).await
        }
    }
}
