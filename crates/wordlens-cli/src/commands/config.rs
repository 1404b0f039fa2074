use wordlens_config::WordlensConfig;

use crate::cli::GlobalFlags;
use crate::output::render_value;

pub fn handle(config: &WordlensConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    println!("{}", render_value(config, flags.format)?);
    Ok(())
}
