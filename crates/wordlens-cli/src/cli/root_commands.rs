use clap::{Args, Subcommand};
use wordlens_core::OverlapPolicy;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Look up one word and print the result.
    Lookup(LookupArgs),
    /// Read words from stdin, one search per line.
    Interactive(InteractiveArgs),
    /// Print the effective configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct LookupArgs {
    /// Word to look up; several arguments are joined with spaces.
    pub words: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct InteractiveArgs {
    /// Override `widget.overlap`: last-write-wins or latest-request-wins
    #[arg(long)]
    pub overlap: Option<OverlapPolicy>,
}
