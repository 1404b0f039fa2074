use anyhow::Context;
use wordlens_api::DictionaryClient;
use wordlens_config::WordlensConfig;
use wordlens_core::OverlapPolicy;
use wordlens_widget::{InputField, LookupController, MemoryInput};

use crate::cli::GlobalFlags;
use crate::output::StdoutRegion;

/// The controller as wired by the terminal host.
pub type Controller = LookupController<DictionaryClient, MemoryInput, StdoutRegion>;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: WordlensConfig,
    pub client: DictionaryClient,
}

impl AppContext {
    pub fn init(config: WordlensConfig) -> anyhow::Result<Self> {
        let client = DictionaryClient::from_config(&config.api)
            .context("failed to initialize dictionary client")?;
        Ok(Self { config, client })
    }

    /// Wire a controller to a fresh, focused input and stdout.
    ///
    /// `overlap` overrides `widget.overlap` when given.
    pub fn controller(&self, flags: GlobalFlags, overlap: Option<OverlapPolicy>) -> Controller {
        let input = MemoryInput::new();
        input.focus();

        LookupController::new(self.client.clone(), input, StdoutRegion::new(flags))
            .with_limits(self.config.display)
            .with_policy(overlap.unwrap_or(self.config.widget.overlap))
    }
}
