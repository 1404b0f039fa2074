use wordlens_widget::{InputField, UiEvent};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LookupArgs;
use crate::context::AppContext;

/// Type the joined words into the input and press the search control once.
pub async fn handle(args: &LookupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let controller = ctx.controller(*flags, None);
    controller.input().set_value(&args.words.join(" "));

    let report = controller.handle(UiEvent::SearchActivated).await;
    tracing::debug!(?report, "lookup finished");
    Ok(())
}
