use anyhow::Context;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tokio::io::{AsyncBufReadExt, BufReader};
use wordlens_widget::{InputField, Key, UiEvent};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InteractiveArgs;
use crate::context::AppContext;

const CLEAR_COMMAND: &str = ":clear";
const QUIT_COMMAND: &str = ":quit";

/// What one line of stdin asks the widget to do.
#[derive(Debug, PartialEq, Eq)]
enum LineAction<'a> {
    Quit,
    Clear,
    Search(&'a str),
}

fn classify_line(line: &str) -> LineAction<'_> {
    match line.trim() {
        QUIT_COMMAND => LineAction::Quit,
        CLEAR_COMMAND => LineAction::Clear,
        _ => LineAction::Search(line),
    }
}

/// Read stdin line by line; each line is typed into the input and Enter is
/// pressed. Searches run concurrently so a slow lookup never blocks the
/// next line.
pub async fn handle(
    args: &InteractiveArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let controller = ctx.controller(*flags, args.overlap);
    if !flags.quiet {
        eprintln!(
            "wordlens interactive ({}). Type a word and press Enter; {CLEAR_COMMAND} resets the input, {QUIT_COMMAND} exits.",
            controller.policy()
        );
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = FuturesUnordered::new();

    loop {
        tokio::select! {
            Some(report) = pending.next(), if !pending.is_empty() => {
                tracing::debug!(?report, "search settled");
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read from stdin")? else {
                    break;
                };
                match classify_line(&line) {
                    LineAction::Quit => break,
                    LineAction::Clear => {
                        controller.handle(UiEvent::ClearActivated).await;
                    }
                    LineAction::Search(word) => {
                        controller.input().set_value(word);
                        pending.push(controller.handle(UiEvent::KeyPressed(Key::Enter)));
                    }
                }
            }
        }
    }

    while let Some(report) = pending.next().await {
        tracing::debug!(?report, "search settled");
    }
    Ok(())
}
