use std::fmt::Write as _;

use crate::state::{EMPTY_PROMPT_MESSAGE, ERROR_MESSAGE, RenderState};
use crate::view::EntryView;

const SEPARATOR: &str = "----------------------------------------";

/// Render a state as plain text for a terminal.
#[must_use]
pub fn text(state: &RenderState) -> String {
    match state {
        RenderState::EmptyPrompt => EMPTY_PROMPT_MESSAGE.to_string(),
        RenderState::Loading { term } => format!("⏳ Searching for \"{term}\"..."),
        RenderState::NotFound { term } => {
            format!("No results found for \"{term}\". Try another word.")
        }
        RenderState::Error => format!("⚠️ {ERROR_MESSAGE}"),
        RenderState::Result { entry } => entry_text(entry),
    }
}

fn entry_text(entry: &EntryView) -> String {
    let mut out = entry.word.clone();
    if !entry.phonetic.is_empty() {
        let _ = write!(out, "  {}", entry.phonetic);
    }
    out.push('\n');
    if let Some(url) = &entry.audio_url {
        let _ = writeln!(out, "audio: {url}");
    }
    let _ = writeln!(out, "{SEPARATOR}");

    for meaning in &entry.meanings {
        let _ = writeln!(out, "{}", meaning.part_of_speech);
        for (i, definition) in meaning.definitions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {definition}", i + 1);
        }
        if !meaning.synonyms.is_empty() {
            let _ = writeln!(out, "  Synonyms: {}", meaning.synonyms.join(", "));
        }
        if !meaning.antonyms.is_empty() {
            let _ = writeln!(out, "  Antonyms: {}", meaning.antonyms.join(", "));
        }
        let _ = writeln!(out, "{SEPARATOR}");
    }
    out
}
