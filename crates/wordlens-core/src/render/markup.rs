use std::fmt::Write as _;

use crate::state::{EMPTY_PROMPT_MESSAGE, ERROR_MESSAGE, RenderState};
use crate::view::EntryView;

/// Render a state as the HTML fragment for the output region.
///
/// Every interpolated value is escaped; API text is never trusted as markup.
#[must_use]
pub fn markup(state: &RenderState) -> String {
    match state {
        RenderState::EmptyPrompt => format!("<p>{EMPTY_PROMPT_MESSAGE}</p>"),
        RenderState::Loading { term } => {
            format!("<p>⏳ Searching for \"<b>{}</b>\"...</p>", escape_html(term))
        }
        RenderState::NotFound { term } => format!(
            "<p>No results found for \"<b>{}</b>\". Try another word.</p>",
            escape_html(term)
        ),
        RenderState::Error => format!("<p>⚠️ {ERROR_MESSAGE}</p>"),
        RenderState::Result { entry } => entry_markup(entry),
    }
}

fn entry_markup(entry: &EntryView) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<h3>{} <small>{}</small>",
        escape_html(&entry.word),
        escape_html(&entry.phonetic)
    );
    if let Some(url) = &entry.audio_url {
        let _ = write!(
            out,
            " <audio class=\"pronunciation-audio\" controls src=\"{}\" aria-label=\"Pronunciation audio\"></audio>",
            escape_html(url)
        );
    }
    out.push_str("</h3>\n<hr>\n");

    for meaning in &entry.meanings {
        let _ = writeln!(out, "<p><b>{}</b></p>", escape_html(&meaning.part_of_speech));
        for (i, definition) in meaning.definitions.iter().enumerate() {
            let _ = writeln!(out, "<p>{}. {}</p>", i + 1, escape_html(definition));
        }
        if !meaning.synonyms.is_empty() {
            let _ = writeln!(
                out,
                "<p><b>Synonyms:</b> {}</p>",
                escape_html(&meaning.synonyms.join(", "))
            );
        }
        if !meaning.antonyms.is_empty() {
            let _ = writeln!(
                out,
                "<p><b>Antonyms:</b> {}</p>",
                escape_html(&meaning.antonyms.join(", "))
            );
        }
        out.push_str("<hr>\n");
    }
    out
}

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
