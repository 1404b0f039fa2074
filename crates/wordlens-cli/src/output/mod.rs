use serde::Serialize;
use wordlens_core::render::RenderStyle;
use wordlens_core::{RenderState, StateKind};
use wordlens_widget::OutputRegion;

use crate::cli::{GlobalFlags, OutputFormat};

/// Render one state for stdout. Returns `None` for states the flags hide.
pub fn render_state(state: &RenderState, flags: &GlobalFlags) -> anyhow::Result<Option<String>> {
    if flags.quiet && state.kind() == StateKind::Loading {
        return Ok(None);
    }
    let rendered = match flags.format {
        OutputFormat::Text => RenderStyle::Text.render(state),
        OutputFormat::Html => RenderStyle::Markup.render(state),
        // One line per state so interactive output stays JSONL.
        OutputFormat::Json => serde_json::to_string(state)?,
    };
    Ok(Some(rendered.trim_end().to_string()))
}

/// Render a serializable value (non-widget output such as the config).
pub fn render_value<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text | OutputFormat::Html => Ok(toml::to_string_pretty(value)?),
    }
}

/// Output region backed by the process's stdout.
///
/// Every replace prints the new state in full; a terminal cannot erase what
/// was printed before, so the latest block is the visible one.
pub struct StdoutRegion {
    flags: GlobalFlags,
}

impl StdoutRegion {
    pub const fn new(flags: GlobalFlags) -> Self {
        Self { flags }
    }
}

impl OutputRegion for StdoutRegion {
    fn replace(&self, state: &RenderState) {
        match render_state(state, &self.flags) {
            Ok(Some(rendered)) => println!("{rendered}"),
            Ok(None) => {}
            Err(error) => tracing::error!(%error, state = %state.kind(), "failed to render output"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wordlens_core::RenderState;

    use super::{render_state, render_value};
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(format: OutputFormat, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet,
            verbose: false,
        }
    }

    fn loading() -> RenderState {
        RenderState::Loading {
            term: "hello".to_string(),
        }
    }

    #[test]
    fn quiet_hides_loading_only() {
        let quiet = flags(OutputFormat::Text, true);
        assert_eq!(render_state(&loading(), &quiet).unwrap(), None);
        assert_eq!(
            render_state(&RenderState::EmptyPrompt, &quiet).unwrap().as_deref(),
            Some("Enter a word to search.")
        );
    }

    #[test]
    fn html_uses_markup() {
        let rendered = render_state(&loading(), &flags(OutputFormat::Html, false))
            .unwrap()
            .unwrap();
        assert_eq!(rendered, "<p>⏳ Searching for \"<b>hello</b>\"...</p>");
    }

    #[test]
    fn json_is_one_line_per_state() {
        let rendered = render_state(&loading(), &flags(OutputFormat::Json, false))
            .unwrap()
            .unwrap();
        assert!(!rendered.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["state"], "loading");
        assert_eq!(value["term"], "hello");
    }

    #[test]
    fn values_render_as_toml_or_json() {
        #[derive(serde::Serialize)]
        struct Example {
            name: &'static str,
        }
        let value = Example { name: "wordlens" };
        assert_eq!(
            render_value(&value, OutputFormat::Text).unwrap().trim(),
            "name = \"wordlens\""
        );
        assert!(render_value(&value, OutputFormat::Json)
            .unwrap()
            .contains("\"name\": \"wordlens\""));
    }
}
