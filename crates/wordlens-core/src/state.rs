//! Render states of the widget's output region.
//!
//! ```text
//!            ┌──────────── empty input ───────────► EmptyPrompt
//! trigger ───┤
//!            └─► Loading ──┬── sequence ──────────► Result
//!                          ├── non-sequence ──────► NotFound
//!                          └── any failure ───────► Error
//! ```
//!
//! Every transition replaces the whole output; exactly one state is visible.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::view::EntryView;

pub const EMPTY_PROMPT_MESSAGE: &str = "Enter a word to search.";
pub const ERROR_MESSAGE: &str =
    "Error fetching data. Please check your network or try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RenderState {
    EmptyPrompt,
    Loading { term: String },
    Result { entry: EntryView },
    NotFound { term: String },
    /// The cause is logged, never carried here.
    Error,
}

impl RenderState {
    #[must_use]
    pub const fn kind(&self) -> StateKind {
        match self {
            Self::EmptyPrompt => StateKind::EmptyPrompt,
            Self::Loading { .. } => StateKind::Loading,
            Self::Result { .. } => StateKind::Result,
            Self::NotFound { .. } => StateKind::NotFound,
            Self::Error => StateKind::Error,
        }
    }
}

/// Discriminant of [`RenderState`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateKind {
    EmptyPrompt,
    Loading,
    Result,
    NotFound,
    Error,
}

impl StateKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyPrompt => "empty_prompt",
            Self::Loading => "loading",
            Self::Result => "result",
            Self::NotFound => "not_found",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
