//! # wordlens-core
//!
//! Core types for the wordlens dictionary widget.
//!
//! This crate holds everything that does not touch the network or a UI host:
//! - Query normalization (trim + lowercase)
//! - The dictionary entry shape returned by `dictionaryapi.dev`
//! - The display-ready entry projection and its truncation limits
//! - The output region's render states and their markup/plain-text renderings
//! - The policy for overlapping searches
//! - Cross-cutting error types

pub mod entry;
pub mod errors;
pub mod policy;
pub mod query;
pub mod render;
pub mod state;
pub mod view;

pub use entry::{Definition, DictionaryEntry, Meaning, Phonetic};
pub use errors::CoreError;
pub use policy::OverlapPolicy;
pub use query::Query;
pub use state::{RenderState, StateKind};
pub use view::{DisplayLimits, EntryView, MeaningView};
