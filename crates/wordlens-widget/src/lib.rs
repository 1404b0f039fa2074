//! # wordlens-widget
//!
//! The dictionary lookup widget: a [`LookupController`] wired to an input
//! field, an output region, and a dictionary source, all injected.
//!
//! Hosts translate their own UI events into [`UiEvent`]s and hand them to
//! the controller. The controller never touches a concrete UI toolkit.

mod controller;
mod event;
mod surface;

pub use controller::{LookupController, SearchReport};
pub use event::{Key, UiEvent};
pub use surface::{InputField, MemoryInput, MemoryOutput, OutputRegion};
