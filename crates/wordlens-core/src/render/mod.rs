//! Renderers for [`RenderState`].
//!
//! - [`markup`]: the HTML fragment the widget writes into its output region
//! - [`text`]: the same content for a terminal, without markup
//!
//! Both are pure; hosts decide where the result goes.

mod markup;
mod text;

pub use markup::{escape_html, markup};
pub use text::text;

use crate::state::RenderState;

/// Which renderer a host uses for its output region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Markup,
    Text,
}

impl RenderStyle {
    #[must_use]
    pub fn render(self, state: &RenderState) -> String {
        match self {
            Self::Markup => markup(state),
            Self::Text => text(state),
        }
    }
}
