//! Widget behavior configuration.

use serde::{Deserialize, Serialize};
use wordlens_core::OverlapPolicy;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WidgetConfig {
    /// How overlapping searches resolve (`last-write-wins` or
    /// `latest-request-wins`).
    #[serde(default)]
    pub overlap: OverlapPolicy,
}
