//! Policy for searches that overlap in flight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// What happens when a search resolves after a newer one was started.
///
/// ```text
/// search A starts ── search B starts ── B resolves ── A resolves
///   last-write-wins:      output shows A
///   latest-request-wins:  output shows B, A is discarded
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Every response is written when it arrives.
    #[default]
    LastWriteWins,
    /// Only the response of the most recently started search is written.
    LatestRequestWins,
}

impl OverlapPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LastWriteWins => "last-write-wins",
            Self::LatestRequestWins => "latest-request-wins",
        }
    }

    /// Whether responses of superseded searches are dropped.
    #[must_use]
    pub const fn discards_stale(self) -> bool {
        matches!(self, Self::LatestRequestWins)
    }
}

impl fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverlapPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-write-wins" => Ok(Self::LastWriteWins),
            "latest-request-wins" => Ok(Self::LatestRequestWins),
            other => Err(CoreError::UnknownPolicy(other.to_string())),
        }
    }
}
