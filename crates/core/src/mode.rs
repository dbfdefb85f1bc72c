//! Fallback rule selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which presence test the projectors use for optional children
///
/// `Legacy` reproduces the historical fallback decisions: several lookups
/// only count a child as present when it is not the first child (index > 0),
/// and a `pubDate` needs more than one child before its text is used.
/// `Corrected` uses a plain "is there such a child" test everywhere and
/// reads the date whenever `pubDate` starts with text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    #[default]
    Legacy,
    Corrected,
}

impl ProjectionMode {
    /// Presence test for a child found at `index`
    pub fn counts(self, index: Option<usize>) -> bool {
        match self {
            Self::Legacy => index.is_some_and(|i| i > 0),
            Self::Corrected => index.is_some(),
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Corrected => write!(f, "corrected"),
        }
    }
}

impl FromStr for ProjectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "corrected" => Ok(Self::Corrected),
            other => Err(format!(
                "unknown projection mode '{}' (expected 'legacy' or 'corrected')",
                other
            )),
        }
    }
}
