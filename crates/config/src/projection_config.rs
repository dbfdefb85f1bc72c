//! Projection settings

use crate::validation::{ConfigSection, ValidationError};
use feedpage_core::ProjectionMode;
use serde::{Deserialize, Serialize};

/// How missing feed fields are detected
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectionConfig {
    /// `legacy` or `corrected`
    pub mode: ProjectionMode,
}

impl ConfigSection for ProjectionConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Ok(())
    }

    fn merge(&mut self, other: Self) {
        self.mode = other.mode;
    }

    fn section_name(&self) -> &'static str {
        "projection"
    }
}
