//! HTTP fetch settings

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Feed download settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Extra attempts after a timeout or connection failure
    pub max_retries: u32,

    /// Maximum redirects to follow
    pub max_redirects: usize,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 2,
            max_redirects: 10,
            user_agent: format!("feedpage/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    /// Returns the timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ConfigSection for FetchConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let results = vec![
            Validator::in_range(self.timeout_secs, 1, 300, "fetch.timeout_secs"),
            Validator::in_range(self.max_retries, 0, 10, "fetch.max_retries"),
            Validator::in_range(self.max_redirects, 0, 50, "fetch.max_redirects"),
            Validator::not_empty(&self.user_agent, "fetch.user_agent"),
        ];

        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        self.timeout_secs = other.timeout_secs;
        self.max_retries = other.max_retries;
        self.max_redirects = other.max_redirects;
        self.user_agent = other.user_agent;
    }

    fn section_name(&self) -> &'static str {
        "fetch"
    }
}
