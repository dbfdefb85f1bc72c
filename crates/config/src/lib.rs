//! feedpage configuration
//!
//! Settings live in `config.toml` under the platform config directory and are
//! grouped into sections, each implementing [`ConfigSection`]. Missing keys
//! take their defaults; `FEEDPAGE_*` environment variables override the file,
//! and command-line flags override both.
//!
//! # Example
//!
//! ```rust,no_run
//! use feedpage_config::{Config, ConfigManager};
//!
//! let manager = ConfigManager::new().expect("Failed to initialize config");
//! let config = manager.load().unwrap_or_else(|e| {
//!     eprintln!("Config error: {}, using defaults", e);
//!     Config::default()
//! });
//!
//! println!("Pages go to {}", config.output.resolve_directory().display());
//! ```

mod error;
mod manager;
mod persistence;
mod validation;

pub mod app_config;
mod fetch_config;
mod output_config;
pub mod presets;
mod projection_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::{
    apply_env_overrides, ConfigManager, ENV_APP_LOG_LEVEL, ENV_FETCH_TIMEOUT_SECS,
    ENV_OUTPUT_DIR, ENV_PROJECTION_MODE,
};
pub use validation::{ConfigSection, Validator};

pub use app_config::{AppConfig, LogLevel};
pub use fetch_config::FetchConfig;
pub use output_config::OutputConfig;
pub use presets::{Preset, PresetsConfig};
pub use projection_config::ProjectionConfig;

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application-level settings
    pub app: AppConfig,

    /// Output file location
    pub output: OutputConfig,

    /// HTTP fetch settings
    pub fetch: FetchConfig,

    /// Fallback rule selection
    pub projection: ProjectionConfig,

    /// User-defined feed presets
    pub presets: PresetsConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.app.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.output.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.fetch.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.projection.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.presets.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Merges this config with another, preferring values from `other`
    pub fn merge(&mut self, other: Config) {
        self.app.merge(other.app);
        self.output.merge(other.output);
        self.fetch.merge(other.fetch);
        self.projection.merge(other.projection);
        self.presets.merge(other.presets);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            output: OutputConfig::default(),
            fetch: FetchConfig::default(),
            projection: ProjectionConfig::default(),
            presets: PresetsConfig::default(),
        }
    }
}
