//! Locating, loading and saving the user's config

use crate::persistence::ConfigFile;
use crate::{Config, ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `output.directory`
pub const ENV_OUTPUT_DIR: &str = "FEEDPAGE_OUTPUT_DIR";
/// Environment variable overriding `projection.mode`
pub const ENV_PROJECTION_MODE: &str = "FEEDPAGE_PROJECTION_MODE";
/// Environment variable overriding `fetch.timeout_secs`
pub const ENV_FETCH_TIMEOUT_SECS: &str = "FEEDPAGE_FETCH_TIMEOUT_SECS";
/// Environment variable overriding `app.log_level`
pub const ENV_APP_LOG_LEVEL: &str = "FEEDPAGE_APP_LOG_LEVEL";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Entry point for everything the binary does with `config.toml`
pub struct ConfigManager {
    file: ConfigFile,
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Uses the platform config directory
    ///
    /// - Linux: `~/.config/feedpage/`
    /// - macOS: `~/Library/Application Support/feedpage/`
    /// - Windows: `%APPDATA%\feedpage\`
    pub fn new() -> ConfigResult<Self> {
        let dirs = ProjectDirs::from("", "", "feedpage").ok_or(ConfigError::NoConfigDir)?;
        Self::with_directory(dirs.config_dir().to_path_buf())
    }

    /// Uses `config_dir` instead of the platform default
    pub fn with_directory(config_dir: PathBuf) -> ConfigResult<Self> {
        if config_dir.as_os_str().is_empty() {
            return Err(ConfigError::NoConfigDir);
        }

        Ok(Self {
            file: ConfigFile::new(config_dir.join(CONFIG_FILE_NAME)),
            config_dir,
        })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }

    /// Reads the config file; a missing file yields defaults, a broken one an error
    pub fn load(&self) -> ConfigResult<Config> {
        self.file.load()
    }

    /// Loads the configuration, falling back to defaults on any error
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    }

    /// Saves the configuration to file
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.file.save(config)
    }

    /// Loads, applies `update_fn`, and saves the result atomically
    pub fn update<F>(&self, update_fn: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.load()?;
        update_fn(&mut config);
        self.save(&config)
    }

    /// Writes a default config file if one doesn't exist
    ///
    /// Returns Ok(true) if a new file was created, Ok(false) if one already exists.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path().exists() {
            log::info!(
                "Config file already exists at {}",
                self.config_path().display()
            );
            return Ok(false);
        }

        self.save(&Config::default())?;
        Ok(true)
    }

    /// Resets the configuration to defaults
    pub fn reset(&self) -> ConfigResult<()> {
        self.save(&Config::default())
    }

    /// Validates the current configuration file
    ///
    /// Returns all validation errors found, or an empty list if valid.
    pub fn validate(&self) -> ConfigResult<Vec<String>> {
        let config = self.load()?;

        match config.validate() {
            Ok(()) => Ok(Vec::new()),
            Err(errors) => Ok(errors.iter().map(|e| e.to_string()).collect()),
        }
    }
}

/// Applies environment overrides read through `lookup`
///
/// Unparseable values are logged and ignored.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
        if !dir.trim().is_empty() {
            config.output.directory = Some(PathBuf::from(dir));
        }
    }

    if let Some(mode) = lookup(ENV_PROJECTION_MODE) {
        match mode.parse() {
            Ok(mode) => config.projection.mode = mode,
            Err(e) => log::warn!("Ignoring {}: {}", ENV_PROJECTION_MODE, e),
        }
    }

    if let Some(timeout) = lookup(ENV_FETCH_TIMEOUT_SECS) {
        match timeout.trim().parse::<u64>() {
            Ok(secs) => config.fetch.timeout_secs = secs,
            Err(e) => log::warn!("Ignoring {}: {}", ENV_FETCH_TIMEOUT_SECS, e),
        }
    }

    if let Some(level) = lookup(ENV_APP_LOG_LEVEL) {
        match level.parse() {
            Ok(level) => config.app.log_level = level,
            Err(e) => log::warn!("Ignoring {}: {}", ENV_APP_LOG_LEVEL, e),
        }
    }

    if let Err(errors) = config.validate() {
        log::warn!(
            "Config validation warnings after env overrides: {:?}",
            errors
        );
    }
}
