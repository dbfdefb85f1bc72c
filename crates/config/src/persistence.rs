//! Reading and writing `config.toml`
//!
//! Saves go through a temp file in the same directory followed by a rename,
//! so a crash never leaves a half-written config behind. The previous file is
//! kept next to it as `config.toml.backup`.

use crate::{Config, ConfigError, ConfigResult, CONFIG_VERSION};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A config file at a fixed path
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("toml.backup")
    }

    /// Reads the file, or returns defaults when there is none yet
    ///
    /// Validation problems are logged, not returned: a config with one bad
    /// value still loads.
    pub fn load(&self) -> ConfigResult<Config> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", self.path.display());
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Err(ConfigError::Empty {
                path: self.path.clone(),
            });
        }

        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        if config.version > CONFIG_VERSION {
            log::warn!(
                "{} was written by a newer feedpage (version {} > {})",
                self.path.display(),
                config.version,
                CONFIG_VERSION
            );
        }
        if let Err(errors) = config.validate() {
            for error in &errors {
                log::warn!("{}: {}", self.path.display(), error);
            }
        }

        log::debug!("Loaded config from {}", self.path.display());
        Ok(config)
    }

    /// Validates and writes `config`, backing up any existing file first
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        config.validate().map_err(ConfigError::Invalid)?;
        let text = toml::to_string_pretty(config)?;

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|source| self.write_error(source))?;

        if self.path.exists() {
            fs::copy(&self.path, self.backup_path()).map_err(|source| self.write_error(source))?;
        }

        let mut staged = NamedTempFile::new_in(dir).map_err(|source| self.write_error(source))?;
        staged
            .write_all(text.as_bytes())
            .and_then(|()| staged.flush())
            .map_err(|source| self.write_error(source))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        log::info!("Saved config to {}", self.path.display());
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_in(dir: &TempDir) -> ConfigFile {
        ConfigFile::new(dir.path().join("config.toml"))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(file_in(&dir).load().unwrap(), Config::default());
    }

    #[test]
    fn test_saved_values_come_back() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);

        let mut config = Config::default();
        config.fetch.timeout_secs = 12;
        config
            .presets
            .entries
            .insert("bbc".to_string(), "http://feeds.bbci.co.uk/news/rss.xml".to_string());

        file.save(&config).unwrap();
        assert_eq!(file.load().unwrap(), config);
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let file = ConfigFile::new(dir.path().join("a").join("b").join("config.toml"));

        file.save(&Config::default()).unwrap();
        assert!(file.path().exists());
    }

    #[test]
    fn test_second_save_keeps_backup() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);

        file.save(&Config::default()).unwrap();
        assert!(!file.backup_path().exists());

        let mut changed = Config::default();
        changed.fetch.max_retries = 0;
        file.save(&changed).unwrap();

        let backup = fs::read_to_string(file.backup_path()).unwrap();
        let previous: Config = toml::from_str(&backup).unwrap();
        assert_eq!(previous, Config::default());
    }

    #[test]
    fn test_whitespace_file_is_empty_error() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);
        fs::write(file.path(), "   \n").unwrap();

        assert!(matches!(file.load(), Err(ConfigError::Empty { .. })));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);
        fs::write(file.path(), "this is not valid TOML {{{").unwrap();

        assert!(matches!(file.load(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_invalid_config_is_not_written() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);

        let mut config = Config::default();
        config.fetch.timeout_secs = 0;

        match file.save(&config) {
            Err(ConfigError::Invalid(errors)) => {
                assert_eq!(errors[0].field, "fetch.timeout_secs");
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }
        assert!(!file.path().exists());
    }
}
