//! Where rendered pages are written

use crate::validation::{ConfigSection, ValidationError, Validator};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output file settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for generated pages; unset means the user's Desktop
    pub directory: Option<PathBuf>,

    /// File extension appended to the chosen output name
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            extension: "html".to_string(),
        }
    }
}

impl OutputConfig {
    /// Returns the configured directory, or Desktop, then home, then `.`
    pub fn resolve_directory(&self) -> PathBuf {
        if let Some(dir) = &self.directory {
            return dir.clone();
        }

        match UserDirs::new() {
            Some(dirs) => dirs
                .desktop_dir()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dirs.home_dir().to_path_buf()),
            None => {
                log::warn!("Could not determine home directory, writing to current directory");
                PathBuf::from(".")
            }
        }
    }

    /// Builds `<directory>/<name>.<extension>`
    ///
    /// A name that already carries the extension is not extended twice.
    pub fn file_path(&self, name: &str) -> PathBuf {
        let name = name.trim();
        let suffix = format!(".{}", self.extension);
        let file_name = if name.to_ascii_lowercase().ends_with(&suffix.to_ascii_lowercase()) {
            name.to_string()
        } else {
            format!("{}{}", name, suffix)
        };
        self.resolve_directory().join(file_name)
    }
}

impl ConfigSection for OutputConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = vec![Validator::not_empty(&self.extension, "output.extension")];

        if self.extension.contains(|c: char| matches!(c, '.' | '/' | '\\')) {
            results.push(Err(ValidationError::with_value(
                "output.extension",
                "must not contain dots or path separators",
                &self.extension,
            )));
        }

        if let Some(dir) = &self.directory {
            if dir.as_os_str().is_empty() {
                results.push(Err(ValidationError::new(
                    "output.directory",
                    "must not be empty when set",
                )));
            }
        }

        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        if other.directory.is_some() {
            self.directory = other.directory;
        }
        self.extension = other.extension;
    }

    fn section_name(&self) -> &'static str {
        "output"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(OutputConfig::default().validate().is_ok());
    }

    #[test]
    fn test_file_path_appends_extension() {
        let config = OutputConfig {
            directory: Some(PathBuf::from("/tmp/pages")),
            ..OutputConfig::default()
        };
        assert_eq!(config.file_path("cnn"), PathBuf::from("/tmp/pages/cnn.html"));
        assert_eq!(config.file_path("cnn.HTML"), PathBuf::from("/tmp/pages/cnn.HTML"));
    }

    #[test]
    fn test_invalid_extension() {
        let mut config = OutputConfig::default();
        config.extension = ".html".to_string();
        assert!(config.validate().is_err());

        config.extension = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_keeps_directory_when_other_unset() {
        let mut base = OutputConfig {
            directory: Some(PathBuf::from("/srv/out")),
            ..OutputConfig::default()
        };
        base.merge(OutputConfig::default());
        assert_eq!(base.directory, Some(PathBuf::from("/srv/out")));
    }
}
