// FILE: crates/cli/src/source.rs

use anyhow::{Context, Result};
use feedpage_config::{Preset, PresetsConfig};
use feedpage_network::FeedFetcher;
use std::path::{Path, PathBuf};

/// Where a feed document comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// What the user typed at the source prompt, after preset lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Ready(Source),
    /// A templated preset that still needs a user name
    NeedsUser(Preset),
}

/// Maps user input to a source
///
/// Preset names win over everything else. `file://` prefixes and existing
/// paths become file sources; anything else is treated as a URL.
pub fn resolve(input: &str, presets: &PresetsConfig) -> Resolved {
    let input = input.trim();

    if let Some(preset) = presets.resolve(input) {
        if preset.needs_user() {
            return Resolved::NeedsUser(preset);
        }
        return Resolved::Ready(Source::Url(preset.url));
    }

    if let Some(path) = input.strip_prefix("file://") {
        return Resolved::Ready(Source::File(PathBuf::from(path)));
    }

    let lower = input.to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") && Path::new(input).is_file() {
        return Resolved::Ready(Source::File(PathBuf::from(input)));
    }

    Resolved::Ready(Source::Url(input.to_string()))
}

/// Loads raw feed bytes
pub trait FeedSource {
    fn load(&self, source: &Source) -> Result<Vec<u8>>;
}

/// Reads local files directly and downloads everything else
pub struct FeedLoader {
    fetcher: FeedFetcher,
}

impl FeedLoader {
    pub fn new(fetcher: FeedFetcher) -> Self {
        Self { fetcher }
    }
}

impl FeedSource for FeedLoader {
    fn load(&self, source: &Source) -> Result<Vec<u8>> {
        match source {
            Source::Url(url) => self
                .fetcher
                .fetch(url)
                .with_context(|| format!("Failed to fetch {}", url)),
            Source::File(path) => std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}
