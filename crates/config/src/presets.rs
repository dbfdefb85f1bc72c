//! Named feed presets
//!
//! A preset maps a short name (`cnn`, `espn`, ...) to a feed URL. A URL that
//! contains [`USER_PLACEHOLDER`] needs a user name before it can be fetched.

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder replaced by a user name in templated presets
pub const USER_PLACEHOLDER: &str = "{user}";

/// Presets shipped with the binary
pub const BUILTIN_PRESETS: &[(&str, &str)] = &[
    ("cnn", "http://rss.cnn.com/rss/cnn_topstories.rss"),
    ("abc", "http://feeds.abcnews.com/abcnews/topstories"),
    ("cbs", "https://www.cbsnews.com/latest/rss/main"),
    ("fox", "http://feeds.foxnews.com/foxnews/latest"),
    ("espn", "http://www.espn.com/espn/rss/news"),
    ("nytimes", "http://rss.nytimes.com/services/xml/rss/nyt/HomePage.xml"),
    (
        "washington post",
        "http://feeds.washingtonpost.com/rss/rss_election-2012",
    ),
    (
        "twitter",
        "https://twitrss.me/twitter_user_to_rss/?user={user}",
    ),
];

/// A resolved preset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub url: String,
}

impl Preset {
    /// Returns true if the URL still needs a user name
    pub fn needs_user(&self) -> bool {
        self.url.contains(USER_PLACEHOLDER)
    }

    /// Substitutes the percent-encoded user name into the URL
    pub fn expand(&self, user: &str) -> String {
        self.url
            .replace(USER_PLACEHOLDER, &urlencoding::encode(user.trim()))
    }
}

/// User-defined presets from the `[presets]` table
///
/// Entries override built-ins with the same (case-insensitive) name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PresetsConfig {
    pub entries: BTreeMap<String, String>,
}

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl PresetsConfig {
    /// Looks up `input` among custom presets, then built-ins
    pub fn resolve(&self, input: &str) -> Option<Preset> {
        let key = normalize(input);
        if key.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|(name, _)| normalize(name) == key)
            .map(|(name, url)| Preset {
                name: name.clone(),
                url: url.clone(),
            })
            .or_else(|| {
                BUILTIN_PRESETS
                    .iter()
                    .find(|(name, _)| *name == key)
                    .map(|(name, url)| Preset {
                        name: (*name).to_string(),
                        url: (*url).to_string(),
                    })
            })
    }

    /// Every preset, custom entries shadowing built-ins, sorted by name
    pub fn all(&self) -> Vec<Preset> {
        let mut merged: BTreeMap<String, Preset> = BUILTIN_PRESETS
            .iter()
            .map(|(name, url)| {
                (
                    (*name).to_string(),
                    Preset {
                        name: (*name).to_string(),
                        url: (*url).to_string(),
                    },
                )
            })
            .collect();

        for (name, url) in &self.entries {
            merged.insert(
                normalize(name),
                Preset {
                    name: name.clone(),
                    url: url.clone(),
                },
            );
        }

        merged.into_values().collect()
    }
}

impl ConfigSection for PresetsConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = Vec::new();
        for (name, url) in &self.entries {
            let field = format!("presets.{}", name);
            results.push(Validator::not_empty(name, "presets"));
            results.push(Validator::http_url(url, &field));
        }
        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    fn section_name(&self) -> &'static str {
        "presets"
    }
}
