use super::*;
use feedpage_core::ProjectionMode;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_client_config_follows_fetch_section() {
    let fetch = FetchConfig {
        timeout_secs: 12,
        max_retries: 4,
        max_redirects: 3,
        user_agent: "pages/1.0".to_string(),
    };

    let client = client_config(&fetch);
    assert_eq!(client.timeout, Duration::from_secs(12));
    assert_eq!(client.max_retries, 4);
    assert_eq!(client.max_redirects, 3);
    assert_eq!(client.user_agent, "pages/1.0");
}

#[test]
fn test_list_presets_includes_builtins_and_custom() {
    let mut config = Config::default();
    config
        .presets
        .entries
        .insert("bbc".to_string(), "http://feeds.bbci.co.uk/news/rss.xml".to_string());

    let mut out = Vec::new();
    list_presets(&config, &mut out).unwrap();
    let text = String::from_utf8_lossy(&out);

    assert!(text.contains("http://rss.cnn.com/rss/cnn_topstories.rss"));
    assert!(text.contains("http://feeds.bbci.co.uk/news/rss.xml"));
    assert!(text.contains("asks for a user name"));
}

#[test]
fn test_config_show_is_valid_toml() {
    let mut config = Config::default();
    config.projection.mode = ProjectionMode::Corrected;

    let mut out = Vec::new();
    config_show(&config, &mut out).unwrap();

    let parsed: Config = toml::from_str(&String::from_utf8_lossy(&out)).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_config_show_warns_on_invalid_values() {
    let mut config = Config::default();
    config.fetch.timeout_secs = 0;

    let mut out = Vec::new();
    config_show(&config, &mut out).unwrap();
    assert!(String::from_utf8_lossy(&out).contains("warning:"));
}

#[test]
fn test_config_init_writes_file() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_directory(dir.path().to_path_buf()).unwrap();

    config_init(&manager).unwrap();
    assert!(manager.config_path().exists());
    assert_eq!(manager.load().unwrap(), Config::default());

    // Second run leaves the file alone
    config_init(&manager).unwrap();
}
