//! Integration tests for the configuration system

use feedpage_config::{
    apply_env_overrides, AppConfig, Config, ConfigManager, ConfigSection, FetchConfig,
    OutputConfig, PresetsConfig, ProjectionConfig, CONFIG_VERSION, ENV_OUTPUT_DIR,
};
use feedpage_core::ProjectionMode;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup_test_manager() -> Result<(TempDir, ConfigManager), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf())?;
    Ok((temp_dir, manager))
}

#[test]
fn test_full_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    let created = manager.initialize()?;
    assert!(created);

    let config = manager.load()?;
    assert_eq!(config.version, CONFIG_VERSION);

    let mut modified = config.clone();
    modified.projection.mode = ProjectionMode::Corrected;
    modified.output.directory = Some(PathBuf::from("/srv/pages"));
    manager.save(&modified)?;

    let reloaded = manager.load()?;
    assert_eq!(reloaded.projection.mode, ProjectionMode::Corrected);
    assert_eq!(reloaded.output.directory, Some(PathBuf::from("/srv/pages")));

    manager.reset()?;
    assert_eq!(manager.load()?, Config::default());

    Ok(())
}

#[test]
fn test_config_validation_integration() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    manager.save(&Config::default())?;
    assert!(manager.validate()?.is_empty());

    let mut invalid = Config::default();
    invalid.fetch.max_redirects = 500;
    assert!(manager.save(&invalid).is_err());

    Ok(())
}

#[test]
fn test_invalid_values_in_file_are_loaded_with_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;
    std::fs::write(manager.config_path(), "[fetch]\ntimeout_secs = 0\n")?;

    let config = manager.load()?;
    assert_eq!(config.fetch.timeout_secs, 0);

    let errors = manager.validate()?;
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("fetch.timeout_secs"));

    Ok(())
}

#[test]
fn test_atomic_save_keeps_backup() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    let config = Config::default();
    manager.save(&config)?;
    manager.save(&config)?;

    let backup_path = manager.config_path().with_extension("toml.backup");
    assert!(backup_path.exists());

    Ok(())
}

#[test]
fn test_all_sections_default_are_valid() {
    assert!(AppConfig::default().validate().is_ok());
    assert!(OutputConfig::default().validate().is_ok());
    assert!(FetchConfig::default().validate().is_ok());
    assert!(ProjectionConfig::default().validate().is_ok());
    assert!(PresetsConfig::default().validate().is_ok());
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_section_names() {
    assert_eq!(AppConfig::default().section_name(), "app");
    assert_eq!(OutputConfig::default().section_name(), "output");
    assert_eq!(FetchConfig::default().section_name(), "fetch");
    assert_eq!(ProjectionConfig::default().section_name(), "projection");
    assert_eq!(PresetsConfig::default().section_name(), "presets");
}

#[test]
fn test_update_closure() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;
    manager.initialize()?;

    manager.update(|config| {
        config.fetch.max_retries = 0;
        config.presets.entries.insert(
            "hn".to_string(),
            "https://news.ycombinator.com/rss".to_string(),
        );
    })?;

    let config = manager.load()?;
    assert_eq!(config.fetch.max_retries, 0);
    assert_eq!(
        config.presets.resolve("HN").map(|p| p.url),
        Some("https://news.ycombinator.com/rss".to_string())
    );

    Ok(())
}

#[test]
fn test_serialization_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let original = Config::default();
    let toml_string = toml::to_string(&original)?;
    let deserialized: Config = toml::from_str(&toml_string)?;
    assert_eq!(original, deserialized);
    Ok(())
}

#[test]
fn test_env_overrides_on_loaded_file() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;
    manager.update(|config| config.fetch.timeout_secs = 9)?;

    let mut config = manager.load()?;
    apply_env_overrides(&mut config, |key| {
        (key == ENV_OUTPUT_DIR).then(|| "/tmp/feedpage-out".to_string())
    });

    assert_eq!(config.fetch.timeout_secs, 9);
    assert_eq!(
        config.output.resolve_directory(),
        PathBuf::from("/tmp/feedpage-out")
    );

    Ok(())
}
