// FILE: crates/cli/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use feedpage_config::{apply_env_overrides, Config, ConfigManager};
use feedpage_core::ProjectionMode;
use std::io;
use std::path::PathBuf;

mod commands;
mod session;
mod source;

fn build_cli() -> Command {
    Command::new("feedpage")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns RSS 2.0 feeds into HTML summary pages")
        .arg(
            Arg::new("config_dir")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.toml")
                .global(true),
        )
        .arg(
            Arg::new("source")
                .value_name("URL_OR_PRESET")
                .help("Feed URL, local file, or preset name; prompts when omitted"),
        )
        .arg(Arg::new("output").short('o').long("output").value_name("NAME").help("Page name, without extension"))
        .arg(Arg::new("output_dir").long("output-dir").value_name("DIR").help("Directory for generated pages"))
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_name("MODE")
                .help("Fallback rules for missing fields")
                .value_parser(["legacy", "corrected"]),
        )
        .arg(Arg::new("user").long("user").value_name("NAME").help("User name for templated presets"))
        .arg(Arg::new("once").long("once").help("Stop after the first page").action(ArgAction::SetTrue))
        .subcommand(Command::new("presets").about("List known feed presets"))
        .subcommand(
            Command::new("config")
                .about("Manage the configuration file")
                .subcommand_required(true)
                .subcommand(Command::new("init").about("Write a default config file"))
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(Command::new("path").about("Print the config file location")),
        )
}

fn config_manager(matches: &ArgMatches) -> Result<ConfigManager> {
    match matches.get_one::<String>("config_dir") {
        Some(dir) => ConfigManager::with_directory(PathBuf::from(dir)),
        None => ConfigManager::new(),
    }
    .context("Failed to locate config directory")
}

fn apply_cli_overrides(config: &mut Config, matches: &ArgMatches) -> Result<()> {
    if let Some(dir) = matches.get_one::<String>("output_dir") {
        config.output.directory = Some(PathBuf::from(dir));
    }
    if let Some(mode) = matches.get_one::<String>("mode") {
        config.projection.mode = mode
            .parse::<ProjectionMode>()
            .map_err(anyhow::Error::msg)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let manager = config_manager(&matches)?;

    let loaded = manager.load();
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    apply_cli_overrides(&mut config, &matches)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.app.log_level.to_string()),
    )
    .init();
    console::set_colors_enabled(config.app.color_output);

    if let Err(e) = loaded {
        log::warn!("Failed to load config: {}, using defaults", e);
    }

    match matches.subcommand() {
        Some(("presets", _)) => commands::list_presets(&config, &mut io::stdout()),
        Some(("config", sub_matches)) => match sub_matches.subcommand() {
            Some(("init", _)) => commands::config_init(&manager),
            Some(("show", _)) => commands::config_show(&config, &mut io::stdout()),
            Some(("path", _)) => commands::config_path(&manager),
            _ => {
                build_cli().print_help()?;
                Ok(())
            }
        },
        _ => commands::render(&config, &matches),
    }
}
