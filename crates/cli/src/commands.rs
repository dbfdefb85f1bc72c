// FILE: crates/cli/src/commands.rs

use crate::session::Session;
use crate::source::FeedLoader;
use anyhow::{Context, Result};
use clap::ArgMatches;
use console::style;
use feedpage_config::{Config, ConfigManager, FetchConfig};
use feedpage_network::{ClientConfig, FeedFetcher};
use std::io::{self, Write};

/// Maps the `[fetch]` section onto the HTTP client settings
pub fn client_config(fetch: &FetchConfig) -> ClientConfig {
    ClientConfig {
        timeout: fetch.timeout(),
        user_agent: fetch.user_agent.clone(),
        max_redirects: fetch.max_redirects,
        max_retries: fetch.max_retries,
        ..ClientConfig::default()
    }
}

/// Render one feed given on the command line, or run the interactive loop
pub fn render(config: &Config, matches: &ArgMatches) -> Result<()> {
    let fetcher =
        FeedFetcher::with_config(client_config(&config.fetch)).context("Failed to build HTTP client")?;
    let loader = FeedLoader::new(fetcher);

    let stdin = io::stdin();
    let mut session = Session::new(&loader, config, stdin.lock(), io::stdout());

    if let Some(input) = matches.get_one::<String>("source") {
        let user = matches.get_one::<String>("user").map(String::as_str);
        let name = matches.get_one::<String>("output").map(String::as_str);
        let path = session.render_source(input, user, name)?;
        println!("{} Page saved to {}", style("✓").green().bold(), path.display());
        return Ok(());
    }

    let written = session.run(matches.get_flag("once"))?;
    println!(
        "\n{} page(s) written. Goodbye!",
        style(written.len()).bold().cyan()
    );
    Ok(())
}

/// List built-in and configured presets
pub fn list_presets<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    writeln!(out, "\n{}", style("Feed Presets").bold().cyan())?;
    writeln!(out, "{}", "=".repeat(80))?;

    for preset in config.presets.all() {
        let note = if preset.needs_user() {
            format!("  {}", style("(asks for a user name)").dim())
        } else {
            String::new()
        };
        writeln!(out, "{:<18} {}{}", style(&preset.name).bold(), preset.url, note)?;
    }

    Ok(())
}

/// Write a default config file if none exists
pub fn config_init(manager: &ConfigManager) -> Result<()> {
    let created = manager
        .initialize()
        .context("Failed to initialize config file")?;

    if created {
        println!(
            "{} Created {}",
            style("✓").green().bold(),
            manager.config_path().display()
        );
    } else {
        println!("Config file already exists at {}", manager.config_path().display());
    }
    Ok(())
}

/// Print the effective configuration as TOML
pub fn config_show<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let text = toml::to_string_pretty(config).context("Failed to serialize config")?;
    write!(out, "{}", text)?;

    if let Err(errors) = config.validate() {
        writeln!(out)?;
        for error in errors {
            writeln!(out, "{} {}", style("warning:").yellow().bold(), error)?;
        }
    }
    Ok(())
}

/// Print where the config file lives
pub fn config_path(manager: &ConfigManager) -> Result<()> {
    println!("{}", manager.config_path().display());
    Ok(())
}

#[cfg(test)]
mod tests;
