// FILE: crates/cli/src/session.rs

use crate::source::{resolve, FeedSource, Resolved, Source};
use anyhow::{bail, Context, Result};
use console::style;
use feedpage_config::Config;
use feedpage_core::{render_page, ProjectionMode};
use feedpage_feed_parser::{Document, FeedParser};
use std::fs::{self, File};
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

const SOURCE_PROMPT: &str = "Enter a feed URL, a file, or one of the names above: ";
const NAME_PROMPT: &str = "What would you like to name the page? ";
const AGAIN_PROMPT: &str = "Would you like to do another website? (yes/no) ";

/// Loads `source`, parses it and checks that it is an RSS 2.0 feed with a channel
pub fn load_document<S: FeedSource>(loader: &S, source: &Source) -> Result<Document> {
    let bytes = loader.load(source)?;
    let document = FeedParser::parse_bytes(&bytes)
        .with_context(|| format!("{} is not a readable XML document", source))?;

    document
        .ensure_rss2()
        .with_context(|| format!("{} is not an RSS 2.0 feed", source))?;
    document
        .channel()
        .with_context(|| format!("{} has no channel", source))?;

    Ok(document)
}

/// Renders `document` into a new file at `path`
///
/// A page that fails halfway is removed rather than left truncated.
pub fn write_page(document: &Document, path: &Path, mode: ProjectionMode) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let channel = document.channel()?;
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    if let Err(e) = render_page(channel, &mut writer, mode) {
        drop(writer);
        if let Err(remove_err) = fs::remove_file(path) {
            log::warn!("Could not remove partial page {}: {}", path.display(), remove_err);
        }
        return Err(e).with_context(|| format!("Failed to render {}", path.display()));
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Prompt-driven conversion of feeds into pages
pub struct Session<'a, S, R, W> {
    loader: &'a S,
    config: &'a Config,
    input: R,
    output: W,
}

impl<'a, S, R, W> Session<'a, S, R, W>
where
    S: FeedSource,
    R: BufRead,
    W: Write,
{
    pub fn new(loader: &'a S, config: &'a Config, input: R, output: W) -> Self {
        Self {
            loader,
            config,
            input,
            output,
        }
    }

    /// Asks for feeds until the user answers "no" or input runs out
    ///
    /// Sources that cannot be loaded are reported and asked for again.
    /// With `once` set the loop ends after the first page.
    pub fn run(&mut self, once: bool) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        self.print_presets()?;

        loop {
            let Some(document) = self.prompt_document()? else {
                break;
            };
            let Some(name) = self.prompt_name()? else {
                break;
            };

            let path = self.config.output.file_path(&name);
            match write_page(&document, &path, self.config.projection.mode) {
                Ok(()) => {
                    writeln!(
                        self.output,
                        "{} Page saved to {}",
                        style("✓").green().bold(),
                        path.display()
                    )?;
                    written.push(path);
                }
                Err(e) => self.report(&e)?,
            }

            if once {
                break;
            }

            match self.ask(AGAIN_PROMPT)? {
                Some(answer) if answer.eq_ignore_ascii_case("no") => break,
                None => break,
                Some(_) => {}
            }
        }

        Ok(written)
    }

    /// Converts a single source given up front
    ///
    /// Failures are returned instead of re-prompting. Missing user or page
    /// names are still asked for.
    pub fn render_source(
        &mut self,
        input: &str,
        user: Option<&str>,
        name: Option<&str>,
    ) -> Result<PathBuf> {
        let source = match resolve(input, &self.config.presets) {
            Resolved::Ready(source) => source,
            Resolved::NeedsUser(preset) => {
                let user = match user {
                    Some(user) => user.to_string(),
                    None => match self.prompt_user(&preset.name)? {
                        Some(user) => user,
                        None => bail!("Preset '{}' needs a user name", preset.name),
                    },
                };
                Source::Url(preset.expand(&user))
            }
        };

        let document = load_document(self.loader, &source)?;

        let name = match name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => match self.prompt_name()? {
                Some(name) => name,
                None => bail!("No page name given"),
            },
        };

        let path = self.config.output.file_path(&name);
        write_page(&document, &path, self.config.projection.mode)?;
        Ok(path)
    }

    fn print_presets(&mut self) -> Result<()> {
        let names: Vec<String> = self
            .config
            .presets
            .all()
            .into_iter()
            .map(|preset| preset.name)
            .collect();
        writeln!(
            self.output,
            "{} {}",
            style("Known feeds:").bold().cyan(),
            names.join(", ")
        )?;
        Ok(())
    }

    fn prompt_document(&mut self) -> Result<Option<Document>> {
        loop {
            let Some(input) = self.ask(SOURCE_PROMPT)? else {
                return Ok(None);
            };
            if input.is_empty() {
                continue;
            }

            let source = match resolve(&input, &self.config.presets) {
                Resolved::Ready(source) => source,
                Resolved::NeedsUser(preset) => match self.prompt_user(&preset.name)? {
                    Some(user) => Source::Url(preset.expand(&user)),
                    None => return Ok(None),
                },
            };

            log::debug!("Loading {}", source);
            match load_document(self.loader, &source) {
                Ok(document) => return Ok(Some(document)),
                Err(e) => {
                    self.report(&e)?;
                    writeln!(self.output, "Please enter an RSS 2.0 feed.")?;
                }
            }
        }
    }

    fn prompt_user(&mut self, preset: &str) -> Result<Option<String>> {
        let question = format!("Which {} user? ", preset);
        loop {
            match self.ask(&question)? {
                Some(user) if user.is_empty() => continue,
                other => return Ok(other),
            }
        }
    }

    fn prompt_name(&mut self) -> Result<Option<String>> {
        loop {
            match self.ask(NAME_PROMPT)? {
                Some(name) if name.is_empty() => continue,
                other => return Ok(other),
            }
        }
    }

    /// Writes `question` and reads one trimmed line; `None` at end of input
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, error: &anyhow::Error) -> Result<()> {
        log::warn!("{:#}", error);
        writeln!(self.output, "{} {:#}", style("✗").red().bold(), error)?;
        Ok(())
    }
}
