//! Page header: channel metadata and the table head

use crate::error::{ProjectionError, ProjectionResult};
use crate::html::{self, expect_tag, required_text};
use crate::item::ItemProjector;
use crate::mode::ProjectionMode;
use crate::{NO_CHANNEL_DESCRIPTION, NO_CHANNEL_TITLE};
use feedpage_feed_parser::{ChildIndex, Element};
use std::io::Write;

/// Channel metadata as it will appear on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHeader<'a> {
    pub title: &'a str,
    pub link: &'a str,
    pub description: &'a str,
}

impl<'a> ChannelHeader<'a> {
    /// Resolves title, link and description with their fallbacks
    pub fn resolve(channel: &'a Element, mode: ProjectionMode) -> ProjectionResult<Self> {
        expect_tag(channel, "channel")?;
        let index = ChildIndex::build(channel);

        Ok(Self {
            title: Self::title(channel, &index, mode),
            link: Self::link(channel, &index)?,
            description: Self::description(channel, &index),
        })
    }

    /// A `title` without text counts as missing
    fn title(channel: &'a Element, index: &ChildIndex<'_>, mode: ProjectionMode) -> &'a str {
        let title = index
            .find("title")
            .and_then(|i| channel.child_element(i))
            .and_then(Element::first_child_label);
        if let Some(title) = title {
            return title;
        }

        // A description stands in for the title with its own tag as the text
        let description = index.find("description");
        match description.and_then(|i| channel.child_element(i)) {
            Some(element) if mode.counts(description) => element.tag.as_str(),
            _ => NO_CHANNEL_TITLE,
        }
    }

    fn link(channel: &'a Element, index: &ChildIndex<'_>) -> ProjectionResult<&'a str> {
        let link = index
            .find("link")
            .and_then(|i| channel.child_element(i))
            .ok_or(ProjectionError::MissingChannelLink)?;
        required_text(link)
    }

    fn description(channel: &'a Element, index: &ChildIndex<'_>) -> &'a str {
        index
            .find("description")
            .and_then(|i| channel.child_element(i))
            .and_then(Element::first_child_label)
            .unwrap_or(NO_CHANNEL_DESCRIPTION)
    }
}

/// Writes the document start and every item row of a channel
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelProjector {
    mode: ProjectionMode,
}

impl ChannelProjector {
    pub fn new(mode: ProjectionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    /// Emits the header markup, then one row per `item` child in document order.
    ///
    /// Nothing is written if the channel metadata cannot be resolved.
    pub fn emit_header<W: Write>(&self, channel: &Element, sink: &mut W) -> ProjectionResult<()> {
        let header = ChannelHeader::resolve(channel, self.mode)?;
        log::debug!("Rendering channel '{}' ({})", header.title, header.link);

        let title = html::text(header.title);
        writeln!(sink, "<html>")?;
        writeln!(sink, "<head>")?;
        writeln!(sink, "<title>{}</title>", title)?;
        writeln!(sink, "</head>")?;
        writeln!(sink, "<body>")?;
        writeln!(
            sink,
            "<h1><a href=\"{}\">{}</a></h1>",
            html::attr(header.link),
            title
        )?;
        writeln!(sink, "<p>{}</p>", html::text(header.description))?;
        writeln!(sink, "<table border=\"1\">")?;
        writeln!(sink, "<tr>")?;
        writeln!(sink, "<th>Date</th>")?;
        writeln!(sink, "<th>Source</th>")?;
        writeln!(sink, "<th>News</th>")?;
        writeln!(sink, "</tr>")?;

        let rows = ItemProjector::new(self.mode);
        let mut count = 0usize;
        for item in channel.elements().filter(|e| e.tag == "item") {
            rows.emit_row(item, sink)?;
            count += 1;
        }
        log::debug!("Rendered {} item rows", count);

        Ok(())
    }
}
