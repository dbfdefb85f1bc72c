//! One table row per feed item

use crate::error::{ProjectionError, ProjectionResult};
use crate::html::{self, expect_tag};
use crate::mode::ProjectionMode;
use crate::{NO_DATE, NO_NEWS_DESCRIPTION, NO_SOURCE};
use feedpage_feed_parser::{ChildIndex, Element};
use std::io::Write;

/// Hyperlink to the item's `source` feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink<'a> {
    pub url: &'a str,
    pub name: &'a str,
}

/// The three cells of an item row, before escaping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow<'a> {
    pub date: &'a str,
    pub source: Option<SourceLink<'a>>,
    pub news_href: &'a str,
    pub news_text: &'a str,
}

impl<'a> ItemRow<'a> {
    /// Resolves every cell of `item` with its fallback
    pub fn resolve(item: &'a Element, mode: ProjectionMode) -> ProjectionResult<Self> {
        expect_tag(item, "item")?;
        let index = ChildIndex::build(item);
        let child = |tag: &str| index.find(tag).and_then(|i| item.child_element(i));

        let date = match (child("pubDate"), mode) {
            (Some(pub_date), ProjectionMode::Legacy) if pub_date.child_count() > 1 => {
                pub_date.first_child_label().unwrap_or(NO_DATE)
            }
            (Some(pub_date), ProjectionMode::Corrected) => {
                pub_date.first_text().unwrap_or(NO_DATE)
            }
            _ => NO_DATE,
        };

        // A source with no text is treated like a missing one
        let source = match child("source").filter(|source| !source.is_empty()) {
            Some(source) => Some(SourceLink {
                url: source
                    .attribute("url")
                    .ok_or_else(|| ProjectionError::MissingAttribute {
                        tag: source.tag.clone(),
                        attribute: "url",
                    })?,
                name: source.first_child_label().unwrap_or(NO_SOURCE),
            }),
            None => None,
        };

        // Childless link, description and title fall through to the next rule
        let counted_text = |tag: &str| {
            let found = index.find(tag);
            if mode.counts(found) {
                found
                    .and_then(|i| item.child_element(i))
                    .and_then(Element::first_child_label)
            } else {
                None
            }
        };

        let news_href = counted_text("link").unwrap_or("");
        let news_text = counted_text("description")
            .or_else(|| counted_text("title"))
            .unwrap_or(NO_NEWS_DESCRIPTION);

        Ok(Self {
            date,
            source,
            news_href,
            news_text,
        })
    }
}

/// Writes item rows
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemProjector {
    mode: ProjectionMode,
}

impl ItemProjector {
    pub fn new(mode: ProjectionMode) -> Self {
        Self { mode }
    }

    /// Emits one `<tr>` for `item`; nothing is written if a cell cannot be resolved
    pub fn emit_row<W: Write>(&self, item: &Element, sink: &mut W) -> ProjectionResult<()> {
        let row = ItemRow::resolve(item, self.mode)?;
        log::trace!("Item row: {:?}", row);

        writeln!(sink, "<tr>")?;
        writeln!(sink, "<td>{}</td>", html::text(row.date))?;
        match row.source {
            Some(source) => writeln!(
                sink,
                "<td><a href=\"{}\">{}</a></td>",
                html::attr(source.url),
                html::text(source.name)
            )?,
            None => writeln!(sink, "<td>{}</td>", NO_SOURCE)?,
        }
        writeln!(
            sink,
            "<td><a href=\"{}\">{}</a></td>",
            html::attr(row.news_href),
            html::text(row.news_text)
        )?;
        writeln!(sink, "</tr>")?;

        Ok(())
    }
}
