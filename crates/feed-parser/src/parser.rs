// crates/feed-parser/src/parser.rs
//! Builds a feed tree from raw XML

use crate::error::{FeedError, FeedResult};
use crate::tree::{Document, Element, Node};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Feed parser
pub struct FeedParser;

impl FeedParser {
    /// Parses a document from a string
    pub fn parse(content: &str) -> FeedResult<Document> {
        Self::parse_bytes(content.as_bytes())
    }

    /// Parses a document from raw bytes (as fetched over HTTP)
    pub fn parse_bytes(content: &[u8]) -> FeedResult<Document> {
        // Text is trimmed per merged run in `settle_text`, not per event, so the
        // spaces between text and CDATA pieces survive
        let mut reader = Reader::from_reader(content);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let element = Self::open_element(&e)?;
                    if let Some(parent) = stack.last_mut() {
                        Self::settle_text(parent);
                    }
                    stack.push(element);
                }
                Ok(Event::Empty(e)) => {
                    let element = Self::open_element(&e)?;
                    Self::close_element(element, &mut stack, &mut root)?;
                }
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map_err(|err| FeedError::XmlParse(err.to_string()))?;
                    Self::append_text(&mut stack, &text);
                }
                Ok(Event::CData(e)) => {
                    Self::append_text(&mut stack, &String::from_utf8_lossy(&e));
                }
                Ok(Event::End(_)) => {
                    let mut element = stack.pop().ok_or_else(|| {
                        FeedError::InvalidXml("closing tag without an open element".to_string())
                    })?;
                    Self::settle_text(&mut element);
                    Self::close_element(element, &mut stack, &mut root)?;
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(FeedError::from(e)),
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(FeedError::InvalidXml(format!(
                "unexpected end of document inside <{}>",
                open.tag
            )));
        }

        let root = root.ok_or_else(|| {
            FeedError::InvalidXml("document has no root element".to_string())
        })?;
        log::debug!(
            "Built feed tree rooted at <{}> with {} children",
            root.tag,
            root.child_count()
        );

        Ok(Document::new(root))
    }

    fn open_element(start: &BytesStart<'_>) -> FeedResult<Element> {
        let tag = String::from_utf8_lossy(start.name().as_ref()).to_string();
        let mut element = Element::new(tag);

        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr.unescape_value()?.to_string();
            element.attributes.insert(key, value);
        }

        Ok(element)
    }

    fn close_element(
        element: Element,
        stack: &mut Vec<Element>,
        root: &mut Option<Element>,
    ) -> FeedResult<()> {
        match stack.last_mut() {
            Some(parent) => {
                Self::settle_text(parent);
                parent.children.push(Node::Element(element));
                Ok(())
            }
            None if root.is_none() => {
                *root = Some(element);
                Ok(())
            }
            None => Err(FeedError::InvalidXml(format!(
                "second root element <{}>",
                element.tag
            ))),
        }
    }

    /// Trims the trailing text run of `element`, dropping it if nothing is left
    fn settle_text(element: &mut Element) {
        if let Some(Node::Text(text)) = element.children.last_mut() {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                element.children.pop();
            } else if trimmed.len() != text.len() {
                *text = trimmed.to_string();
            }
        }
    }

    /// Text outside the document element is dropped; adjacent runs are merged
    fn append_text(stack: &mut [Element], text: &str) {
        if text.is_empty() {
            return;
        }
        let Some(parent) = stack.last_mut() else {
            return;
        };

        match parent.children.last_mut() {
            Some(Node::Text(existing)) => existing.push_str(text),
            _ => parent.children.push(Node::Text(text.to_string())),
        }
    }
}
