// crates/feed-parser/src/tree.rs
//! Read-only feed tree

use crate::error::{FeedError, FeedResult};
use crate::query;
use indexmap::IndexMap;

/// A child of an [`Element`]: either a nested element or a run of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Literal text (already unescaped)
    Text(String),
}

impl Node {
    /// Returns the label of this node: the tag for elements, the text itself for text
    pub fn label(&self) -> &str {
        match self {
            Node::Element(element) => &element.tag,
            Node::Text(text) => text,
        }
    }

    /// Returns the element if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Returns the text if this node is a text node
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Element(_) => None,
            Node::Text(text) => Some(text),
        }
    }
}

/// A tagged node of the feed tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, e.g. `channel` or `pubDate`
    pub tag: String,
    /// Attributes in document order
    pub attributes: IndexMap<String, String>,
    /// Children in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Creates a childless element with no attributes
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder: adds an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder: appends a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Builder: appends a text child
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Creates `<tag>text</tag>`
    pub fn text_leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(tag).with_text(text)
    }

    /// Returns the number of children (text nodes included)
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the element has no children at all
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the child at `index`
    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Returns the child element at `index`, skipping text nodes
    pub fn child_element(&self, index: usize) -> Option<&Element> {
        self.child(index).and_then(Node::as_element)
    }

    /// Iterates over the direct child elements in document order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Returns the value of an attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns true if the attribute is present
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Label of the first child, or `None` for a childless element.
    ///
    /// For the usual text leaf (`<title>News</title>`) this is the text.
    pub fn first_child_label(&self) -> Option<&str> {
        self.children.first().map(Node::label)
    }

    /// Text of the first child, only when that child is a text node
    pub fn first_text(&self) -> Option<&str> {
        self.children.first().and_then(Node::as_text)
    }

    /// Returns the first child element tagged `tag`
    pub fn find(&self, tag: &str) -> Option<&Element> {
        query::find_child(self, tag).and_then(|index| self.child_element(index))
    }
}

/// A parsed XML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Document element (`rss` for an RSS feed)
    pub root: Element,
}

impl Document {
    /// Wraps an already-built root element
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Returns true if the root is `<rss version="2.0">`
    pub fn is_rss2(&self) -> bool {
        self.root.tag == "rss" && self.root.attribute("version") == Some("2.0")
    }

    /// Fails unless the root is `<rss version="2.0">`
    pub fn ensure_rss2(&self) -> FeedResult<()> {
        if self.root.tag != "rss" {
            return Err(FeedError::UnsupportedFormat(format!(
                "root element is <{}>, expected <rss>",
                self.root.tag
            )));
        }

        match self.root.attribute("version") {
            Some("2.0") => Ok(()),
            Some(other) => Err(FeedError::UnsupportedFormat(format!(
                "RSS version {} (only 2.0 is supported)",
                other
            ))),
            None => Err(FeedError::UnsupportedFormat(
                "RSS root has no version attribute".to_string(),
            )),
        }
    }

    /// Returns the first `channel` element under the root
    pub fn channel(&self) -> FeedResult<&Element> {
        self.root
            .find("channel")
            .ok_or_else(|| FeedError::MissingElement("channel".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_leaf_first_child_label() {
        let title = Element::text_leaf("title", "News");
        assert_eq!(title.first_child_label(), Some("News"));
        assert_eq!(title.first_text(), Some("News"));
        assert_eq!(title.child_count(), 1);
    }

    #[test]
    fn test_first_child_label_of_nested_element_is_its_tag() {
        let outer = Element::new("outer").with_child(Element::new("inner"));
        assert_eq!(outer.first_child_label(), Some("inner"));
        assert_eq!(outer.first_text(), None);
    }

    #[test]
    fn test_empty_element() {
        let element = Element::new("description");
        assert!(element.is_empty());
        assert_eq!(element.first_child_label(), None);
    }

    #[test]
    fn test_attributes() {
        let source = Element::text_leaf("source", "Wire").with_attribute("url", "http://wire");
        assert_eq!(source.attribute("url"), Some("http://wire"));
        assert!(source.has_attribute("url"));
        assert!(!source.has_attribute("href"));
    }

    #[test]
    fn test_document_rss2_check() {
        let doc = Document::new(Element::new("rss").with_attribute("version", "2.0"));
        assert!(doc.is_rss2());
        assert!(doc.ensure_rss2().is_ok());

        let doc = Document::new(Element::new("rss").with_attribute("version", "0.91"));
        assert!(!doc.is_rss2());
        assert!(matches!(doc.ensure_rss2(), Err(FeedError::UnsupportedFormat(_))));

        let doc = Document::new(Element::new("feed"));
        assert!(doc.ensure_rss2().is_err());
    }

    #[test]
    fn test_document_channel() {
        let doc = Document::new(
            Element::new("rss")
                .with_attribute("version", "2.0")
                .with_child(Element::new("channel")),
        );
        assert_eq!(doc.channel().map(|c| c.tag.as_str()).ok(), Some("channel"));

        let doc = Document::new(Element::new("rss"));
        assert!(matches!(doc.channel(), Err(FeedError::MissingElement(_))));
    }
}
