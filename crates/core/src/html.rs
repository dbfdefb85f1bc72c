//! Small helpers shared by the projectors

use crate::error::{ProjectionError, ProjectionResult};
use feedpage_feed_parser::Element;
use std::borrow::Cow;

/// Escapes text placed between tags
pub(crate) fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Escapes a value placed inside a double-quoted attribute
pub(crate) fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Fails unless `element` is tagged `expected`
pub(crate) fn expect_tag(element: &Element, expected: &'static str) -> ProjectionResult<()> {
    if element.tag == expected {
        Ok(())
    } else {
        Err(ProjectionError::UnexpectedTag {
            expected,
            found: element.tag.clone(),
        })
    }
}

/// Label of the first child; a childless element is an error
pub(crate) fn required_text(element: &Element) -> ProjectionResult<&str> {
    element
        .first_child_label()
        .ok_or_else(|| ProjectionError::EmptyElement {
            tag: element.tag.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_escaping() {
        assert_eq!(text("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(text("plain"), "plain");
    }

    #[test]
    fn test_attr_escaping() {
        assert_eq!(attr("http://x/?a=1&b=\"2\""), "http://x/?a=1&amp;b=&quot;2&quot;");
    }

    #[test]
    fn test_expect_tag() {
        assert!(expect_tag(&Element::new("item"), "item").is_ok());
        assert!(matches!(
            expect_tag(&Element::new("channel"), "item"),
            Err(ProjectionError::UnexpectedTag { expected: "item", .. })
        ));
    }

    #[test]
    fn test_required_text() {
        let title = Element::text_leaf("title", "Hello");
        assert_eq!(required_text(&title).ok(), Some("Hello"));
        assert!(matches!(
            required_text(&Element::new("title")),
            Err(ProjectionError::EmptyElement { tag }) if tag == "title"
        ));
    }
}
