//! Error types for HTML projection
//!
//! Missing optional fields are never errors; every one of them has a fallback
//! string. The variants here cover broken preconditions (wrong element handed
//! to a projector, a channel without a link, a leaf without text) and sink
//! failures.

use std::io;
use thiserror::Error;

/// Result type for projection operations
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors raised while projecting a feed tree into HTML
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// A projector was handed an element with the wrong tag
    #[error("Expected <{expected}> element, found <{found}>")]
    UnexpectedTag {
        expected: &'static str,
        found: String,
    },

    /// The channel has no `link` child
    #[error("Channel has no <link> element")]
    MissingChannelLink,

    /// An element whose text is required has no children
    #[error("<{tag}> element has no text")]
    EmptyElement { tag: String },

    /// An element lacks a required attribute
    #[error("<{tag}> element is missing the '{attribute}' attribute")]
    MissingAttribute {
        tag: String,
        attribute: &'static str,
    },

    /// Writing to the output sink failed
    #[error("Failed to write HTML: {0}")]
    Io(#[from] io::Error),
}

impl ProjectionError {
    /// Returns true if the error comes from the input tree rather than the sink
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_tag_display() {
        let err = ProjectionError::UnexpectedTag {
            expected: "channel",
            found: "rss".to_string(),
        };
        assert_eq!(err.to_string(), "Expected <channel> element, found <rss>");
    }

    #[test]
    fn test_missing_attribute_display() {
        let err = ProjectionError::MissingAttribute {
            tag: "source".to_string(),
            attribute: "url",
        };
        assert!(err.to_string().contains("'url'"));
    }

    #[test]
    fn test_is_structural() {
        assert!(ProjectionError::MissingChannelLink.is_structural());
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        assert!(!ProjectionError::from(io_err).is_structural());
    }
}
