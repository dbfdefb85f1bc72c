// crates/feed-parser/src/error.rs
//! Errors raised while building or checking a feed tree

use thiserror::Error;

pub type FeedResult<T> = Result<T, FeedError>;

#[derive(Debug, Error)]
pub enum FeedError {
    /// Well-formed tokens that do not make a single-rooted tree
    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    /// A readable document that is not RSS 2.0
    #[error("Unsupported feed format: {0}")]
    UnsupportedFormat(String),

    #[error("Missing required element: {0}")]
    MissingElement(String),

    /// Tokenizer, escape or attribute error from quick-xml
    #[error("XML parsing error: {0}")]
    XmlParse(String),
}

impl From<quick_xml::Error> for FeedError {
    fn from(err: quick_xml::Error) -> Self {
        FeedError::XmlParse(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for FeedError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        FeedError::XmlParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        assert_eq!(
            FeedError::MissingElement("channel".to_string()).to_string(),
            "Missing required element: channel"
        );
        assert_eq!(
            FeedError::UnsupportedFormat("RSS version 0.91".to_string()).to_string(),
            "Unsupported feed format: RSS version 0.91"
        );
    }

    #[test]
    fn test_quick_xml_errors_become_parse_errors() {
        let mut reader = quick_xml::Reader::from_str("<a></b>");
        let err = loop {
            match reader.read_event() {
                Err(e) => break FeedError::from(e),
                Ok(quick_xml::events::Event::Eof) => panic!("Expected a mismatch error"),
                Ok(_) => {}
            }
        };
        assert!(matches!(err, FeedError::XmlParse(_)));
    }
}
