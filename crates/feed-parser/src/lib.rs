// crates/feed-parser/src/lib.rs
//! Read-only document tree for RSS 2.0 feeds
//!
//! This crate turns raw feed XML into a navigable tree and answers the one
//! question the HTML projection keeps asking: "where is the first child with
//! this tag?"
//!
//! - [`FeedParser`] builds a [`Document`] from bytes or text
//! - [`Element`] / [`Node`] hold tags, attributes and children in document order
//! - [`find_child`] / [`ChildIndex`] locate children by tag, first match wins
//!
//! # Example
//!
//! ```rust
//! use feedpage_feed_parser::{find_child, FeedParser};
//!
//! let rss = r#"<?xml version="1.0"?>
//! <rss version="2.0">
//!   <channel>
//!     <title>My Feed</title>
//!     <item><title>Episode 1</title></item>
//!   </channel>
//! </rss>"#;
//!
//! let doc = FeedParser::parse(rss).expect("Failed to parse feed");
//! doc.ensure_rss2().expect("Not RSS 2.0");
//! let channel = doc.channel().expect("No channel");
//! assert_eq!(find_child(channel, "item"), Some(1));
//! ```

mod error;
mod parser;
pub mod query;
mod tree;

pub use error::{FeedError, FeedResult};
pub use parser::FeedParser;
pub use query::{find_child, has_child, ChildIndex};
pub use tree::{Document, Element, Node};
