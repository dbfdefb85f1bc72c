//! HTML projection of RSS 2.0 feed trees
//!
//! The projectors walk a read-only [`Element`](feedpage_feed_parser::Element)
//! tree and write a line-oriented HTML page to any [`std::io::Write`] sink:
//!
//! - [`ChannelProjector::emit_header`] writes the document start, the channel
//!   title/link/description and the table head, then one row per `item`
//! - [`ItemProjector::emit_row`] writes a single item row
//! - [`FooterEmitter::emit_footer`] closes the table and the document
//!
//! Missing optional fields fall back to fixed strings; only broken
//! preconditions surface as [`ProjectionError`].

pub mod channel;
pub mod error;
pub mod footer;
mod html;
pub mod item;
pub mod mode;
pub mod page;

pub use channel::{ChannelHeader, ChannelProjector};
pub use error::{ProjectionError, ProjectionResult};
pub use footer::FooterEmitter;
pub use item::{ItemProjector, ItemRow, SourceLink};
pub use mode::ProjectionMode;
pub use page::{render_page, render_to_string};

/// Channel title when neither `title` nor a usable `description` exists
pub const NO_CHANNEL_TITLE: &str = "no information";
/// Channel description when `description` is missing or empty
pub const NO_CHANNEL_DESCRIPTION: &str = "No Description.";
/// Date cell without a usable `pubDate`
pub const NO_DATE: &str = "No Date Available";
/// Source cell without a `source` child
pub const NO_SOURCE: &str = "No Source Available.";
/// News cell link text without a usable `description` or `title`
pub const NO_NEWS_DESCRIPTION: &str = "No description";
