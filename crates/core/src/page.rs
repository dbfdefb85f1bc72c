//! Whole-page rendering

use crate::channel::ChannelProjector;
use crate::error::ProjectionResult;
use crate::footer::FooterEmitter;
use crate::mode::ProjectionMode;
use feedpage_feed_parser::Element;
use std::io::Write;

/// Writes header, item rows and footer for `channel` into an already-open sink.
///
/// The caller owns the sink: it is neither flushed nor closed here.
pub fn render_page<W: Write>(
    channel: &Element,
    sink: &mut W,
    mode: ProjectionMode,
) -> ProjectionResult<()> {
    ChannelProjector::new(mode).emit_header(channel, sink)?;
    FooterEmitter.emit_footer(sink)
}

/// Renders the page into a `String`
pub fn render_to_string(channel: &Element, mode: ProjectionMode) -> ProjectionResult<String> {
    let mut buf = Vec::new();
    render_page(channel, &mut buf, mode)?;
    // Every byte written comes from &str values
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
