//! Closing markup

use crate::error::ProjectionResult;
use std::io::Write;

/// Writes `</table>`, `</body>` and `</html>`
#[derive(Debug, Clone, Copy, Default)]
pub struct FooterEmitter;

impl FooterEmitter {
    pub fn emit_footer<W: Write>(&self, sink: &mut W) -> ProjectionResult<()> {
        writeln!(sink, "</table>")?;
        writeln!(sink, "</body>")?;
        writeln!(sink, "</html>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_markup() {
        let mut sink = Vec::new();
        FooterEmitter.emit_footer(&mut sink).expect("Should write footer");
        assert_eq!(sink, b"</table>\n</body>\n</html>\n");
    }
}
