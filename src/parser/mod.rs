//! The micron parsing engine.
//!
//! A single-pass, line-oriented parser: the input is split on newlines, each
//! line is routed by the [dispatcher](line) and, when it carries ordinary
//! content, handed to the [inline tokenizer](inline) for styled-run
//! extraction. All state lives in a per-call [`state::ParserState`].

mod field;
mod inline;
mod line;
mod link;
mod state;

use crate::document::Document;
use crate::theme::Theme;

use state::ParserState;

/// Parse micron markup into a [`Document`].
///
/// This function is total: malformed markup degrades to literal text or
/// ignored directives, never an error. Parser state is constructed fresh for
/// every call, so concurrent parses never interact.
///
/// # Examples
///
/// ```
/// use micron::{parse, Block, Theme};
///
/// let doc = parse(">Greetings\n\nHello `!bold`! world", Theme::Dark);
/// assert_eq!(doc.blocks().len(), 3);
/// assert!(matches!(doc.blocks()[0], Block::Heading { level: 1, .. }));
/// assert!(matches!(doc.blocks()[1], Block::Blank));
/// assert!(matches!(doc.blocks()[2], Block::Paragraph { .. }));
/// ```
pub fn parse(markup: &str, theme: Theme) -> Document {
    let mut state = ParserState::new(theme);
    let mut blocks = Vec::new();

    for raw_line in markup.split('\n') {
        if let Some(block) = line::dispatch_line(raw_line, &mut state) {
            blocks.push(block);
        }
    }

    log::trace!("parsed {} blocks", blocks.len());
    Document::new(blocks)
}
