//! The renderer-agnostic document model.
//!
//! Parsing produces a [`Document`]: an ordered list of [`Block`]s, each
//! holding styled [`Run`]s. Nothing here knows how to draw; a renderer walks
//! the tree and maps runs onto its own surface (DOM, terminal cells, widget
//! tree).

use crate::style::{Alignment, Style};
use crate::theme::Theme;

/// Default width of a text field, in characters.
pub const DEFAULT_FIELD_WIDTH: u16 = 24;

/// Maximum width of a text field.
pub const MAX_FIELD_WIDTH: u16 = 256;

/// A styled span of text, rendered in a fixed-width font.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub style: Style,
    pub text: String,
}

/// A text input field, possibly masked (password-style).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    /// Rendered width in characters, 1..=256.
    pub width: u16,
    pub masked: bool,
    /// Initial contents of the field.
    pub data: String,
    pub style: Style,
}

/// A checkbox control.
#[derive(Clone, Debug, PartialEq)]
pub struct Checkbox {
    pub name: String,
    /// Value submitted when checked.
    pub value: String,
    pub label: String,
    pub prechecked: bool,
    pub style: Style,
}

/// A radio button control.
///
/// Radios are independent controls; the parser does not group them by name.
#[derive(Clone, Debug, PartialEq)]
pub struct Radio {
    pub name: String,
    pub value: String,
    pub label: String,
    pub prechecked: bool,
    pub style: Style,
}

/// An activatable hyperlink.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    /// Destination, already scheme-qualified (`nomadnetwork://...`).
    pub url: String,
    pub label: String,
    /// Raw field-submission directives, in markup order, uninterpreted:
    /// `*` submits every field on the page, a token containing `=` appends a
    /// literal key=value to the request, any other token names a field whose
    /// value should be submitted. Resolving these against form state at
    /// activation time is the renderer's job.
    pub fields: Vec<String>,
    pub style: Style,
}

/// The smallest emitted output unit: a styled text span or a control.
#[derive(Clone, Debug, PartialEq)]
pub enum Run {
    Text(TextRun),
    Field(Field),
    Checkbox(Checkbox),
    Radio(Radio),
    Link(Link),
}

impl Run {
    /// Get the text content if this is a text run.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Run::Text(run) => Some(&run.text),
            _ => None,
        }
    }

    /// The style this run carries.
    pub fn style(&self) -> Style {
        match self {
            Run::Text(run) => run.style,
            Run::Field(field) => field.style,
            Run::Checkbox(checkbox) => checkbox.style,
            Run::Radio(radio) => radio.style,
            Run::Link(link) => link.style,
        }
    }

    /// Returns true if this run is an interactive control.
    pub fn is_control(&self) -> bool {
        !matches!(self, Run::Text(_))
    }
}

/// One block-level element of a document.
///
/// `indent` counts abstract indent units derived from the section depth; the
/// renderer multiplies by its own unit width.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// A section heading, laid out full width.
    Heading {
        level: usize,
        runs: Vec<Run>,
        indent: usize,
    },
    /// A horizontal divider. With a fill char the renderer repeats it to
    /// container width; without, it draws a standard rule.
    Divider { fill: Option<char> },
    /// An ordinary line of runs.
    Paragraph {
        runs: Vec<Run>,
        alignment: Alignment,
        indent: usize,
    },
    /// An empty line.
    Blank,
}

/// A parsed micron document: an ordered sequence of blocks.
///
/// Created fresh by every call to [`parse`](crate::parse); the parser holds
/// no reference to it after returning.
///
/// # Examples
///
/// ```
/// use micron::{Block, Document, Theme};
///
/// let doc = Document::parse(">Hello\nWorld", Theme::Dark);
/// assert_eq!(doc.blocks().len(), 2);
/// assert!(matches!(doc.blocks()[0], Block::Heading { level: 1, .. }));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Create a document from pre-built blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Parse micron markup under the given theme.
    ///
    /// Convenience for [`crate::parse`].
    pub fn parse(markup: &str, theme: Theme) -> Self {
        crate::parser::parse(markup, theme)
    }

    /// The blocks of this document, in input order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns true if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl IntoIterator for Document {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
