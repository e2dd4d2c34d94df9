//! Micron markup parser producing a renderer-agnostic styled document model.
//!
//! Micron is a lightweight, line-oriented markup language. This crate parses
//! it into a [`Document`] — styled text runs, block containers, and
//! interactive control descriptors — that a presentation layer can render to
//! any surface (HTML, terminal, native UI). No rendering happens here.
//!
//! # Overview
//!
//! Lines are interpreted by their leading character:
//!
//! - `#comment` - ignored
//! - `>Heading` - section heading; the `>` count sets the section depth
//! - `<` - resets section depth (the rest of the line is re-interpreted)
//! - `-` - horizontal divider; `-=` fills the width with `=`
//! - `` `= `` - toggles literal (verbatim) mode for the following lines
//!
//! Within a line, a backtick introduces one formatting directive:
//!
//! - `` `! `` / `` `_ `` / `` `* `` - toggle bold / underline / italic
//! - `` `Ff00 `` / `` `f `` - set / reset the foreground color
//! - `` `Bfff `` / `` `b `` - set / reset the background color
//! - `` `c `` / `` `l `` / `` `r `` / `` `a `` - alignment
//! - ```` `` ```` - full style and alignment reset
//! - `` `<name`data> `` - input field (flags select checkbox/radio/masked)
//! - `[label`url]` - hyperlink, also recognized directly in text
//! - `\` - escape the next character
//!
//! Malformed markup is normal input: the parser is total and degrades to
//! literal text or ignored directives, never an error.
//!
//! # Usage
//!
//! ```
//! use micron::{parse, Block, Run, Theme};
//!
//! let doc = parse(">Welcome\nVisit [the index`page/index.mu]", Theme::Dark);
//!
//! assert!(matches!(doc.blocks()[0], Block::Heading { level: 1, .. }));
//! let Block::Paragraph { runs, .. } = &doc.blocks()[1] else { unreachable!() };
//! assert!(matches!(runs[1], Run::Link(_)));
//! ```

pub mod color;
pub mod document;
pub mod error;
pub mod parser;
pub mod style;
pub mod theme;

// Re-export main types at crate root
pub use color::Color;
pub use document::{Block, Checkbox, Document, Field, Link, Radio, Run, TextRun};
pub use error::ColorParseError;
pub use parser::parse;
pub use style::{Alignment, Style};
pub use theme::{StyleSheet, Theme};
