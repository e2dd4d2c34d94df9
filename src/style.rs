//! Style types for micron markup.
//!
//! A Style combines colors and text modifiers into a single specification.
//! Styles are small `Copy` values: the parser snapshots the current style
//! whenever it finalizes a run, so later state mutation never alters runs
//! that were already emitted.

use crate::color::Color;

/// Complete style specification for a run or control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Bold/increased intensity.
    pub bold: bool,
    /// Underlined text.
    pub underline: bool,
    /// Italic text.
    pub italic: bool,
}

impl Style {
    /// Create a new style with the given colors and no modifiers.
    pub fn with_colors(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            ..Self::default()
        }
    }

    /// Returns true if no modifiers are set.
    pub fn is_plain_text(&self) -> bool {
        !self.bold && !self.underline && !self.italic
    }

    /// Returns true if no colors or modifiers are set.
    pub fn is_empty(&self) -> bool {
        self.fg.is_default() && self.bg.is_default() && self.is_plain_text()
    }
}

/// Horizontal alignment of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}
