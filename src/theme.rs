//! Theme selection and style resolution.
//!
//! A [`Theme`] names one of the two built-in palettes; resolving it yields a
//! [`StyleSheet`] with the default text style and the per-level heading
//! styles. Sheets are plain `Copy` values, immutable after construction and
//! safe to share across any number of concurrent parses.

use crate::color::Color;
use crate::style::Style;

/// A named theme supplying default and heading colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Resolve this theme to its style sheet.
    pub fn styles(self) -> StyleSheet {
        match self {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }
}

/// Resolved styles for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    /// Default style for ordinary text.
    pub plain: Style,
    /// Styles for heading levels 1 through 3.
    headings: [Style; 3],
}

impl StyleSheet {
    /// Style for a heading at the given section depth.
    ///
    /// Levels 1-3 have dedicated styles; deeper levels fall back to plain.
    pub fn heading(&self, level: usize) -> Style {
        match level {
            1..=3 => self.headings[level - 1],
            _ => self.plain,
        }
    }
}

const fn gray(level: u8) -> Color {
    Color::Rgb(level, level, level)
}

const fn heading_style(fg: u8, bg: u8) -> Style {
    Style {
        fg: gray(fg),
        bg: gray(bg),
        bold: false,
        underline: false,
        italic: false,
    }
}

const DARK: StyleSheet = StyleSheet {
    plain: Style {
        fg: gray(0xdd),
        bg: Color::Default,
        bold: false,
        underline: false,
        italic: false,
    },
    headings: [
        heading_style(0x22, 0xbb),
        heading_style(0x11, 0x99),
        heading_style(0x00, 0x77),
    ],
};

const LIGHT: StyleSheet = StyleSheet {
    plain: Style {
        fg: gray(0x22),
        bg: Color::Default,
        bold: false,
        underline: false,
        italic: false,
    },
    headings: [
        heading_style(0x00, 0x77),
        heading_style(0x11, 0xaa),
        heading_style(0x22, 0xcc),
    ],
};
