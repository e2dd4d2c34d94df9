//! Mutable state threaded through a single document parse.

use std::collections::HashMap;

use crate::style::{Alignment, Style};
use crate::theme::{StyleSheet, Theme};

/// Parser state for one document.
///
/// Constructed fresh at the start of every parse and never shared between
/// parses. Everything except `styles` and `default_align` mutates as lines
/// are processed; those two are fixed at construction.
#[derive(Clone, Debug)]
pub(crate) struct ParserState {
    /// Whether literal mode (verbatim passthrough) is active.
    pub literal: bool,
    /// Current section depth, from leading `>` markers.
    pub depth: usize,
    /// Current style; snapshotted by copy into every finalized run.
    pub style: Style,
    /// Current paragraph alignment.
    pub align: Alignment,
    /// The alignment restored by a reset, fixed at document start.
    pub default_align: Alignment,
    /// Resolved theme styles, immutable during the parse.
    pub styles: StyleSheet,
    /// Placeholder for radio grouping; never populated or read.
    #[allow(dead_code)]
    pub radio_groups: HashMap<String, Vec<String>>,
}

impl ParserState {
    pub fn new(theme: Theme) -> Self {
        let styles = theme.styles();
        Self {
            literal: false,
            depth: 0,
            style: styles.plain,
            align: Alignment::Left,
            default_align: Alignment::Left,
            styles,
            radio_groups: HashMap::new(),
        }
    }

    /// Reset style and alignment to their document-start values.
    ///
    /// This is the full reset performed by `` `` `` in text mode and by a
    /// bare `` ` `` in formatting mode. Section depth and literal mode are
    /// not affected.
    pub fn reset_style(&mut self) {
        self.style = self.styles.plain;
        self.align = self.default_align;
    }

    /// Indent units for the current section depth.
    pub fn indent(&self) -> usize {
        self.depth.saturating_sub(1) * 2
    }
}
