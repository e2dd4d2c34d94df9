//! Inline tokenizer.
//!
//! Scans one logical line and emits styled runs, alternating between text
//! mode and formatting mode. A single unescaped `` ` `` enters formatting
//! mode for exactly one directive; `` `` ``` `` performs a full style reset.
//! Field (`<`) and link (`[`) specs are delegated to their own parsers.

use crate::color::Color;
use crate::document::{Run, TextRun};
use crate::style::{Alignment, Style};

use super::field::parse_field;
use super::link::parse_link;
use super::state::ParserState;

/// Tokenize a line's content into runs, mutating the parser state as
/// formatting directives are encountered.
///
/// An empty result means the line produced no visible output (the caller
/// treats it as a blank line).
pub(crate) fn tokenize_line(line: &str, state: &mut ParserState) -> Vec<Run> {
    Tokenizer::new(line).tokenize(state)
}

/// Scanner over a single line.
struct Tokenizer<'a> {
    line: &'a str,
    pos: usize,
    pending: String,
    runs: Vec<Run>,
}

impl<'a> Tokenizer<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            pos: 0,
            pending: String::new(),
            runs: Vec::new(),
        }
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.line[self.pos..].chars().next()
    }

    /// Advance by one character.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Flush pending text as a run carrying a snapshot of `style`.
    fn flush(&mut self, style: Style) {
        if !self.pending.is_empty() {
            self.runs.push(Run::Text(TextRun {
                style,
                text: std::mem::take(&mut self.pending),
            }));
        }
    }

    fn tokenize(mut self, state: &mut ParserState) -> Vec<Run> {
        while let Some(c) = self.advance() {
            match c {
                '\\' => {
                    // Escape: the next character is literal, whatever it is.
                    if let Some(escaped) = self.advance() {
                        self.pending.push(escaped);
                    }
                }
                '`' => {
                    if self.peek() == Some('`') {
                        self.advance();
                        self.flush(state.style);
                        state.reset_style();
                    } else {
                        self.flush(state.style);
                        self.directive(state);
                    }
                }
                '[' => {
                    self.flush(state.style);
                    let start = self.pos - 1;
                    match parse_link(self.line, start, state.style) {
                        Some((run, consumed)) => {
                            self.runs.push(run);
                            self.pos = start + consumed;
                        }
                        None => self.pending.push('['),
                    }
                }
                _ => self.pending.push(c),
            }
        }
        self.flush(state.style);
        self.runs
    }

    /// Consume exactly one formatting directive.
    ///
    /// Unknown directive characters are no-ops; either way the scanner is
    /// back in text mode when this returns.
    fn directive(&mut self, state: &mut ParserState) {
        let Some(c) = self.advance() else {
            return;
        };
        match c {
            '_' => state.style.underline = !state.style.underline,
            '!' => state.style.bold = !state.style.bold,
            '*' => state.style.italic = !state.style.italic,
            'F' => {
                if let Some(token) = self.take_color_token() {
                    state.style.fg = Color::resolve(token);
                }
            }
            'f' => state.style.fg = state.styles.plain.fg,
            'B' => {
                if let Some(token) = self.take_color_token() {
                    state.style.bg = Color::resolve(token);
                }
            }
            'b' => state.style.bg = Color::Default,
            '`' => state.reset_style(),
            'c' => state.align = Alignment::Center,
            'l' => state.align = Alignment::Left,
            'r' => state.align = Alignment::Right,
            'a' => state.align = state.default_align,
            '<' => {
                let start = self.pos - 1;
                if let Some((run, consumed)) = parse_field(self.line, start, state.style) {
                    self.runs.push(run);
                    self.pos = start + consumed;
                }
            }
            '[' => {
                let start = self.pos - 1;
                if let Some((run, consumed)) = parse_link(self.line, start, state.style) {
                    self.runs.push(run);
                    self.pos = start + consumed;
                }
            }
            _ => {}
        }
    }

    /// Take the 3-character color token following an `F` or `B` directive.
    ///
    /// Consumes nothing when fewer than 3 characters remain; the directive
    /// is then a no-op and the remainder is processed as text.
    fn take_color_token(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let mut end = start;
        let mut chars = self.line[start..].chars();
        for _ in 0..3 {
            end += chars.next()?.len_utf8();
        }
        self.pos = end;
        Some(&self.line[start..end])
    }
}
