//! Line dispatcher.
//!
//! Top-level per-line router: literal-mode toggle, comments, section depth
//! markers, headings, dividers, or delegation to the inline tokenizer for
//! ordinary paragraph lines.

use crate::document::{Block, Run, TextRun};

use super::inline::tokenize_line;
use super::state::ParserState;

/// The line that flips literal mode on and off.
const LITERAL_TOGGLE: &str = "`=";

/// The escape that displays the toggle marker inside literal mode.
const ESCAPED_TOGGLE: &str = "\\`=";

/// Process one line, producing at most one block.
///
/// `None` means the line contributed nothing (toggle, comment, bare section
/// marker). Rules are re-evaluated in a loop for the `<` depth-reset prefix,
/// so a single line can reset depth and then declare a heading.
pub(crate) fn dispatch_line(line: &str, state: &mut ParserState) -> Option<Block> {
    let mut line = line;
    loop {
        if line.is_empty() {
            return Some(Block::Blank);
        }

        if line == LITERAL_TOGGLE {
            state.literal = !state.literal;
            log::trace!("literal mode {}", if state.literal { "on" } else { "off" });
            return None;
        }

        if state.literal {
            return Some(literal_paragraph(line, state));
        }

        match line.as_bytes()[0] {
            b'#' => return None,
            b'<' => {
                state.depth = 0;
                line = &line[1..];
                continue;
            }
            b'>' => return heading(line, state),
            b'-' => return Some(divider(line)),
            _ => {}
        }

        let runs = tokenize_line(line, state);
        if runs.is_empty() {
            return Some(Block::Blank);
        }
        return Some(Block::Paragraph {
            runs,
            alignment: state.align,
            indent: state.indent(),
        });
    }
}

/// Literal-mode passthrough: the whole line as one monospace run.
fn literal_paragraph(line: &str, state: &ParserState) -> Block {
    let text = if line == ESCAPED_TOGGLE {
        LITERAL_TOGGLE
    } else {
        line
    };
    Block::Paragraph {
        runs: vec![Run::Text(TextRun {
            style: state.style,
            text: text.to_string(),
        })],
        alignment: state.align,
        indent: state.indent(),
    }
}

/// Section heading: leading `>` count sets the depth, the remainder is
/// tokenized under the heading style.
fn heading(line: &str, state: &mut ParserState) -> Option<Block> {
    let depth = line.bytes().take_while(|&b| b == b'>').count();
    state.depth = depth;
    log::trace!("section depth {}", depth);

    let rest = &line[depth..];
    if rest.is_empty() {
        return None;
    }

    // Latch the current style; heading styling must not leak into later
    // lines. Alignment is deliberately not latched.
    let saved = state.style;
    state.style = state.styles.heading(depth);
    let runs = tokenize_line(rest, state);
    state.style = saved;

    if runs.is_empty() {
        return None;
    }
    Some(Block::Heading {
        level: depth,
        runs,
        indent: state.indent(),
    })
}

/// Horizontal divider: `-` alone is a plain rule, otherwise the second
/// character fills the full width.
fn divider(line: &str) -> Block {
    let fill = if line.len() == 1 {
        None
    } else {
        line[1..].chars().next()
    };
    Block::Divider { fill }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Alignment;
    use crate::theme::Theme;

    fn state() -> ParserState {
        ParserState::new(Theme::Dark)
    }

    #[test]
    fn empty_line_is_blank() {
        let mut st = state();
        assert_eq!(dispatch_line("", &mut st), Some(Block::Blank));
    }

    #[test]
    fn toggle_produces_no_block() {
        let mut st = state();
        assert_eq!(dispatch_line("`=", &mut st), None);
        assert!(st.literal);
        assert_eq!(dispatch_line("`=", &mut st), None);
        assert!(!st.literal);
    }

    #[test]
    fn literal_mode_passes_lines_verbatim() {
        let mut st = state();
        dispatch_line("`=", &mut st);
        let block = dispatch_line("# not a comment `!`Ff00", &mut st).unwrap();
        match block {
            Block::Paragraph { runs, .. } => {
                assert_eq!(runs.len(), 1);
                assert_eq!(runs[0].as_text(), Some("# not a comment `!`Ff00"));
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn literal_mode_unescapes_toggle_marker() {
        let mut st = state();
        dispatch_line("`=", &mut st);
        let block = dispatch_line("\\`=", &mut st).unwrap();
        match block {
            Block::Paragraph { runs, .. } => assert_eq!(runs[0].as_text(), Some("`=")),
            other => panic!("expected paragraph, got {:?}", other),
        }
        assert!(st.literal, "escaped marker must not toggle");
    }

    #[test]
    fn comment_produces_no_block() {
        let mut st = state();
        assert_eq!(dispatch_line("# a comment", &mut st), None);
    }

    #[test]
    fn depth_reset_prefix_redispatches() {
        let mut st = state();
        st.depth = 3;
        let block = dispatch_line("<>Title", &mut st).unwrap();
        assert!(matches!(block, Block::Heading { level: 1, .. }));
        assert_eq!(st.depth, 1);
    }

    #[test]
    fn bare_depth_reset_is_blank() {
        let mut st = state();
        st.depth = 2;
        assert_eq!(dispatch_line("<", &mut st), Some(Block::Blank));
        assert_eq!(st.depth, 0);
    }

    #[test]
    fn heading_sets_depth_and_level() {
        let mut st = state();
        let block = dispatch_line(">>Sub", &mut st).unwrap();
        match block {
            Block::Heading {
                level,
                runs,
                indent,
            } => {
                assert_eq!(level, 2);
                assert_eq!(indent, 2);
                assert_eq!(runs[0].as_text(), Some("Sub"));
            }
            other => panic!("expected heading, got {:?}", other),
        }
        assert_eq!(st.depth, 2);
    }

    #[test]
    fn bare_heading_marker_only_changes_depth() {
        let mut st = state();
        assert_eq!(dispatch_line(">>>", &mut st), None);
        assert_eq!(st.depth, 3);
    }

    #[test]
    fn heading_style_does_not_leak() {
        let mut st = state();
        dispatch_line(">Title", &mut st);
        assert_eq!(st.style, Theme::Dark.styles().plain);
    }

    #[test]
    fn heading_runs_carry_heading_style() {
        let mut st = state();
        let block = dispatch_line(">Title", &mut st).unwrap();
        match block {
            Block::Heading { runs, .. } => {
                assert_eq!(runs[0].style(), Theme::Dark.styles().heading(1));
            }
            other => panic!("expected heading, got {:?}", other),
        }
    }

    #[test]
    fn deep_heading_uses_plain_style() {
        let mut st = state();
        let block = dispatch_line(">>>>Deep", &mut st).unwrap();
        match block {
            Block::Heading { runs, .. } => {
                assert_eq!(runs[0].style(), Theme::Dark.styles().plain);
            }
            other => panic!("expected heading, got {:?}", other),
        }
    }

    #[test]
    fn plain_divider() {
        let mut st = state();
        assert_eq!(dispatch_line("-", &mut st), Some(Block::Divider { fill: None }));
    }

    #[test]
    fn filled_divider() {
        let mut st = state();
        assert_eq!(
            dispatch_line("-*", &mut st),
            Some(Block::Divider { fill: Some('*') })
        );
        assert_eq!(
            dispatch_line("-=junk after", &mut st),
            Some(Block::Divider { fill: Some('=') })
        );
    }

    #[test]
    fn paragraph_captures_alignment_after_directives() {
        let mut st = state();
        let block = dispatch_line("`cCentered", &mut st).unwrap();
        match block {
            Block::Paragraph { alignment, .. } => assert_eq!(alignment, Alignment::Center),
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn directive_only_line_is_blank() {
        let mut st = state();
        assert_eq!(dispatch_line("`!", &mut st), Some(Block::Blank));
        assert!(st.style.bold);
    }
}
