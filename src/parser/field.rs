//! Field spec parser.
//!
//! Parses the `<header`` ` ``data>` grammar reached from formatting mode.
//! The header is either a bare field name or a `|`-delimited tuple
//! `flags|name[|value[|prechecked]]`; the data slot holds a text field's
//! initial contents or a checkbox/radio label.

use crate::document::{Checkbox, Field, Radio, Run, DEFAULT_FIELD_WIDTH, MAX_FIELD_WIDTH};
use crate::style::Style;

/// What kind of control the header flags select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FieldKind {
    Text,
    Masked,
    Checkbox,
    Radio,
}

/// Attempt to parse a field spec starting at `start` (the `<`).
///
/// On success returns the control and the number of bytes consumed, from the
/// `<` through the closing `>` inclusive. Returns `None` when the inner
/// backtick or the closing `>` is missing; the caller then treats the `<` as
/// a no-op.
pub(crate) fn parse_field(line: &str, start: usize, style: Style) -> Option<(Run, usize)> {
    let rest = &line[start + 1..];
    let tick = rest.find('`')?;
    let header = &rest[..tick];
    let after_tick = &rest[tick + 1..];
    let close = after_tick.find('>')?;
    let data = &after_tick[..close];

    // '<' + header + '`' + data + '>'
    let consumed = 1 + tick + 1 + close + 1;

    let mut kind = FieldKind::Text;
    let mut width = DEFAULT_FIELD_WIDTH;
    let mut name = header;
    let mut value = "";
    let mut prechecked = false;

    if header.contains('|') {
        let components: Vec<&str> = header.split('|').collect();
        let mut flags = components[0].to_string();
        name = components[1];

        if flags.contains('^') {
            kind = FieldKind::Radio;
            flags = flags.replacen('^', "", 1);
        } else if flags.contains('?') {
            kind = FieldKind::Checkbox;
            flags = flags.replacen('?', "", 1);
        } else if flags.contains('!') {
            kind = FieldKind::Masked;
            flags = flags.replacen('!', "", 1);
        }

        if let Some(parsed) = parse_width(&flags) {
            width = parsed;
        }

        if let Some(v) = components.get(2) {
            value = v;
        }
        prechecked = components.get(3) == Some(&"*");
    }

    let run = match kind {
        FieldKind::Checkbox => Run::Checkbox(Checkbox {
            name: name.to_string(),
            value: pick_value(value, data),
            label: data.to_string(),
            prechecked,
            style,
        }),
        FieldKind::Radio => Run::Radio(Radio {
            name: name.to_string(),
            value: pick_value(value, data),
            label: data.to_string(),
            prechecked,
            style,
        }),
        FieldKind::Text | FieldKind::Masked => Run::Field(Field {
            name: name.to_string(),
            width,
            masked: kind == FieldKind::Masked,
            data: data.to_string(),
            style,
        }),
    };

    Some((run, consumed))
}

/// Parse the leading decimal digits of the remaining flags as a width,
/// clamped to 1..=256. Returns `None` when there are no leading digits.
fn parse_width(flags: &str) -> Option<u16> {
    let digits: &str = {
        let end = flags
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(flags.len());
        &flags[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let width: u64 = digits.parse().ok()?;
    Some(width.clamp(1, MAX_FIELD_WIDTH as u64) as u16)
}

/// The explicit value slot wins; an empty one falls back to the data slot.
fn pick_value(value: &str, data: &str) -> String {
    if value.is_empty() {
        data.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(line: &str) -> Option<(Run, usize)> {
        parse_field(line, 0, Style::default())
    }

    #[test]
    fn bare_name_text_field() {
        let (run, consumed) = field("<username`>").unwrap();
        assert_eq!(consumed, 11);
        match run {
            Run::Field(f) => {
                assert_eq!(f.name, "username");
                assert_eq!(f.width, DEFAULT_FIELD_WIDTH);
                assert!(!f.masked);
                assert_eq!(f.data, "");
            }
            other => panic!("expected text field, got {:?}", other),
        }
    }

    #[test]
    fn field_with_default_data() {
        let (run, _) = field("<city`Oslo>").unwrap();
        match run {
            Run::Field(f) => assert_eq!(f.data, "Oslo"),
            other => panic!("expected text field, got {:?}", other),
        }
    }

    #[test]
    fn masked_field_with_width() {
        let (run, _) = field("<!32|password`>").unwrap();
        match run {
            Run::Field(f) => {
                assert_eq!(f.name, "password");
                assert!(f.masked);
                assert_eq!(f.width, 32);
            }
            other => panic!("expected masked field, got {:?}", other),
        }
    }

    #[test]
    fn checkbox_with_value_and_precheck() {
        let (run, _) = field("<?|agree|yes|*`I agree>").unwrap();
        match run {
            Run::Checkbox(cb) => {
                assert_eq!(cb.name, "agree");
                assert_eq!(cb.value, "yes");
                assert_eq!(cb.label, "I agree");
                assert!(cb.prechecked);
            }
            other => panic!("expected checkbox, got {:?}", other),
        }
    }

    #[test]
    fn radio_value_falls_back_to_label() {
        let (run, _) = field("<^|color`Red>").unwrap();
        match run {
            Run::Radio(rb) => {
                assert_eq!(rb.name, "color");
                assert_eq!(rb.value, "Red");
                assert_eq!(rb.label, "Red");
                assert!(!rb.prechecked);
            }
            other => panic!("expected radio, got {:?}", other),
        }
    }

    #[test]
    fn width_clamps_and_defaults() {
        assert_eq!(parse_width("999"), Some(256));
        assert_eq!(parse_width("0"), Some(1));
        assert_eq!(parse_width("24"), Some(24));
        assert_eq!(parse_width(""), None);
        assert_eq!(parse_width("abc"), None);
    }

    #[test]
    fn missing_delimiters_fail() {
        assert!(field("<name").is_none()); // no backtick
        assert!(field("<name`data").is_none()); // no closing '>'
    }

    #[test]
    fn consumed_span_ends_at_closing_angle() {
        let line = "<name`data> tail";
        let (_, consumed) = field(line).unwrap();
        assert_eq!(&line[consumed..], " tail");
    }
}
