//! Link spec parser.
//!
//! Parses the `[body]` grammar, where the body splits on `` ` `` into
//! 1-3 components: url, label + url, or label + url + field directives.

use crate::document::{Link, Run};
use crate::style::Style;

/// The fixed network-address scheme prepended to every link destination.
pub(crate) const SCHEME_PREFIX: &str = "nomadnetwork://";

/// Attempt to parse a link spec starting at `start` (the `[`).
///
/// On success returns the control and the number of bytes consumed, from the
/// `[` through the closing `]` inclusive. Returns `None` when no closing `]`
/// exists, the url resolves empty, or the body has more than three
/// components; the caller then treats the `[` as literal text.
pub(crate) fn parse_link(line: &str, start: usize, style: Style) -> Option<(Run, usize)> {
    let rest = &line[start + 1..];
    let close = rest.find(']')?;
    let body = &rest[..close];
    let consumed = close + 2;

    let components: Vec<&str> = body.split('`').collect();
    let (label, url, field_spec) = match components.as_slice() {
        [url] => ("", *url, ""),
        [label, url] => (*label, *url, ""),
        [label, url, fields] => (*label, *url, *fields),
        _ => return None,
    };

    if url.is_empty() {
        return None;
    }

    let label = if label.is_empty() { url } else { label };

    let fields = if field_spec.is_empty() {
        Vec::new()
    } else {
        field_spec.split('|').map(str::to_string).collect()
    };

    let run = Run::Link(Link {
        url: format!("{}{}", SCHEME_PREFIX, url),
        label: label.to_string(),
        fields,
        style,
    });

    Some((run, consumed))
}
