//! Error types for micron parsing.

use thiserror::Error;

/// Errors that can occur when resolving a color token.
///
/// The document parser itself never surfaces these: an unresolvable token
/// inside a formatting directive degrades to [`Color::Default`]. They exist
/// for callers that resolve tokens directly.
///
/// [`Color::Default`]: crate::Color::Default
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Token contains a non-hex digit where hex was expected.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Grayscale token (`g` prefix) without a decimal percentage.
    #[error("invalid grayscale color: {0}")]
    InvalidGrayscale(String),

    /// Token matches none of the supported forms.
    #[error("unrecognized color token: {0}")]
    UnrecognizedToken(String),
}
