//! Color types for micron markup.
//!
//! Supports 3-hex, 6-hex, and grayscale-percent token forms.

use crate::error::ColorParseError;

/// A color in micron markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    /// No explicit color set; the renderer uses its surface default.
    #[default]
    Default,
    /// Concrete RGB components.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a raw color token.
    ///
    /// Supports:
    /// - 3 hex digits: `f00`, `ddd`
    /// - 6 hex digits: `ff5733`
    /// - Grayscale percent: `g` followed by 0-99, e.g. `g50`
    ///
    /// Note that the inline directive grammar only ever passes 3-character
    /// tokens; the 6-hex form is reachable through this function directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use micron::Color;
    ///
    /// assert_eq!(Color::parse("f00").unwrap(), Color::Rgb(255, 0, 0));
    /// assert_eq!(Color::parse("ff5733").unwrap(), Color::Rgb(255, 87, 51));
    /// assert_eq!(Color::parse("g50").unwrap(), Color::Rgb(127, 127, 127));
    /// ```
    pub fn parse(token: &str) -> Result<Self, ColorParseError> {
        if let Some(percent) = token.strip_prefix('g') {
            if token.len() == 3 {
                return Self::parse_grayscale(percent);
            }
        }

        match token.len() {
            3 => {
                let mut digits = token.chars();
                let r = Self::parse_hex_digit(digits.next().unwrap())
                    .ok_or_else(|| ColorParseError::InvalidHex(token.to_string()))?;
                let g = Self::parse_hex_digit(digits.next().unwrap())
                    .ok_or_else(|| ColorParseError::InvalidHex(token.to_string()))?;
                let b = Self::parse_hex_digit(digits.next().unwrap())
                    .ok_or_else(|| ColorParseError::InvalidHex(token.to_string()))?;
                Ok(Color::Rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let mut channels = [0u8; 3];
                for (i, pair) in token.as_bytes().chunks(2).enumerate() {
                    let high = Self::parse_hex_digit(pair[0] as char)
                        .ok_or_else(|| ColorParseError::InvalidHex(token.to_string()))?;
                    let low = Self::parse_hex_digit(pair[1] as char)
                        .ok_or_else(|| ColorParseError::InvalidHex(token.to_string()))?;
                    channels[i] = high * 16 + low;
                }
                Ok(Color::Rgb(channels[0], channels[1], channels[2]))
            }
            _ => Err(ColorParseError::UnrecognizedToken(token.to_string())),
        }
    }

    /// Resolve a token, degrading to [`Color::Default`] on failure.
    ///
    /// This is the behavior of the inline `F`/`B` directives: malformed
    /// markup is normal input, not an error.
    pub fn resolve(token: &str) -> Self {
        Self::parse(token).unwrap_or_default()
    }

    fn parse_hex_digit(c: char) -> Option<u8> {
        match c {
            '0'..='9' => Some(c as u8 - b'0'),
            'a'..='f' => Some(c as u8 - b'a' + 10),
            'A'..='F' => Some(c as u8 - b'A' + 10),
            _ => None,
        }
    }

    /// Parse the percentage part of a grayscale token (after the `g`).
    fn parse_grayscale(percent: &str) -> Result<Self, ColorParseError> {
        let value: u32 = percent
            .parse()
            .map_err(|_| ColorParseError::InvalidGrayscale(format!("g{}", percent)))?;
        // 0-99 maps linearly onto the 0-255 gray ramp
        let level = (value * 255 / 100).min(255) as u8;
        Ok(Color::Rgb(level, level, level))
    }

    /// Returns true if this is the "no explicit color" sentinel.
    pub fn is_default(&self) -> bool {
        matches!(self, Color::Default)
    }

    /// Convert to RGB components, if concrete.
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Rgb(r, g, b) => Some((*r, *g, *b)),
            Color::Default => None,
        }
    }
}
