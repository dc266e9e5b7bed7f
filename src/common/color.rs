//! RGB color values.

use crate::error::{DeckError, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// An RGB color, written to DrawingML as an upper-case `RRGGBB` triple.
///
/// # Examples
///
/// ```rust
/// use deckwright::common::RgbColor;
///
/// let navy = RgbColor::new(0x0D, 0x06, 0x26);
/// assert_eq!(navy.to_hex(), "0D0626");
/// assert_eq!(RgbColor::from_hex("#0d0626").unwrap(), navy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct RgbColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0x00, 0x00, 0x00);
    pub const WHITE: RgbColor = RgbColor::new(0xFF, 0xFF, 0xFF);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex triple, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DeckError::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| DeckError::InvalidColor(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Hex triple without the `#` prefix.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = DeckError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}
