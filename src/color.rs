//! Packed RGB color values used to accent embeds.
//!
//! Discord represents colors as a single integer (`0xRRGGBB`). This module
//! converts between that integer and the `#RRGGBB` text form users type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of hex digits in a color, excluding the optional `#` prefix.
const HEX_DIGITS: usize = 6;

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Fewer than six hex digits after stripping `#`.
    #[error("color is too short: expected 6 hex digits")]
    TooShort,

    /// More than six hex digits after stripping `#`.
    #[error("color is too long: expected 6 hex digits")]
    TooLong,

    /// Six characters, but not all of them hex digits.
    #[error("color is malformed: expected only hex digits")]
    Malformed,
}

/// A 24-bit RGB color packed as `0xRRGGBB`.
///
/// Serializes as a plain JSON integer, which is what the webhook API expects.
/// [`Display`](fmt::Display) renders `#RRGGBB` in uppercase and
/// [`FromStr`] accepts the same form with or without the `#`, in any case.
///
/// # Example
///
/// ```
/// use discord_webhook::Color;
///
/// let color: Color = "#2ecc71".parse().unwrap();
/// assert_eq!(color, Color::GREEN);
/// assert_eq!(color.to_string(), "#2ECC71");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    /// `#000000`
    pub const BLACK: Self = Self(0x00_00_00);
    /// `#FFFFFF`
    pub const WHITE: Self = Self(0xFF_FF_FF);
    /// `#2ECC71`
    pub const GREEN: Self = Self(0x2E_CC_71);
    /// `#3498DB`
    pub const BLUE: Self = Self(0x34_98_DB);
    /// `#71368A`
    pub const DARK_PURPLE: Self = Self(0x71_36_8A);
    /// `#E67E22`
    pub const ORANGE: Self = Self(0xE6_7E_22);
    /// `#E74C3C`
    pub const RED: Self = Self(0xE7_4C_3C);
    /// `#95A5A6`
    pub const GREY: Self = Self(0x95_A5_A6);
    /// `#FFFF00`
    pub const YELLOW: Self = Self(0xFF_FF_00);

    /// Largest valid packed value.
    pub const MAX: u32 = 0xFF_FF_FF;

    /// Wraps a packed integer.
    ///
    /// Values above [`Color::MAX`] are not rejected; keeping within range is
    /// the caller's responsibility.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Packs individual channels.
    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
    }

    /// Returns the packed integer.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Parses `#RRGGBB` or `RRGGBB`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Length is checked before content, so a string of the wrong length is
    /// always reported as [`ColorError::TooShort`] or [`ColorError::TooLong`],
    /// never as [`ColorError::Malformed`].
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let hex = text.strip_prefix('#').unwrap_or(text);

        match hex.chars().count() {
            n if n < HEX_DIGITS => return Err(ColorError::TooShort),
            n if n > HEX_DIGITS => return Err(ColorError::TooLong),
            _ => {}
        }

        // from_str_radix tolerates a leading sign, so check digits ourselves
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Malformed);
        }

        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| ColorError::Malformed)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}
