//! Colour type.

use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::parser::{parse_colour, ColourParseError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Default ink colour for glyphs (`#FFCF75`).
    pub const DEFAULT_FOREGROUND: Self = Self::rgb(0xFF, 0xCF, 0x75);

    /// Default canvas fill (`#000000`).
    pub const DEFAULT_BACKGROUND: Self = Self::BLACK;

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(colour: Colour) -> Self {
        Rgba(colour.to_rgba())
    }
}

impl FromStr for Colour {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_colour(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_delegates_to_parser() {
        let c: Colour = "#F00".parse().unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c: Colour = "rgba(1, 2, 3, 4)".parse().unwrap();
        assert_eq!(c, Colour::new(1, 2, 3, 4));

        assert!("#GGG".parse::<Colour>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
        assert_eq!(Colour::DEFAULT_FOREGROUND.to_string(), "#FFCF75");
    }

    #[test]
    fn test_into_rgba_pixel() {
        let px: Rgba<u8> = Colour::new(1, 2, 3, 4).into();
        assert_eq!(px.0, [1, 2, 3, 4]);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Colour::BLACK, Colour::rgb(0, 0, 0));
        assert_eq!(Colour::WHITE, Colour::rgb(255, 255, 255));
        assert_eq!(Colour::DEFAULT_BACKGROUND, Colour::BLACK);
        assert!(Colour::BLACK.is_opaque());
        assert!(!Colour::new(0, 0, 0, 0).is_opaque());
    }
}
