use crate::BratError;
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGB colour; r, g, and b range from 0.0 to 1.0
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse a swatch value such as `#FF0000` or the short form `#F00`.
    /// The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Colour, BratError> {
        let invalid = || BratError::InvalidColour(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        // from_str_radix would also take a leading sign
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Colour::new_rgb_bytes(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Colour::new_rgb_bytes(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }

    /// The colour as 8-bit RGB channels
    pub fn to_rgb_bytes(&self) -> [u8; 3] {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b)]
    }

    /// The colour as an opaque [image] pixel
    pub fn to_rgba(&self) -> Rgba<u8> {
        let [r, g, b] = self.to_rgb_bytes();
        Rgba([r, g, b, 255])
    }
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

/// Formats as `#RRGGBB`, the same form [`Colour::from_hex`] accepts
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb_bytes();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for Colour {
    type Err = BratError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colour::from_hex(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = BratError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Colour::from_hex(&s)
    }
}

impl From<Colour> for String {
    fn from(c: Colour) -> Self {
        c.to_string()
    }
}

/// A list of pre-defined colour constants, covering the usual swatches
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Colour = Colour {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const RED: Colour = Colour {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Colour = Colour {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
    /// The lime green of the album cover the whole thing is named after
    pub const BRAT: Colour = Colour {
        r: 138.0 / 255.0,
        g: 206.0 / 255.0,
        b: 0.0,
    };
}
