//! RGBA color with hex parsing and channel blending

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGBA color with 8-bit channels.
///
/// Channels are stored as `u8` so channel blends round identically on every
/// platform: [`Color::mix`] is defined as integer-rounded per-channel math,
/// which is what the palette ramp depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse a `#rgb` or `#rrggbb` hex string.
    ///
    /// Any other shape (missing `#`, wrong length, non-hex digits) yields
    /// `None`. Callers fall back to a default color instead of failing.
    pub fn parse(input: &str) -> Option<Self> {
        let digits = input.strip_prefix('#')?;
        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, ch) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = ch.to_digit(16)? as u8;
                    // #abc expands to #aabbcc
                    *slot = nibble * 17;
                }
                Some(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => {
                let packed = u32::from_str_radix(digits, 16).ok()?;
                Some(Self::from_hex(packed))
            }
            _ => None,
        }
    }

    /// Format as a 6-digit uppercase hex string (`#RRGGBB`).
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub const fn with_alpha(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }

    /// Blend this color toward `target` by `amount` (0.0 keeps self, 1.0
    /// lands on `target`). Each channel is rounded to the nearest integer.
    /// Alpha is carried over from `self`.
    pub fn mix(self, target: Color, amount: f32) -> Color {
        let channel = |from: u8, to: u8| -> u8 {
            (f32::from(from) * (1.0 - amount) + f32::from(to) * amount).round() as u8
        };
        Color {
            r: channel(self.r, target.r),
            g: channel(self.g, target.g),
            b: channel(self.b, target.b),
            a: self.a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid hex color: {raw:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::parse("#6852D6"), Some(Color::rgb(0x68, 0x52, 0xD6)));
        assert_eq!(Color::parse("#ffffff"), Some(Color::WHITE));
    }

    #[test]
    fn parses_three_digit_hex() {
        assert_eq!(Color::parse("#fff"), Some(Color::WHITE));
        assert_eq!(Color::parse("#f00"), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::parse("6852D6"), None);
        assert_eq!(Color::parse("#6852D"), None);
        assert_eq!(Color::parse("#GGGGGG"), None);
        assert_eq!(Color::parse(""), None);
    }

    #[test]
    fn formats_uppercase_six_digit() {
        assert_eq!(Color::rgb(0x68, 0x52, 0xD6).hex(), "#6852D6");
        assert_eq!(Color::BLACK.hex(), "#000000");
    }

    #[test]
    fn mix_rounds_per_channel() {
        // black toward white at 0.96: 255 * 0.96 = 244.8 -> 245
        assert_eq!(Color::BLACK.mix(Color::WHITE, 0.96).hex(), "#F5F5F5");
        assert_eq!(Color::BLACK.mix(Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(Color::BLACK.mix(Color::WHITE, 1.0), Color::WHITE);
    }

    #[test]
    fn serde_round_trips_as_hex_string() {
        let json = serde_json::to_string(&Color::from_hex(0x6852D6)).unwrap();
        assert_eq!(json, "\"#6852D6\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::from_hex(0x6852D6));
    }
}
