use std::{num::ParseIntError, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Embed accent color, stored the way Discord expects it (`0xRRGGBB`).
///
/// The default (zero) color is treated as "unset" and left out of the payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[must_use]
    pub const fn to_discord(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Parses hex notation, with or without a leading `#` (`"#e41811"`, `"e41811"`).
impl FromStr for Color {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        u32::from_str_radix(hex, 16).map(Self)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_discord())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_channels() {
        assert_eq!(Color::new(228, 24, 17).to_discord(), 0x00E4_1811);
        assert_eq!(Color::new(0, 0, 0), Color::default());
    }

    #[test]
    fn parses_hex() {
        assert_eq!("#9217ed".parse::<Color>().unwrap(), Color::new(146, 23, 237));
        assert_eq!("9217ED".parse::<Color>().unwrap(), Color::new(146, 23, 237));
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn serializes_as_integer() {
        let json = serde_json::to_string(&Color::from(0x00ff_8800)).unwrap();
        assert_eq!(json, "16746496");
        let color: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(color, Color::new(255, 136, 0));
    }
}
