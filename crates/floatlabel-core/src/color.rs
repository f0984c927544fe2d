use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);
    /// The platform's "darker gray" (`#AAAAAA`).
    pub const DARK_GRAY: Color = Color(0xAA, 0xAA, 0xAA, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }

    /// Packed `0xAARRGGBB`, the layout of platform color ints.
    pub fn from_argb(argb: u32) -> Self {
        Color(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }
    pub fn to_argb(self) -> u32 {
        (self.3 as u32) << 24 | (self.0 as u32) << 16 | (self.1 as u32) << 8 | self.2 as u32
    }

    /// Strict parsing of a layout color value.
    ///
    /// Accepts the platform resource forms `#RGB`, `#ARGB`, `#RRGGBB` and
    /// `#AARRGGBB` (alpha first). Returns `None`
    /// for anything else.
    pub fn parse_argb(value: &str) -> Option<Self> {
        let s = value.trim().strip_prefix('#')?;
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&s[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        match s.len() {
            3 => Some(Color(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
            4 => Some(Color(nibble(1)?, nibble(2)?, nibble(3)?, nibble(0)?)),
            6 => Some(Color(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Color(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
            _ => None,
        }
    }

    /// `#AARRGGBB`.
    pub fn to_argb_hex(self) -> String {
        format!("#{:08X}", self.to_argb())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_argb_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse_argb(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color `{s}`")))
    }
}
