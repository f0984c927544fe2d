use serde::{Deserialize, Serialize};

/// Horizontal placement of the label text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    #[default]
    Start,
    Center,
    End,
}

// Platform gravity flag bits for the horizontal axis.
const AXIS_MASK: u32 = 0x07;
const CENTER_HORIZONTAL: u32 = 0x01;
const LEFT: u32 = 0x03;
const RIGHT: u32 = 0x05;

impl Gravity {
    /// Parses a layout gravity value: `|`-separated names (`start`, `left`,
    /// `center`, `center_horizontal`, `end`, `right`; vertical names are
    /// ignored) or an integer flag set in decimal or `0x` hex.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
            return u32::from_str_radix(hex, 16).ok().and_then(Self::from_flags);
        }
        if let Ok(flags) = value.parse::<u32>() {
            return Self::from_flags(flags);
        }
        value
            .split('|')
            .filter_map(|part| match part.trim() {
                "start" | "left" => Some(Gravity::Start),
                "center" | "center_horizontal" => Some(Gravity::Center),
                "end" | "right" => Some(Gravity::End),
                _ => None,
            })
            .last()
    }

    /// Maps the horizontal axis of a platform gravity int. Relative
    /// (`START`/`END`) and absolute (`LEFT`/`RIGHT`) flags map alike.
    pub fn from_flags(flags: u32) -> Option<Self> {
        match flags & AXIS_MASK {
            LEFT => Some(Gravity::Start),
            RIGHT => Some(Gravity::End),
            CENTER_HORIZONTAL => Some(Gravity::Center),
            _ => None,
        }
    }
}
