use crate::color::{Rgb, rgb_from_u32};

const COLOR_NAME_RED: &str = "red";
const COLOR_NAME_ORANGE: &str = "orange";
const COLOR_NAME_YELLOW: &str = "yellow";
const COLOR_NAME_GREEN: &str = "green";
const COLOR_NAME_BLUE: &str = "blue";
const COLOR_NAME_INDIGO: &str = "indigo";
const COLOR_NAME_VIOLET: &str = "violet";
const COLOR_NAME_PURPLE: &str = "purple";
const COLOR_NAME_WHITE: &str = "white";
const COLOR_NAME_BLACK: &str = "black";

/// Well known colors, valued as `0xRRGGBB`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum NamedColor {
    Red = 0xFF_00_00,
    Orange = 0xFF_A5_00,
    Yellow = 0xFF_FF_00,
    Green = 0x00_FF_00,
    Blue = 0x00_00_FF,
    Indigo = 0x4B_00_82,
    Violet = 0x8A_2B_E2,
    Purple = 0xFF_00_FF,
    White = 0xFF_FF_FF,
    Black = 0x00_00_00,
}

impl NamedColor {
    pub const ALL: [Self; 10] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::White,
        Self::Black,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => COLOR_NAME_RED,
            Self::Orange => COLOR_NAME_ORANGE,
            Self::Yellow => COLOR_NAME_YELLOW,
            Self::Green => COLOR_NAME_GREEN,
            Self::Blue => COLOR_NAME_BLUE,
            Self::Indigo => COLOR_NAME_INDIGO,
            Self::Violet => COLOR_NAME_VIOLET,
            Self::Purple => COLOR_NAME_PURPLE,
            Self::White => COLOR_NAME_WHITE,
            Self::Black => COLOR_NAME_BLACK,
        }
    }

    /// Look a color up by name, ignoring ASCII case
    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(s))
    }

    /// Packed `0xRRGGBB` value
    pub const fn packed(self) -> u32 {
        self as u32
    }

    pub const fn rgb(self) -> Rgb {
        rgb_from_u32(self.packed())
    }
}

/// Resolve a well known color name to its RGB value
pub fn color_from_name(name: &str) -> Option<Rgb> {
    NamedColor::parse_from_str(name).map(NamedColor::rgb)
}
