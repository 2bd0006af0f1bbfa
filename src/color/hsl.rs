use crate::{color::Rgb, math8::clamp8};

/// Saturation and luminance are clamped to this before conversion
const MAX_LEVEL: i32 = 99;

/// Color in hue/saturation/luminance space
///
/// `hue` is in degrees `0..360`, `saturation` and `luminance` are
/// percentages `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub luminance: u8,
}

impl Hsl {
    /// Create a color, wrapping the hue around the circle and clamping the
    /// percentages
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(hue: i32, saturation: i32, luminance: i32) -> Self {
        Self {
            hue: hue.rem_euclid(360) as u16,
            saturation: saturation.clamp(0, 100) as u8,
            luminance: luminance.clamp(0, 100) as u8,
        }
    }

    /// Convert to RGB
    pub fn to_rgb(self) -> Rgb {
        hsl2rgb(self)
    }
}

/// Convert HSL to RGB using integer fixed-point math
///
/// Chroma and the secondary component are computed on a 0-255 scale,
/// the hue position inside its 60° sector on a 0-256 scale.
pub fn hsl2rgb(hsl: Hsl) -> Rgb {
    let hue = i32::from(hsl.hue) % 360;
    let sat = i32::from(hsl.saturation).min(MAX_LEVEL);
    let lum = i32::from(hsl.luminance).min(MAX_LEVEL);

    let chroma = (((100 - (2 * lum - 100).abs()) * sat) << 8) / 10_000;
    let sector = hue / 60;
    let within = (hue - sector * 60) * 256 / 60;
    let distance = (((sector % 2) << 8) + within - 256).abs();
    let second = (chroma * (256 - distance)) >> 8;

    let (r, g, b) = match sector {
        0 => (chroma, second, 0),
        1 => (second, chroma, 0),
        2 => (0, chroma, second),
        3 => (0, second, chroma),
        4 => (second, 0, chroma),
        _ => (chroma, 0, second),
    };

    let lightness = (((lum * 2) << 8) / 100 - chroma) / 2;
    Rgb {
        r: clamp8(r + lightness),
        g: clamp8(g + lightness),
        b: clamp8(b + lightness),
    }
}
