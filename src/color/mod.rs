mod hsl;
mod named;
mod utils;

pub use hsl::{Hsl, hsl2rgb};
pub use named::{NamedColor, color_from_name};
use smart_leds::RGB8;
pub use utils::{pack_rgb, rgb, rgb_from_u32, rgb_to_u32, unpack_rgb};

pub type Rgb = RGB8;
