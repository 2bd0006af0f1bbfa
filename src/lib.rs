#![no_std]

pub mod animation;
pub mod bounds;
pub mod buffer;
pub mod color;
pub mod display;
pub mod effect;
pub mod layout;
pub mod math8;
pub mod output;
pub mod text;

pub use animation::{AnimationMode, ModeFlag};
pub use bounds::RenderingBounds;
pub use buffer::PixelBuffer;
pub use display::{DisplayConfig, DisplayError, TileDisplay, create_display};
pub use effect::{ScrollOptions, TextDirection, TextStyle};
pub use layout::{ArrangementError, ArrangementShape, ControllerPosition, TileArrangement};
pub use output::SmartLedsOutput;
pub use text::{BlankFont, Font5x5, Glyph, GlyphSource};

pub use color::{Hsl, NamedColor, Rgb, color_from_name, rgb};
pub use embassy_time::Duration;

/// Identifier of the data pin the LED chain is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PinId(pub u8);

impl PinId {
    /// First general purpose output, used when nothing else is configured
    pub const P0: Self = Self(0);
}

/// Abstract LED transmission trait
///
/// Implement this trait to support different hardware platforms.
/// `frame` holds one `(green, red, blue)` triple per LED in chain order.
/// The call is expected to block until the whole frame has been clocked out.
pub trait OutputDriver {
    /// Write a frame to the LED chain on `pin`, scaled by `brightness`
    fn write(&mut self, frame: &[u8], pin: PinId, brightness: u8);
}
