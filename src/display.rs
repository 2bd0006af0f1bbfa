use core::fmt;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::RenderingBounds;
use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::layout::{ArrangementError, ControllerPosition, TileArrangement};
use crate::math8::clamp8;
use crate::{OutputDriver, PinId};

/// Brightness a display starts with
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Pause after a brightness change, keeps clear of pin initialization
const BRIGHTNESS_SETTLE: Duration = Duration::from_millis(1);

/// Configuration for a tile display
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    pub arrangement: TileArrangement,
    pub brightness: u8,
    pub pin: PinId,
}

impl DisplayConfig {
    /// Full brightness on pin `P0`
    pub const fn new(arrangement: TileArrangement) -> Self {
        Self {
            arrangement,
            brightness: DEFAULT_BRIGHTNESS,
            pin: PinId::P0,
        }
    }
}

/// Error returned when a display cannot be created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// The tile counts do not describe a wired arrangement
    Arrangement(ArrangementError),
    /// The chain has more LEDs than the buffer can hold
    ChainTooLong { required: usize, capacity: usize },
}

impl From<ArrangementError> for DisplayError {
    fn from(error: ArrangementError) -> Self {
        Self::Arrangement(error)
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arrangement(error) => write!(f, "{error}"),
            Self::ChainTooLong { required, capacity } => write!(
                f,
                "chain of {required} LEDs does not fit into a buffer of {capacity}"
            ),
        }
    }
}

impl core::error::Error for DisplayError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Arrangement(error) => Some(error),
            Self::ChainTooLong { .. } => None,
        }
    }
}

/// Tiled LED matrix display
///
/// Owns the chain-ordered pixel buffer and the hardware collaborators:
/// an [`OutputDriver`] that clocks frames out and a blocking [`DelayNs`]
/// used for frame pacing. Nothing is transmitted until [`Self::show`].
///
/// `MAX_LEDS` is the buffer capacity and must be at least the chain length
/// of the arrangement.
pub struct TileDisplay<O, D, const MAX_LEDS: usize> {
    output: O,
    delay: D,
    arrangement: TileArrangement,
    pin: PinId,
    brightness: u8,
    buffer: PixelBuffer<MAX_LEDS>,
}

impl<O: OutputDriver, D: DelayNs, const MAX_LEDS: usize> TileDisplay<O, D, MAX_LEDS> {
    /// Create a display with a cleared buffer
    pub fn new(output: O, delay: D, config: &DisplayConfig) -> Result<Self, DisplayError> {
        let chain_length = config.arrangement.chain_length();
        let Some(buffer) = PixelBuffer::new(RenderingBounds::first(chain_length)) else {
            return Err(DisplayError::ChainTooLong {
                required: chain_length,
                capacity: MAX_LEDS,
            });
        };
        #[cfg(feature = "esp32-log")]
        println!(
            "[TileDisplay.new] {}x{} LEDs, chain of {}",
            config.arrangement.matrix_width(),
            config.arrangement.matrix_height(),
            chain_length
        );

        Ok(Self {
            output,
            delay,
            arrangement: config.arrangement,
            pin: config.pin,
            brightness: config.brightness,
            buffer,
        })
    }

    pub const fn arrangement(&self) -> &TileArrangement {
        &self.arrangement
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn pin(&self) -> PinId {
        self.pin
    }

    pub const fn buffer(&self) -> &PixelBuffer<MAX_LEDS> {
        &self.buffer
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn delay(&self) -> &D {
        &self.delay
    }

    /// Bind the display to another output pin
    pub fn set_pin(&mut self, pin: PinId) {
        self.pin = pin;
    }

    /// Set the brightness used by the next [`Self::show`]
    ///
    /// Values outside `0..=255` are clamped.
    pub fn set_brightness(&mut self, brightness: i32) {
        self.brightness = clamp8(brightness);
        self.pause(BRIGHTNESS_SETTLE);
    }

    /// Turn every LED off without transmitting
    pub fn clear(&mut self) {
        self.buffer.fill_all(Rgb::default());
    }

    /// Send the buffer to the LEDs
    ///
    /// Blocks until the output driver has clocked out the whole chain.
    pub fn show(&mut self) {
        self.output
            .write(self.buffer.as_bytes(), self.pin, self.brightness);
    }

    /// Fill the whole display with one color and show it
    pub fn show_color(&mut self, color: Rgb) {
        self.buffer.fill_all(color);
        self.show();
    }

    /// Set the LED at logical `(x, y)`
    ///
    /// Coordinates outside the matrix are ignored. Call [`Self::show`] to
    /// make the change visible.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(index) = self.arrangement.map_xy(x, y) {
            self.buffer.set(index, color);
        }
    }

    /// Color currently stored for logical `(x, y)`
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.arrangement
            .map_xy(x, y)
            .and_then(|index| self.buffer.get(index))
    }

    /// Rotate the chain forward by `offset` LEDs
    ///
    /// Call [`Self::show`] to make the change visible.
    pub fn rotate(&mut self, offset: isize) {
        let len = self.buffer.len();
        self.buffer.rotate(offset.saturating_neg(), 0, len);
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut PixelBuffer<MAX_LEDS> {
        &mut self.buffer
    }

    /// Block for `duration`, the only point an animation gives up time
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn pause(&mut self, duration: Duration) {
        let micros = duration.as_micros().min(u64::from(u32::MAX)) as u32;
        self.delay.delay_us(micros);
    }
}

/// Create a display for `tiles_horizontal × tiles_vertical` tiles
///
/// Starts at full brightness on pin `P0`.
pub fn create_display<O: OutputDriver, D: DelayNs, const MAX_LEDS: usize>(
    tiles_horizontal: u8,
    tiles_vertical: u8,
    controller: ControllerPosition,
    output: O,
    delay: D,
) -> Result<TileDisplay<O, D, MAX_LEDS>, DisplayError> {
    let arrangement = TileArrangement::new(tiles_horizontal, tiles_vertical, controller)?;
    TileDisplay::new(output, delay, &DisplayConfig::new(arrangement))
}
