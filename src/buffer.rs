//! Chain-ordered color storage
//!
//! LEDs are stored in the order they sit on the daisy chain, each one as a
//! `(green, red, blue)` triple ready to be clocked out. Colors are swapped
//! into that order on write and back on read.

use crate::{bounds::RenderingBounds, color::Rgb};

/// Flat, chain-ordered LED buffer
///
/// `MAX_LEDS` is the storage capacity; only the LEDs inside the active
/// [`RenderingBounds`] are ever written or transmitted.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const MAX_LEDS: usize> {
    leds: [[u8; 3]; MAX_LEDS],
    bounds: RenderingBounds,
}

impl<const MAX_LEDS: usize> PixelBuffer<MAX_LEDS> {
    /// Create a zeroed buffer with the given active window
    ///
    /// Returns `None` if the window does not fit into `MAX_LEDS`.
    pub const fn new(bounds: RenderingBounds) -> Option<Self> {
        if bounds.end > MAX_LEDS || bounds.start > bounds.end {
            return None;
        }
        Some(Self {
            leds: [[0; 3]; MAX_LEDS],
            bounds,
        })
    }

    pub const fn bounds(&self) -> RenderingBounds {
        self.bounds
    }

    /// Number of LEDs in the active window
    pub const fn len(&self) -> usize {
        self.bounds.count()
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fill `count` LEDs starting at `from` with one color
    ///
    /// The range is relative to the window and clamped to it.
    pub fn fill(&mut self, color: Rgb, from: usize, count: usize) {
        let range = self.bounds.clamp(from, count);
        let wire = to_wire(color);
        for led in &mut self.leds[range] {
            *led = wire;
        }
    }

    /// Fill the whole window with one color
    pub fn fill_all(&mut self, color: Rgb) {
        self.fill(color, 0, self.len());
    }

    /// Write one LED
    ///
    /// Indices outside the window are ignored.
    pub fn set(&mut self, index: usize, color: Rgb) {
        if index >= self.len() {
            return;
        }
        self.leds[self.bounds.start + index] = to_wire(color);
    }

    /// Read one LED back
    pub fn get(&self, index: usize) -> Option<Rgb> {
        if index >= self.len() {
            return None;
        }
        Some(from_wire(self.leds[self.bounds.start + index]))
    }

    /// Circularly shift `count` LEDs starting at `from`
    ///
    /// A positive offset moves colors towards the start of the chain, a
    /// negative one towards its end. Only the order of colors changes.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn rotate(&mut self, offset: isize, from: usize, count: usize) {
        let range = self.bounds.clamp(from, count);
        let window = &mut self.leds[range];
        if window.is_empty() {
            return;
        }
        let shift = offset.rem_euclid(window.len() as isize) as usize;
        window.rotate_left(shift);
    }

    /// Iterate over the window colors in chain order
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.window().iter().copied().map(from_wire)
    }

    /// Window contents as the raw `(green, red, blue)` byte stream
    pub fn as_bytes(&self) -> &[u8] {
        self.window().as_flattened()
    }

    fn window(&self) -> &[[u8; 3]] {
        &self.leds[self.bounds.start..self.bounds.end]
    }
}

#[inline]
const fn to_wire(color: Rgb) -> [u8; 3] {
    [color.g, color.r, color.b]
}

#[inline]
const fn from_wire(wire: [u8; 3]) -> Rgb {
    Rgb {
        r: wire[1],
        g: wire[0],
        b: wire[2],
    }
}
