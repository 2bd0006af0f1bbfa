//! Rainbow hue ramp
//!
//! The whole chain is one continuous ramp from a start hue to an end hue,
//! always sweeping clockwise around the color wheel. Hues are interpolated
//! in fixed point (scaled by 100) so long chains keep their precision.
//! Rotating the buffer afterwards spins the rainbow without recomputing it.

use embedded_hal::delay::DelayNs;

use crate::{
    OutputDriver,
    buffer::PixelBuffer,
    color::{Hsl, Rgb},
    display::TileDisplay,
};

const RAINBOW_SATURATION: i32 = 100;
const RAINBOW_LUMINANCE: i32 = 50;
/// Fixed-point scale of interpolated hues
const HUE_SCALE: i32 = 100;
const FULL_CIRCLE: i32 = 360;

/// Fill the buffer window with a clockwise hue ramp
///
/// The first and last LEDs get exactly `start_hue` and `end_hue`.
/// A single LED gets `start_hue` advanced by one interpolation step.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn fill_rainbow<const MAX_LEDS: usize>(
    leds: &mut PixelBuffer<MAX_LEDS>,
    start_hue: i32,
    end_hue: i32,
) {
    let steps = leds.len();
    if steps == 0 {
        return;
    }

    let start_hue = start_hue.rem_euclid(FULL_CIRCLE);
    let end_hue = end_hue.rem_euclid(FULL_CIRCLE);
    let distance = (end_hue + FULL_CIRCLE - start_hue) % FULL_CIRCLE;
    let hue_step = distance * HUE_SCALE / steps as i32;

    if steps == 1 {
        leds.set(0, rainbow_color(start_hue + hue_step / HUE_SCALE));
        return;
    }

    leds.set(0, rainbow_color(start_hue));
    let start_hue_fp = start_hue * HUE_SCALE;
    for i in 1..steps - 1 {
        let hue = (start_hue_fp + i as i32 * hue_step) / HUE_SCALE + FULL_CIRCLE;
        leds.set(i, rainbow_color(hue));
    }
    leds.set(steps - 1, rainbow_color(end_hue));
}

fn rainbow_color(hue: i32) -> Rgb {
    Hsl::new(hue, RAINBOW_SATURATION, RAINBOW_LUMINANCE).to_rgb()
}

impl<O: OutputDriver, D: DelayNs, const MAX_LEDS: usize> TileDisplay<O, D, MAX_LEDS> {
    /// Paint a rainbow from `start_hue` to `end_hue` across the chain and show it
    pub fn show_rainbow(&mut self, start_hue: i32, end_hue: i32) {
        fill_rainbow(self.buffer_mut(), start_hue, end_hue);
        self.show();
    }
}
