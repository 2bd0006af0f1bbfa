//! Animation mode shared between an event source and the animation loop
//!
//! An event handler (a button, a message from another task) decides which
//! animation should run; the loop drawing frames polls that decision once
//! per frame. The flag is the only state the two sides share.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::{OutputDriver, display::TileDisplay};

/// Which animation the display should be running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    #[default]
    Idle,
    Rainbow,
    ScrollText,
}

/// Interrupt safe cell holding the current [`AnimationMode`]
///
/// Usually lives in a `static` and is passed by reference to both sides.
pub struct ModeFlag {
    inner: Mutex<Cell<AnimationMode>>,
}

impl ModeFlag {
    pub const fn new(mode: AnimationMode) -> Self {
        Self {
            inner: Mutex::new(Cell::new(mode)),
        }
    }

    pub fn get(&self) -> AnimationMode {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    pub fn set(&self, mode: AnimationMode) {
        critical_section::with(|cs| self.inner.borrow(cs).set(mode));
    }
}

impl Default for ModeFlag {
    fn default() -> Self {
        Self::new(AnimationMode::Idle)
    }
}

impl<O: OutputDriver, D: DelayNs, const MAX_LEDS: usize> TileDisplay<O, D, MAX_LEDS> {
    /// Spin a rainbow until `mode` leaves [`AnimationMode::Rainbow`]
    ///
    /// Paints the ramp once, then every frame checks the flag, rotates the
    /// chain forward by one LED, shows it and pauses for `frame_delay`.
    /// Returns the number of rotated frames.
    ///
    /// The flag must be changed from outside the loop (an interrupt, another
    /// executor) or the call never returns.
    pub fn run_rainbow(
        &mut self,
        mode: &ModeFlag,
        start_hue: i32,
        end_hue: i32,
        frame_delay: Duration,
    ) -> usize {
        self.show_rainbow(start_hue, end_hue);

        let mut frames = 0;
        while mode.get() == AnimationMode::Rainbow {
            self.rotate(1);
            self.show();
            if frame_delay.as_ticks() > 0 {
                self.pause(frame_delay);
            }
            frames += 1;
        }
        frames
    }
}
