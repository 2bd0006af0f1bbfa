#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use myrtio_tile_matrix::{
    AnimationMode, ModeFlag, OutputDriver, PinId, Rgb, TileArrangement, TileDisplay,
};

/// Output driver that keeps every frame it is asked to send
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub frames: Vec<Vec<u8>>,
    pub pins: Vec<PinId>,
    pub brightness: Vec<u8>,
}

impl RecordingOutput {
    pub fn last_frame(&self) -> &[u8] {
        self.frames.last().map_or(&[], Vec::as_slice)
    }
}

impl OutputDriver for RecordingOutput {
    fn write(&mut self, frame: &[u8], pin: PinId, brightness: u8) {
        self.frames.push(frame.to_vec());
        self.pins.push(pin);
        self.brightness.push(brightness);
    }
}

/// Delay that returns immediately and remembers the requested pauses
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub pauses_us: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.pauses_us.push(ns / 1_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.pauses_us.push(us);
    }
}

/// Delay that switches the mode flag to idle after a number of pauses
pub struct StoppingDelay<'a> {
    pub flag: &'a ModeFlag,
    pub remaining: usize,
}

impl DelayNs for StoppingDelay<'_> {
    fn delay_ns(&mut self, _ns: u32) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.flag.set(AnimationMode::Idle);
        }
    }
}

pub type TestDisplay = TileDisplay<RecordingOutput, RecordingDelay, 256>;

pub fn display(arrangement: TileArrangement) -> TestDisplay {
    TileDisplay::new(
        RecordingOutput::default(),
        RecordingDelay::default(),
        &myrtio_tile_matrix::DisplayConfig::new(arrangement),
    )
    .expect("arrangement fits into the test buffer")
}

/// Color of the LED at chain `index` in a `(green, red, blue)` frame
pub fn led(frame: &[u8], index: usize) -> Rgb {
    let grb = &frame[index * 3..index * 3 + 3];
    Rgb::new(grb[1], grb[0], grb[2])
}

/// Color at logical `(x, y)` in a recorded frame
pub fn led_at(frame: &[u8], arrangement: &TileArrangement, x: i32, y: i32) -> Rgb {
    let index = arrangement.map_xy(x, y).expect("coordinate inside the grid");
    led(frame, index)
}
