//! Output adapters for the transmission service

use smart_leds::{SmartLedsWrite, brightness};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{OutputDriver, PinId, color::Rgb};

/// [`OutputDriver`] on top of any `smart-leds` writer
///
/// The writer is already bound to its pin, so the pin passed to
/// [`OutputDriver::write`] is ignored. Brightness is applied while
/// streaming the frame.
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, frame: &[u8], _pin: PinId, level: u8) {
        let colors = frame
            .chunks_exact(3)
            .map(|grb| Rgb::new(grb[1], grb[0], grb[2]));
        let result = self.writer.write(brightness(colors, level));
        #[cfg(feature = "esp32-log")]
        if result.is_err() {
            println!("[SmartLedsOutput.write] failed to write frame");
        }
        #[cfg(not(feature = "esp32-log"))]
        let _ = result;
    }
}
