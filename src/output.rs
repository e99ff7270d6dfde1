//! LED strip output stage
//!
//! Applies the global brightness scalar on the way out, so the generators
//! always work with full-scale colors.

use smart_leds::{SmartLedsWrite, brightness};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{OutputDriver, color::Rgb};

/// [`OutputDriver`] for any `smart-leds` strip driver
pub struct SmartLedsOutput<W> {
    writer: W,
    brightness: u8,
}

impl<W> SmartLedsOutput<W> {
    /// Wrap a strip driver, starting at full brightness
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            brightness: 255,
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        let pixels = brightness(colors.iter().copied(), self.brightness);
        if self.writer.write(pixels).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.write] strip write failed");
        }
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}
