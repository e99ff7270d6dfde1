//! Rotating rainbow effect
//!
//! Spreads one full turn of the color wheel over the strip and rotates it by
//! one hue unit per frame.

use super::Effect;
use crate::color::{Rgb, color_wheel};

/// Rainbow cycling effect
#[derive(Debug, Clone, Default)]
pub struct RainbowEffect {
    /// Rotation applied to the whole strip, wraps at 256
    offset: u8,
}

impl RainbowEffect {
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    /// Current rotation offset
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// Wheel position of LED `index` on a strip of `len` LEDs at the current
    /// offset
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hue_at(&self, index: usize, len: usize) -> u8 {
        if len == 0 {
            return self.offset;
        }
        let spread = (index * 256 / len) % 256;
        (spread as u8).wrapping_add(self.offset)
    }
}

impl Effect for RainbowEffect {
    fn render(&mut self, leds: &mut [Rgb]) {
        let len = leds.len();
        for (index, led) in leds.iter_mut().enumerate() {
            *led = color_wheel(self.hue_at(index, len));
        }
        self.offset = self.offset.wrapping_add(1);
    }
}
