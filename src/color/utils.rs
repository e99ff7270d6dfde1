use embedded_graphics::pixelcolor::{Rgb565, Rgb888};

use crate::{
    color::Rgb,
    math8::{percent8, scale8},
};

/// Fill the whole frame with one color
pub fn fill(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}

/// Turn every LED off
pub fn clear(leds: &mut [Rgb]) {
    fill(leds, Rgb::default());
}

/// Fade every LED to `percent` of its current value
///
/// Used by the trail effects, which keep the previous frame around.
pub fn fade_by(leds: &mut [Rgb], percent: u8) {
    for led in leds {
        led.r = percent8(led.r, percent);
        led.g = percent8(led.g, percent);
        led.b = percent8(led.b, percent);
    }
}

/// Scale a color by a brightness value (0-255)
#[inline]
pub const fn scaled(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, brightness),
        g: scale8(color.g, brightness),
        b: scale8(color.b, brightness),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Convert a strip color to the display's pixel format
pub fn to_rgb565(color: Rgb) -> Rgb565 {
    Rgb565::from(Rgb888::new(color.r, color.g, color.b))
}
