//! Palette lookups used by the generators
//!
//! Both lookups take an 8-bit position and return a fully saturated color.

use crate::{
    color::Rgb,
    math8::scale8_video,
};

/// Width of one wheel segment in hue units
const SEGMENT: u8 = 85;

/// Three-segment piecewise-linear color wheel
///
/// Each segment spans 85 hue units and blends linearly between two primaries:
/// blue to red, red to green, green back to blue. The last segment is one unit
/// short of the others, so both `0` and `255` land on pure blue.
pub const fn color_wheel(hue: u8) -> Rgb {
    if hue < SEGMENT {
        let step = hue * 3;
        Rgb {
            r: step,
            g: 0,
            b: 255 - step,
        }
    } else if hue < SEGMENT * 2 {
        let step = (hue - SEGMENT) * 3;
        Rgb {
            r: 255 - step,
            g: step,
            b: 0,
        }
    } else {
        let step = (hue - SEGMENT * 2) * 3;
        Rgb {
            r: 0,
            g: 255 - step,
            b: step,
        }
    }
}

/// Map a heat value (0-255) to a black-body style color
///
/// The heat is first compressed into 0-191, which splits into three 64-step
/// ramps: black to red, red to yellow, yellow to white. The low 6 bits of the
/// compressed value select the position inside the ramp.
pub const fn heat_color(heat: u8) -> Rgb {
    let t192 = scale8_video(heat, 191);
    let ramp = (t192 & 0x3F) << 2;

    if t192 & 0x80 != 0 {
        Rgb {
            r: 255,
            g: 255,
            b: ramp,
        }
    } else if t192 & 0x40 != 0 {
        Rgb {
            r: 255,
            g: ramp,
            b: 0,
        }
    } else {
        Rgb { r: ramp, g: 0, b: 0 }
    }
}
