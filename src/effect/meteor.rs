//! Meteor rain effect
//!
//! Three meteors of different colors and speeds sweep along the strip. The
//! previous frame is faded rather than cleared, which leaves glowing trails.

use super::Effect;
use crate::color::{Rgb, fade_by, rgb_from_u32, scaled};

/// Number of meteors in flight
pub const METEOR_COUNT: usize = 3;

/// Tail length in LEDs, also the off-strip margin on both ends
const TAIL: i32 = 12;
/// Brightness lost per tail pixel
const TAIL_STEP: i32 = 20;
/// Share of the previous frame kept, in percent
const FADE_PERCENT: u8 = 85;

#[allow(clippy::unreadable_literal)]
const COLORS: [Rgb; METEOR_COUNT] = [
    rgb_from_u32(0x00A0FF), // Ice blue
    rgb_from_u32(0xFF30B0), // Pink
    rgb_from_u32(0xFFA000), // Amber
];
const SPEEDS: [i32; METEOR_COUNT] = [1, 2, 3];
const STARTS: [i32; METEOR_COUNT] = [0, -4, -8];

/// Meteor effect
#[derive(Debug, Clone)]
pub struct MeteorEffect {
    /// Head position of every meteor, may lie off-strip
    positions: [i32; METEOR_COUNT],
    speeds: [i32; METEOR_COUNT],
}

impl Default for MeteorEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl MeteorEffect {
    pub const fn new() -> Self {
        Self {
            positions: STARTS,
            speeds: SPEEDS,
        }
    }

    /// Head positions, in `-TAIL..len + TAIL`
    pub const fn positions(&self) -> [i32; METEOR_COUNT] {
        self.positions
    }

    /// LEDs travelled per frame by every meteor
    pub const fn speeds(&self) -> [i32; METEOR_COUNT] {
        self.speeds
    }

    /// Position a meteor re-enters from after leaving the strip
    pub const fn restart_position() -> i32 {
        -TAIL
    }
}

impl Effect for MeteorEffect {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    fn render(&mut self, leds: &mut [Rgb]) {
        let len = leds.len() as i32;
        fade_by(leds, FADE_PERCENT);

        for (meteor, position) in self.positions.iter_mut().enumerate() {
            for step in 0..TAIL {
                let index = *position - step;
                if index < 0 || index >= len {
                    continue;
                }
                let brightness = (255 - step * TAIL_STEP) as u8;
                leds[index as usize] = scaled(COLORS[meteor], brightness);
            }

            *position += self.speeds[meteor];
            if *position >= len + TAIL {
                *position = -TAIL;
            }
        }
    }
}
