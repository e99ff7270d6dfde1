//! Knight-Rider style scanner
//!
//! A red bar bounces between the strip ends, leaving a short fading trail.

use super::Effect;
use crate::color::{Rgb, fade_by};

/// Bar width in LEDs
const BAR: i32 = 8;
/// Brightness lost per bar pixel behind the head
const BAR_STEP: i32 = 30;
/// LEDs travelled per frame
const SPEED: i32 = 4;
/// Share of the previous frame kept, in percent
const FADE_PERCENT: u8 = 75;

/// Scanner effect
#[derive(Debug, Clone)]
pub struct ScannerEffect {
    position: i32,
    direction: i32,
}

impl Default for ScannerEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl ScannerEffect {
    pub const fn new() -> Self {
        Self {
            position: 0,
            direction: SPEED,
        }
    }

    /// Head position, always within the strip
    pub const fn position(&self) -> i32 {
        self.position
    }

    /// Signed travel per frame
    pub const fn direction(&self) -> i32 {
        self.direction
    }
}

impl Effect for ScannerEffect {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    fn render(&mut self, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }
        let last = leds.len() as i32 - 1;
        self.position = self.position.clamp(0, last);

        fade_by(leds, FADE_PERCENT);

        let trail = -self.direction.signum();
        for step in 0..BAR {
            let index = self.position + step * trail;
            if index < 0 || index > last {
                continue;
            }
            leds[index as usize] = Rgb {
                r: (255 - step * BAR_STEP) as u8,
                g: 0,
                b: 0,
            };
        }

        self.position += self.direction;
        if self.position >= last {
            self.position = last;
            self.direction = -SPEED;
        } else if self.position <= 0 {
            self.position = 0;
            self.direction = SPEED;
        }
    }
}
