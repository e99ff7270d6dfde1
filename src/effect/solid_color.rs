//! Solid color fill effect
//!
//! Fills all LEDs with the color picked on the panel.

use super::Effect;
use crate::color::{Rgb, fill};

/// Solid color effect - fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct SolidColorEffect {
    color: Rgb,
}

impl SolidColorEffect {
    /// Create a new solid color effect
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Replace the fill color, takes effect on the next render
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}

impl Effect for SolidColorEffect {
    fn render(&mut self, leds: &mut [Rgb]) {
        fill(leds, self.color);
    }
}
