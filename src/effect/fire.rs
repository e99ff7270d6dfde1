//! Fire simulation effect
//!
//! Classic one-dimensional heat simulation: every cell cools a little each
//! frame, heat drifts up the strip away from index 0, and new sparks ignite
//! near the base.

use rand::{Rng, RngCore};

use super::Effect;
use crate::{
    color::{Rgb, heat_color},
    math8::{qadd8, qsub8},
};

/// Cooling budget, spread over the strip length
const COOLING: usize = 55;
/// Chance (out of 255) of a new spark per frame
const SPARKING: u8 = 120;
/// Sparks ignite in this many cells at the base
const SPARK_CELLS: usize = 7;
/// Minimum heat a spark adds
const SPARK_HEAT: u8 = 160;

/// Fire effect with a per-LED heat map
///
/// N is the capacity of the heat map; longer strips only simulate the first N
/// cells.
#[derive(Debug, Clone)]
pub struct FireEffect<const N: usize, R: RngCore> {
    heat: [u8; N],
    rng: R,
}

impl<const N: usize, R: RngCore> FireEffect<N, R> {
    /// Create a cold fire drawing randomness from `rng`
    pub const fn new(rng: R) -> Self {
        Self { heat: [0; N], rng }
    }

    /// Create a fire that continues from an existing heat map
    pub const fn with_heat(rng: R, heat: [u8; N]) -> Self {
        Self { heat, rng }
    }

    /// Current heat map
    pub const fn heat(&self) -> &[u8; N] {
        &self.heat
    }
}

impl<const N: usize, R: RngCore> Effect for FireEffect<N, R> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, leds: &mut [Rgb]) {
        let len = leds.len().min(N);
        if len == 0 {
            return;
        }
        let Self { heat, rng } = self;
        let heat = &mut heat[..len];

        // Cool down every cell a little
        let max_cooling = (COOLING * 10 / len + 2).min(255) as u8;
        for cell in heat.iter_mut() {
            *cell = qsub8(*cell, rng.gen_range(0..max_cooling));
        }

        // Heat from each cell drifts up and diffuses a little
        for k in (2..len).rev() {
            let drifted =
                (u16::from(heat[k - 1]) + 2 * u16::from(heat[k - 2])) / 3;
            heat[k] = drifted as u8;
        }

        // Randomly ignite new sparks near the bottom
        if rng.gen_range(0..=u8::MAX) < SPARKING {
            let y = rng.gen_range(0..SPARK_CELLS.min(len));
            heat[y] = qadd8(heat[y], rng.gen_range(SPARK_HEAT..=u8::MAX));
        }

        for (led, cell) in leds.iter_mut().zip(heat.iter()) {
            *led = heat_color(*cell);
        }
    }
}
