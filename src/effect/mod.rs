//! Effect system with compile-time known effect variants
//!
//! Every generator keeps its private state in its own struct. The
//! [`EffectBank`] owns one instance of each for the lifetime of the panel, so
//! switching away from an effect and back resumes it where it left off.

mod fire;
mod meteor;
mod rainbow;
mod scanner;
mod solid_color;

pub use fire::FireEffect;
pub use meteor::{MeteorEffect, METEOR_COUNT};
pub use rainbow::RainbowEffect;
use rand::RngCore;
pub use scanner::ScannerEffect;
pub use solid_color::SolidColorEffect;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Rgb, clear};

const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_FIRE: &str = "fire";
const EFFECT_NAME_METEOR: &str = "meteor";
const EFFECT_NAME_SCANNER: &str = "scanner";
const EFFECT_NAME_OFF: &str = "off";
const EFFECT_NAME_SOLID_COLOR: &str = "solid_color";

const EFFECT_ID_RAINBOW: u8 = 0;
const EFFECT_ID_FIRE: u8 = 1;
const EFFECT_ID_METEOR: u8 = 2;
const EFFECT_ID_SCANNER: u8 = 3;
const EFFECT_ID_OFF: u8 = 4;
const EFFECT_ID_SOLID_COLOR: u8 = 5;

pub trait Effect {
    /// Render a single frame
    ///
    /// `leds` still holds the previous frame, trail effects build on it.
    fn render(&mut self, leds: &mut [Rgb]);
}

/// Known effect ids that can be selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Rainbow = EFFECT_ID_RAINBOW,
    Fire = EFFECT_ID_FIRE,
    Meteor = EFFECT_ID_METEOR,
    Scanner = EFFECT_ID_SCANNER,
    Off = EFFECT_ID_OFF,
    SolidColor = EFFECT_ID_SOLID_COLOR,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_FIRE => Self::Fire,
            EFFECT_ID_METEOR => Self::Meteor,
            EFFECT_ID_SCANNER => Self::Scanner,
            EFFECT_ID_OFF => Self::Off,
            EFFECT_ID_SOLID_COLOR => Self::SolidColor,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Fire => EFFECT_NAME_FIRE,
            Self::Meteor => EFFECT_NAME_METEOR,
            Self::Scanner => EFFECT_NAME_SCANNER,
            Self::Off => EFFECT_NAME_OFF,
            Self::SolidColor => EFFECT_NAME_SOLID_COLOR,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_FIRE => Some(Self::Fire),
            EFFECT_NAME_METEOR => Some(Self::Meteor),
            EFFECT_NAME_SCANNER => Some(Self::Scanner),
            EFFECT_NAME_OFF => Some(Self::Off),
            EFFECT_NAME_SOLID_COLOR => Some(Self::SolidColor),
            _ => None,
        }
    }

    /// Caption shown on the panel
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::Fire => "Fire",
            Self::Meteor => "Meteor",
            Self::Scanner => "Scanner",
            Self::Off => "OFF",
            Self::SolidColor => "Color",
        }
    }
}

/// Owner of every generator's private state
///
/// N is the number of LEDs in the strip, R is the random source of the fire
/// effect.
#[derive(Debug, Clone)]
pub struct EffectBank<const N: usize, R: RngCore> {
    pub rainbow: RainbowEffect,
    pub fire: FireEffect<N, R>,
    pub meteor: MeteorEffect,
    pub scanner: ScannerEffect,
    pub solid: SolidColorEffect,
}

impl<const N: usize, R: RngCore> EffectBank<N, R> {
    /// Create a bank with every generator at its initial state
    pub fn new(rng: R, color: Rgb) -> Self {
        Self {
            rainbow: RainbowEffect::new(),
            fire: FireEffect::new(rng),
            meteor: MeteorEffect::new(),
            scanner: ScannerEffect::new(),
            solid: SolidColorEffect::new(color),
        }
    }

    /// Entry hook, called once when `id` becomes the active effect
    ///
    /// Generator state is left untouched. Only `Off` acts here: it clears the
    /// strip so that its per-frame render can be a no-op.
    pub fn select(&mut self, id: EffectId, leds: &mut [Rgb]) {
        #[cfg(feature = "esp32-log")]
        println!("[EffectBank.select] switching to {}", id.as_str());
        if id == EffectId::Off {
            clear(leds);
        }
    }

    /// Render one frame of the given effect
    pub fn render(&mut self, id: EffectId, leds: &mut [Rgb]) {
        match id {
            EffectId::Rainbow => self.rainbow.render(leds),
            EffectId::Fire => self.fire.render(leds),
            EffectId::Meteor => self.meteor.render(leds),
            EffectId::Scanner => self.scanner.render(leds),
            EffectId::SolidColor => self.solid.render(leds),
            EffectId::Off => {}
        }
    }
}
