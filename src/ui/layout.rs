//! Panel geometry
//!
//! All regions are fixed at startup. Which region is highlighted is derived
//! from [`UiState`](super::UiState), never stored here.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::{Circle, Rectangle},
};

use crate::{
    color::{Rgb, rgb_from_u32},
    effect::EffectId,
};

pub const SCREEN_WIDTH: u32 = 1280;
pub const SCREEN_HEIGHT: u32 = 720;

pub const EFFECT_BUTTON_COUNT: usize = 4;
pub const SWATCH_COUNT: usize = 6;

/// Extra radius accepted around a swatch, fingers are wider than the circle
const SWATCH_HIT_SLOP: u32 = 20;
/// Extra margin accepted around the slider track on every side
const SLIDER_HIT_MARGIN: i32 = 30;

/// Button selecting one of the animated effects
#[derive(Debug, Clone, Copy)]
pub struct EffectButton {
    pub bounds: Rectangle,
    pub effect: EffectId,
}

impl EffectButton {
    pub const fn label(&self) -> &'static str {
        self.effect.label()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }
}

/// Round color picker
#[derive(Debug, Clone, Copy)]
pub struct ColorSwatch {
    pub center: Point,
    pub radius: u32,
    pub color: Rgb,
}

impl ColorSwatch {
    /// Hit test against the enlarged touch radius
    pub fn contains(&self, point: Point) -> bool {
        let dx = i64::from(point.x) - i64::from(self.center.x);
        let dy = i64::from(point.y) - i64::from(self.center.y);
        let reach = i64::from(self.radius + SWATCH_HIT_SLOP);
        dx * dx + dy * dy <= reach * reach
    }

    /// Drawn circle, without the touch slop
    pub fn circle(&self) -> Circle {
        Circle::with_center(self.center, self.radius * 2)
    }
}

/// Horizontal brightness slider
#[derive(Debug, Clone, Copy)]
pub struct Slider {
    pub track: Rectangle,
}

impl Slider {
    /// Touch area: the track plus a margin on every side
    pub fn hit_area(&self) -> Rectangle {
        self.track.offset(SLIDER_HIT_MARGIN)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.hit_area().contains(point)
    }

    /// Map an x coordinate onto 0..=255
    ///
    /// The leftmost track pixel maps to 0 and the rightmost to 255. Anything
    /// beyond either end clamps.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn brightness_at(&self, x: i32) -> u8 {
        let left = self.track.top_left.x;
        let span = self.track.size.width.saturating_sub(1) as i32;
        if span <= 0 || x <= left {
            return 0;
        }
        if x >= left + span {
            return 255;
        }
        ((x - left) * 255 / span) as u8
    }

    /// Knob x coordinate for a brightness value
    #[allow(clippy::cast_possible_wrap)]
    pub fn knob_x(&self, brightness: u8) -> i32 {
        let span = self.track.size.width.saturating_sub(1) as i32;
        self.track.top_left.x + span * i32::from(brightness) / 255
    }
}

/// Button switching the strip off
#[derive(Debug, Clone, Copy)]
pub struct OffButton {
    pub bounds: Rectangle,
}

impl OffButton {
    pub const fn label(&self) -> &'static str {
        EffectId::Off.label()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }
}

/// Every touchable region of the panel
#[derive(Debug, Clone)]
pub struct PanelLayout {
    pub title: &'static str,
    pub effect_buttons: [EffectButton; EFFECT_BUTTON_COUNT],
    pub swatches: [ColorSwatch; SWATCH_COUNT],
    pub slider: Slider,
    pub off_button: OffButton,
}

const fn effect_button(index: i32, effect: EffectId) -> EffectButton {
    EffectButton {
        bounds: Rectangle::new(Point::new(60 + index * 300, 100), Size::new(260, 120)),
        effect,
    }
}

#[allow(clippy::unreadable_literal)]
const fn swatch(index: i32, color: u32) -> ColorSwatch {
    ColorSwatch {
        center: Point::new(190 + index * 180, 330),
        radius: 45,
        color: rgb_from_u32(color),
    }
}

impl PanelLayout {
    /// Landscape layout for the Tab5's 1280x720 panel
    #[allow(clippy::unreadable_literal)]
    pub const fn tab5() -> Self {
        Self {
            title: "Tab5 LED Panel",
            effect_buttons: [
                effect_button(0, EffectId::Rainbow),
                effect_button(1, EffectId::Fire),
                effect_button(2, EffectId::Meteor),
                effect_button(3, EffectId::Scanner),
            ],
            swatches: [
                swatch(0, 0xFF0000), // Red
                swatch(1, 0x00FF00), // Green
                swatch(2, 0x0000FF), // Blue
                swatch(3, 0xFFC800), // Yellow
                swatch(4, 0xB400FF), // Purple
                swatch(5, 0xFFFFFF), // White
            ],
            slider: Slider {
                track: Rectangle::new(Point::new(190, 470), Size::new(900, 24)),
            },
            off_button: OffButton {
                bounds: Rectangle::new(Point::new(540, 580), Size::new(200, 100)),
            },
        }
    }

    /// Button showing `effect`, if it has one
    pub fn effect_button(&self, effect: EffectId) -> Option<&EffectButton> {
        self.effect_buttons.iter().find(|button| button.effect == effect)
    }

    /// Swatch showing `color`, if any
    pub fn swatch_for(&self, color: Rgb) -> Option<&ColorSwatch> {
        self.swatches.iter().find(|swatch| swatch.color == color)
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::tab5()
    }
}
