//! Touch dispatch
//!
//! Turns touch samples into [`UiState`] changes, and reports the side effects
//! the scheduler has to carry out on the strip and the display.

use embedded_graphics::geometry::Point;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{PanelLayout, UiState};
use crate::{
    color::Rgb,
    effect::EffectId,
    input::{TouchEvent, TouchPhase},
};

/// Region hit by a touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Color swatch, by index into `PanelLayout::swatches`
    Swatch(usize),
    /// Effect button, by index into `PanelLayout::effect_buttons`
    EffectButton(usize),
    Slider,
    OffButton,
}

/// Find the region under `point`
///
/// Regions are tested in a fixed priority order: color swatches, effect
/// buttons, the slider, then the off button. The first match wins.
pub fn hit_test(layout: &PanelLayout, point: Point) -> Option<HitTarget> {
    if let Some(index) = layout.swatches.iter().position(|s| s.contains(point)) {
        return Some(HitTarget::Swatch(index));
    }
    if let Some(index) = layout
        .effect_buttons
        .iter()
        .position(|b| b.contains(point))
    {
        return Some(HitTarget::EffectButton(index));
    }
    if layout.slider.contains(point) {
        return Some(HitTarget::Slider);
    }
    if layout.off_button.contains(point) {
        return Some(HitTarget::OffButton);
    }
    None
}

/// Side effects from a dispatched touch that the scheduler should apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiEffects {
    /// Newly selected effect
    pub selected: Option<EffectId>,
    /// New brightness for the strip driver
    pub brightness: Option<u8>,
    /// Color picked from a swatch, to be shown on the strip right away
    pub picked_color: Option<Rgb>,
}

impl UiEffects {
    /// Check if any effects need to be applied
    pub const fn has_effects(&self) -> bool {
        self.selected.is_some() || self.brightness.is_some() || self.picked_color.is_some()
    }
}

/// Applies touch samples to the UI state
///
/// Buttons and swatches react to the press edge only. A press on the slider
/// captures it: held samples keep adjusting brightness until release, even if
/// the finger drifts off the track.
#[derive(Debug, Clone, Default)]
pub struct TouchDispatcher {
    dragging_slider: bool,
}

impl TouchDispatcher {
    pub const fn new() -> Self {
        Self {
            dragging_slider: false,
        }
    }

    /// Whether a slider drag is in progress
    pub const fn is_dragging(&self) -> bool {
        self.dragging_slider
    }

    /// Apply one touch sample to `state`
    pub fn dispatch(
        &mut self,
        layout: &PanelLayout,
        state: &mut UiState,
        event: TouchEvent,
    ) -> UiEffects {
        let mut effects = UiEffects::default();

        match event.phase {
            TouchPhase::Pressed => {
                self.dragging_slider = false;
                match hit_test(layout, event.point) {
                    Some(HitTarget::Swatch(index)) => {
                        let color = layout.swatches[index].color;
                        Self::pick_color(state, color, &mut effects);
                    }
                    Some(HitTarget::EffectButton(index)) => {
                        let effect = layout.effect_buttons[index].effect;
                        Self::select(state, effect, &mut effects);
                    }
                    Some(HitTarget::Slider) => {
                        self.dragging_slider = true;
                        let brightness = layout.slider.brightness_at(event.point.x);
                        Self::set_brightness(state, brightness, &mut effects);
                    }
                    Some(HitTarget::OffButton) => {
                        Self::select(state, EffectId::Off, &mut effects);
                    }
                    None => {}
                }
            }
            TouchPhase::Held => {
                if self.dragging_slider {
                    let brightness = layout.slider.brightness_at(event.point.x);
                    Self::set_brightness(state, brightness, &mut effects);
                }
            }
            TouchPhase::Released => {
                self.dragging_slider = false;
            }
        }

        effects
    }

    fn select(state: &mut UiState, effect: EffectId, effects: &mut UiEffects) {
        if state.effect == effect {
            return;
        }
        state.effect = effect;
        effects.selected = Some(effect);
    }

    /// Color and selection change together, the strip never shows one
    /// without the other
    fn pick_color(state: &mut UiState, color: Rgb, effects: &mut UiEffects) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[TouchDispatcher.pick_color] color #{:02x}{:02x}{:02x}",
            color.r, color.g, color.b
        );
        state.solid_color = color;
        effects.picked_color = Some(color);
        Self::select(state, EffectId::SolidColor, effects);
    }

    fn set_brightness(state: &mut UiState, brightness: u8, effects: &mut UiEffects) {
        if state.brightness == brightness {
            return;
        }
        state.brightness = brightness;
        effects.brightness = Some(brightness);
    }
}
