use crate::{color::Rgb, effect::EffectId};

/// User-controlled panel state
///
/// Only touch dispatch mutates it; the scheduler reads it every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    /// Active effect, exactly one at any time
    pub effect: EffectId,
    /// Global strip brightness
    pub brightness: u8,
    /// Fill color used while `effect` is `SolidColor`
    pub solid_color: Rgb,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            effect: EffectId::Rainbow,
            brightness: 128,
            solid_color: Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
        }
    }
}
