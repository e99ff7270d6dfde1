//! Touch panel model
//!
//! Geometry of the on-screen controls, the UI state they drive, touch
//! dispatch and the display seam that redraws the panel on state changes.

mod dispatch;
mod layout;
mod state;
mod view;

pub use dispatch::{HitTarget, TouchDispatcher, UiEffects, hit_test};
pub use layout::{
    ColorSwatch, EFFECT_BUTTON_COUNT, EffectButton, OffButton, PanelLayout, SCREEN_HEIGHT,
    SCREEN_WIDTH, SWATCH_COUNT, Slider,
};
pub use state::UiState;
pub use view::{GraphicsView, PanelView};
