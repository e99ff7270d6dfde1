#![no_std]

pub mod channel;
pub mod color;
pub mod effect;
pub mod frame_scheduler;
pub mod input;
pub mod math8;
pub mod output;
pub mod ui;

pub use channel::{TouchChannel, TouchReceiver, TouchSender};
pub use color::Rgb;
pub use effect::{EffectBank, EffectId};
pub use frame_scheduler::{FrameResult, FrameScheduler, PanelConfig};
pub use input::{TouchEvent, TouchInput, TouchPhase};
pub use output::SmartLedsOutput;
pub use ui::{GraphicsView, PanelLayout, PanelView, UiState};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);

    /// Set the global brightness scalar applied to every written color
    fn set_brightness(&mut self, brightness: u8);
}
