//! Frame scheduling and the panel's main loop.
//!
//! Every frame, in order: poll at most one touch sample, apply the resulting
//! UI change, render the active effect and push the strip. UI changes are
//! applied before the frame is rendered, so a tap shows up within one frame.
//!
//! [`FrameScheduler::tick`] is portable and leaves the waiting to the caller;
//! [`FrameScheduler::run`] is the firmware loop that sleeps with
//! `embassy-time`.

use embassy_time::{Duration, Instant, Timer};
use rand::{RngCore, SeedableRng, rngs::SmallRng};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    OutputDriver,
    color::Rgb,
    effect::{EffectBank, EffectId},
    input::{TouchEvent, TouchInput},
    ui::{PanelLayout, PanelView, TouchDispatcher, UiEffects, UiState},
};

/// Default target frame rate (50 FPS).
pub const DEFAULT_FPS: u32 = 50;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Seed of the fire effect's random source unless configured otherwise.
pub const DEFAULT_FIRE_SEED: u64 = 0x7AB5_F12E;

/// Startup configuration of the panel
#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub frame_duration: Duration,
    pub effect: EffectId,
    pub brightness: u8,
    pub color: Rgb,
    pub fire_seed: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        let state = UiState::default();
        Self {
            frame_duration: DEFAULT_FRAME_DURATION,
            effect: state.effect,
            brightness: state.brightness,
            color: state.solid_color,
            fire_seed: DEFAULT_FIRE_SEED,
        }
    }
}

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Single-threaded panel loop
///
/// Owns the strip buffer, the UI state and every effect's private state;
/// nothing else mutates them.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler: FrameScheduler<_, _, _, 60> =
///     FrameScheduler::new(&PanelConfig::default(), PanelLayout::tab5(), strip, touch, view);
/// scheduler.begin();
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<O, I, V, const N: usize, R: RngCore = SmallRng> {
    // External collaborators
    output: O,
    input: I,
    view: V,
    layout: PanelLayout,

    // Internal state
    state: UiState,
    dispatcher: TouchDispatcher,
    effects: EffectBank<N, R>,
    frame_buffer: [Rgb; N],
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O, I, V, const N: usize> FrameScheduler<O, I, V, N, SmallRng>
where
    O: OutputDriver,
    I: TouchInput,
    V: PanelView,
{
    /// Create a scheduler whose fire effect is seeded from `config`.
    pub fn new(config: &PanelConfig, layout: PanelLayout, output: O, input: I, view: V) -> Self {
        let rng = SmallRng::seed_from_u64(config.fire_seed);
        Self::with_rng(config, layout, output, input, view, rng)
    }
}

impl<O, I, V, const N: usize, R> FrameScheduler<O, I, V, N, R>
where
    O: OutputDriver,
    I: TouchInput,
    V: PanelView,
    R: RngCore,
{
    /// Create a scheduler with an explicit random source for the fire effect.
    pub fn with_rng(
        config: &PanelConfig,
        layout: PanelLayout,
        output: O,
        input: I,
        view: V,
        rng: R,
    ) -> Self {
        Self {
            output,
            input,
            view,
            layout,
            state: UiState {
                effect: config.effect,
                brightness: config.brightness,
                solid_color: config.color,
            },
            dispatcher: TouchDispatcher::new(),
            effects: EffectBank::new(rng, config.color),
            frame_buffer: [Rgb::default(); N],
            next_frame: Instant::from_millis(0),
            frame_duration: config.frame_duration,
        }
    }

    /// Bring the collaborators in line with the initial state.
    ///
    /// Draws the whole panel and applies the initial brightness. Call once
    /// before the first `tick`.
    pub fn begin(&mut self) {
        self.output.set_brightness(self.state.brightness);
        self.effects.select(self.state.effect, &mut self.frame_buffer);
        if self.view.draw_panel(&self.layout, &self.state).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[FrameScheduler.begin] failed to draw panel");
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        if let Some(event) = self.input.poll() {
            self.process_touch(event);
        }

        self.effects.render(self.state.effect, &mut self.frame_buffer);
        self.output.write(&self.frame_buffer);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Run the panel forever.
    pub async fn run(mut self) -> ! {
        self.begin();
        loop {
            let result = self.tick(Instant::now());
            Timer::after(result.sleep_duration).await;
        }
    }

    /// Apply one touch sample to the UI state and its collaborators
    fn process_touch(&mut self, event: TouchEvent) {
        let previous = self.state;
        let effects = self
            .dispatcher
            .dispatch(&self.layout, &mut self.state, event);
        if effects.has_effects() {
            self.apply_effects(&previous, &effects);
        }
    }

    /// Apply side effects from touch dispatch
    fn apply_effects(&mut self, previous: &UiState, effects: &UiEffects) {
        if let Some(brightness) = effects.brightness {
            #[cfg(feature = "esp32-log")]
            println!("[FrameScheduler.apply_effects] brightness {}", brightness);
            self.output.set_brightness(brightness);
            if self.view.draw_brightness(&self.layout, brightness).is_err() {
                #[cfg(feature = "esp32-log")]
                println!("[FrameScheduler.apply_effects] failed to draw slider");
            }
        }

        if let Some(color) = effects.picked_color {
            // Rendered and flushed by the current frame
            self.effects.solid.set_color(color);
        }

        if let Some(effect) = effects.selected {
            self.effects.select(effect, &mut self.frame_buffer);
        }

        if selection_changed(previous, &self.state)
            && self
                .view
                .draw_selection(&self.layout, previous, &self.state)
                .is_err()
        {
            #[cfg(feature = "esp32-log")]
            println!("[FrameScheduler.apply_effects] failed to draw selection");
        }
    }

    /// Current UI state
    pub const fn state(&self) -> &UiState {
        &self.state
    }

    /// Strip contents as last rendered
    pub const fn leds(&self) -> &[Rgb; N] {
        &self.frame_buffer
    }

    pub const fn effects(&self) -> &EffectBank<N, R> {
        &self.effects
    }

    pub const fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }
}

/// Whether the highlighted region differs between two states
fn selection_changed(previous: &UiState, current: &UiState) -> bool {
    previous.effect != current.effect
        || (current.effect == EffectId::SolidColor
            && previous.solid_color != current.solid_color)
}
