//! Desktop preview app for tab5-led-panel
//!
//! Simulates the Tab5: the panel is drawn into an in-memory framebuffer by the
//! same `GraphicsView` the firmware uses, mouse presses and drags are fed in as
//! touch samples, and the LED strip is painted below the panel.

use std::convert::Infallible;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use embedded_graphics::{
    pixelcolor::{Rgb565, Rgb888},
    prelude::*,
};
use tab5_led_panel::{
    FrameScheduler, GraphicsView, Instant, OutputDriver, PanelConfig, PanelLayout, Rgb,
    TouchChannel, TouchEvent, TouchReceiver,
    color::scaled,
    ui::{SCREEN_HEIGHT, SCREEN_WIDTH},
};

/// Number of LEDs in the simulated strip
const LED_COUNT: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Touch channel size
const TOUCH_CHANNEL_SIZE: usize = 16;

/// Frames simulated per UI update at most, to avoid catch-up bursts
const MAX_TICKS_PER_UPDATE: usize = 4;

/// Static touch channel between the egui thread and the scheduler
static TOUCH_CHANNEL: TouchChannel<TOUCH_CHANNEL_SIZE> = TouchChannel::new();

type PreviewScheduler = FrameScheduler<
    PreviewStrip,
    TouchReceiver<'static, TOUCH_CHANNEL_SIZE>,
    GraphicsView<Framebuffer>,
    LED_COUNT,
>;

/// RGB888 framebuffer standing in for the Tab5 display
struct Framebuffer {
    pixels: Vec<u8>,
    /// Bumped on every draw call so the texture is only re-uploaded on change
    version: u64,
}

impl Framebuffer {
    fn new() -> Self {
        Self {
            pixels: vec![0; SCREEN_WIDTH as usize * SCREEN_HEIGHT as usize * 3],
            version: 0,
        }
    }

    fn to_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgb(
            [SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize],
            &self.pixels,
        )
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    #[allow(clippy::cast_sign_loss)]
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            let offset = (point.y as usize * SCREEN_WIDTH as usize + point.x as usize) * 3;
            let color = Rgb888::from(color);
            self.pixels[offset] = color.r();
            self.pixels[offset + 1] = color.g();
            self.pixels[offset + 2] = color.b();
        }
        self.version = self.version.wrapping_add(1);
        Ok(())
    }
}

/// LED strip that just remembers what it was sent
struct PreviewStrip {
    leds: Vec<Rgb>,
    brightness: u8,
}

impl OutputDriver for PreviewStrip {
    fn write(&mut self, colors: &[Rgb]) {
        self.leds.clear();
        self.leds.extend_from_slice(colors);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_title("Tab5 LED Panel Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "tab5-led-panel-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The scheduler under preview
    scheduler: PreviewScheduler,
    /// Panel texture, uploaded lazily
    panel_texture: Option<egui::TextureHandle>,
    /// Framebuffer version the texture was built from
    panel_version: u64,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Deadline of the next scheduler frame
    next_frame_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Panel zoom factor
    panel_scale: f32,
    /// Last touch position in panel coordinates, while the mouse is down
    touch: Option<Point>,
}

impl PreviewApp {
    fn new() -> Self {
        let config = PanelConfig::default();
        let strip = PreviewStrip {
            leds: vec![Rgb::default(); LED_COUNT],
            brightness: config.brightness,
        };
        let mut scheduler = PreviewScheduler::new(
            &config,
            PanelLayout::tab5(),
            strip,
            TOUCH_CHANNEL.receiver(),
            GraphicsView::new(Framebuffer::new()),
        );
        scheduler.begin();

        Self {
            scheduler,
            panel_texture: None,
            panel_version: u64::MAX,
            t_ms: 0,
            next_frame_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            panel_scale: 0.6,
            touch: None,
        }
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.next_frame_ms = 0;
        self.last_frame = StdInstant::now();
    }

    /// Toggle playing state
    fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Run every scheduler frame that is due
    fn run_frames(&mut self) {
        for _ in 0..MAX_TICKS_PER_UPDATE {
            if self.t_ms < self.next_frame_ms {
                break;
            }
            let result = self.scheduler.tick(Instant::from_millis(self.t_ms));
            self.next_frame_ms = result.next_deadline.as_millis();
        }
    }

    /// Translate the mouse state over the panel into touch samples
    fn feed_touch(&mut self, response: &egui::Response) {
        let position = response.interact_pointer_pos().map(|pos| {
            let local = (pos - response.rect.min) / self.panel_scale;
            #[allow(clippy::cast_possible_truncation)]
            Point::new(local.x as i32, local.y as i32)
        });

        let event = match (self.touch, response.is_pointer_button_down_on(), position) {
            (None, true, Some(point)) => {
                self.touch = Some(point);
                Some(TouchEvent::pressed(point.x, point.y))
            }
            (Some(_), true, Some(point)) => {
                self.touch = Some(point);
                Some(TouchEvent::held(point.x, point.y))
            }
            (Some(last), false, _) => {
                self.touch = None;
                Some(TouchEvent::released(last.x, last.y))
            }
            _ => None,
        };

        if let Some(event) = event {
            // A full queue only loses a sample, the next one follows shortly
            let _ = TOUCH_CHANNEL.sender().try_send(event);
        }
    }

    fn panel_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        let framebuffer = self.scheduler.view().target();
        if self.panel_version != framebuffer.version {
            self.panel_version = framebuffer.version;
            let image = framebuffer.to_image();
            match &mut self.panel_texture {
                Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
                None => {
                    self.panel_texture =
                        Some(ctx.load_texture("panel", image, egui::TextureOptions::LINEAR));
                }
            }
        }
        self.panel_texture
            .as_ref()
            .map_or(egui::TextureId::default(), egui::TextureHandle::id)
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.run_frames();

        // Request continuous repaint for animation
        ctx.request_repaint();

        let texture = self.panel_texture(ctx);
        let leds: Vec<Rgb> = {
            let strip = self.scheduler.output();
            strip
                .leds
                .iter()
                .map(|led| scaled(*led, strip.brightness))
                .collect()
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            // <PlaybackControls>
            ui.horizontal(|ui| {
                if ui.button("⏮ Reset").clicked() {
                    self.reset_time();
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.toggle_playing();
                }

                ui.add_space(8.0);
                let secs = self.t_ms / 1000;
                let ms = self.t_ms % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));

                ui.add_space(8.0);
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));

                ui.add_space(8.0);
                ui.label("Zoom:");
                ui.add(egui::Slider::new(&mut self.panel_scale, 0.3..=1.0));
            });
            // </PlaybackControls>

            ui.add_space(4.0);

            let state = self.scheduler.state();
            ui.label(format!(
                "Effect: {}  Brightness: {}",
                state.effect.as_str(),
                state.brightness
            ));

            ui.add_space(8.0);

            // === Panel ===
            #[allow(clippy::cast_precision_loss)]
            let panel_size = egui::vec2(
                SCREEN_WIDTH as f32 * self.panel_scale,
                SCREEN_HEIGHT as f32 * self.panel_scale,
            );
            let (response, painter) =
                ui.allocate_painter(panel_size, egui::Sense::click_and_drag());
            painter.image(
                texture,
                response.rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
            self.feed_touch(&response);

            ui.add_space(16.0);

            // === LED Strip ===
            let available_width = ui.available_width();
            let led_pitch = LED_SIZE + LED_GAP;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = leds.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in leds.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(LED_SIZE, LED_SIZE),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
