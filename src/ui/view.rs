//! Display seam
//!
//! The panel is drawn in full once at startup. After that only the regions a
//! state change affects are redrawn, never on a per-frame basis.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{
        Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle,
        StrokeAlignment,
    },
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use heapless::String;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{ColorSwatch, PanelLayout, UiState};
use crate::{color::to_rgb565, effect::EffectId};

const BACKGROUND: Rgb565 = Rgb565::BLACK;
const TEXT: Rgb565 = Rgb565::WHITE;
const BUTTON_FILL: Rgb565 = Rgb565::new(5, 10, 5);
const OFF_FILL: Rgb565 = Rgb565::new(14, 0, 0);
const BORDER: Rgb565 = Rgb565::new(12, 24, 12);
const HIGHLIGHT: Rgb565 = Rgb565::YELLOW;
const TRACK: Rgb565 = Rgb565::new(8, 16, 8);
const TRACK_FILL: Rgb565 = Rgb565::new(0, 40, 31);
const KNOB: Rgb565 = Rgb565::WHITE;

const CORNER: Size = Size::new(16, 16);
const BORDER_WIDTH: u32 = 4;
const RING_GAP: u32 = 8;
const KNOB_DIAMETER: u32 = 40;

/// Display collaborator
///
/// Implement this trait to render the panel on a specific display.
pub trait PanelView {
    type Error;

    /// Draw the whole panel
    fn draw_panel(&mut self, layout: &PanelLayout, state: &UiState) -> Result<(), Self::Error>;

    /// Move the selection highlight from `previous` to `current`
    fn draw_selection(
        &mut self,
        layout: &PanelLayout,
        previous: &UiState,
        current: &UiState,
    ) -> Result<(), Self::Error>;

    /// Redraw the brightness slider
    fn draw_brightness(&mut self, layout: &PanelLayout, brightness: u8)
    -> Result<(), Self::Error>;
}

/// [`PanelView`] on top of any `embedded-graphics` draw target
pub struct GraphicsView<D> {
    target: D,
}

impl<D> GraphicsView<D> {
    pub const fn new(target: D) -> Self {
        Self { target }
    }

    pub const fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D: DrawTarget<Color = Rgb565>> GraphicsView<D> {
    fn draw_label(&mut self, label: &str, center: Point) -> Result<(), D::Error> {
        let character_style = MonoTextStyle::new(&FONT_10X20, TEXT);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(label, center, character_style, text_style)
            .draw(&mut self.target)?;
        Ok(())
    }

    fn draw_button(
        &mut self,
        bounds: Rectangle,
        label: &str,
        fill: Rgb565,
        highlighted: bool,
    ) -> Result<(), D::Error> {
        RoundedRectangle::with_equal_corners(bounds, CORNER)
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(&mut self.target)?;
        self.draw_button_border(bounds, highlighted)?;
        self.draw_label(label, bounds.center())
    }

    fn draw_button_border(&mut self, bounds: Rectangle, highlighted: bool) -> Result<(), D::Error> {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(if highlighted { HIGHLIGHT } else { BORDER })
            .stroke_width(BORDER_WIDTH)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        RoundedRectangle::with_equal_corners(bounds, CORNER)
            .into_styled(style)
            .draw(&mut self.target)
    }

    fn draw_swatch_ring(&mut self, swatch: &ColorSwatch, highlighted: bool) -> Result<(), D::Error> {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(if highlighted { TEXT } else { BACKGROUND })
            .stroke_width(BORDER_WIDTH)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        Circle::with_center(swatch.center, (swatch.radius + RING_GAP) * 2)
            .into_styled(style)
            .draw(&mut self.target)
    }

    /// Draw or erase the highlight of the region `state` selects
    fn draw_highlight(
        &mut self,
        layout: &PanelLayout,
        state: &UiState,
        highlighted: bool,
    ) -> Result<(), D::Error> {
        match state.effect {
            EffectId::SolidColor => {
                if let Some(swatch) = layout.swatch_for(state.solid_color) {
                    self.draw_swatch_ring(swatch, highlighted)?;
                }
            }
            EffectId::Off => {
                self.draw_button_border(layout.off_button.bounds, highlighted)?;
            }
            effect => {
                if let Some(button) = layout.effect_button(effect) {
                    self.draw_button_border(button.bounds, highlighted)?;
                }
            }
        }
        Ok(())
    }
}

impl<D: DrawTarget<Color = Rgb565>> PanelView for GraphicsView<D> {
    type Error = D::Error;

    fn draw_panel(&mut self, layout: &PanelLayout, state: &UiState) -> Result<(), Self::Error> {
        self.target.clear(BACKGROUND)?;

        let width = self.target.bounding_box().size.width;
        #[allow(clippy::cast_possible_wrap)]
        self.draw_label(layout.title, Point::new(width as i32 / 2, 40))?;

        for button in &layout.effect_buttons {
            self.draw_button(button.bounds, button.label(), BUTTON_FILL, false)?;
        }

        for swatch in &layout.swatches {
            swatch
                .circle()
                .into_styled(PrimitiveStyle::with_fill(to_rgb565(swatch.color)))
                .draw(&mut self.target)?;
        }

        let off = layout.off_button;
        self.draw_button(off.bounds, off.label(), OFF_FILL, false)?;

        let track = layout.slider.track;
        let character_style = MonoTextStyle::new(&FONT_10X20, TEXT);
        Text::with_baseline(
            "Brightness",
            Point::new(track.top_left.x, track.top_left.y - 45),
            character_style,
            Baseline::Bottom,
        )
        .draw(&mut self.target)?;

        self.draw_highlight(layout, state, true)?;
        self.draw_brightness(layout, state.brightness)
    }

    fn draw_selection(
        &mut self,
        layout: &PanelLayout,
        previous: &UiState,
        current: &UiState,
    ) -> Result<(), Self::Error> {
        self.draw_highlight(layout, previous, false)?;
        self.draw_highlight(layout, current, true)
    }

    fn draw_brightness(
        &mut self,
        layout: &PanelLayout,
        brightness: u8,
    ) -> Result<(), Self::Error> {
        let slider = layout.slider;
        let track = slider.track;
        let hit_area = slider.hit_area();

        // Erase knob and value text
        Rectangle::new(
            hit_area.top_left,
            Size::new(hit_area.size.width + 120, hit_area.size.height),
        )
        .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
        .draw(&mut self.target)?;

        RoundedRectangle::with_equal_corners(track, CORNER)
            .into_styled(PrimitiveStyle::with_fill(TRACK))
            .draw(&mut self.target)?;

        let knob_x = slider.knob_x(brightness);
        #[allow(clippy::cast_sign_loss)]
        let filled = Rectangle::new(
            track.top_left,
            Size::new((knob_x - track.top_left.x) as u32, track.size.height),
        );
        RoundedRectangle::with_equal_corners(filled, CORNER)
            .into_styled(PrimitiveStyle::with_fill(TRACK_FILL))
            .draw(&mut self.target)?;

        Circle::with_center(Point::new(knob_x, track.center().y), KNOB_DIAMETER)
            .into_styled(PrimitiveStyle::with_fill(KNOB))
            .draw(&mut self.target)?;

        // A u8 has at most three digits
        let mut value: String<3> = String::new();
        if write!(value, "{brightness}").is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[GraphicsView.draw_brightness] failed to format {}", brightness);
        }
        #[allow(clippy::cast_possible_wrap)]
        let value_x = hit_area.top_left.x + hit_area.size.width as i32 + 60;
        self.draw_label(&value, Point::new(value_x, track.center().y))
    }
}
