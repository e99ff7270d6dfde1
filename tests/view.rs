mod tests {
    use std::convert::Infallible;

    use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
    use tab5_led_panel::{
        EffectId, GraphicsView, PanelLayout, PanelView, Rgb, UiState,
        ui::{SCREEN_HEIGHT, SCREEN_WIDTH},
    };

    /// Plain in-memory display
    struct Screen {
        pixels: Vec<Rgb565>,
    }

    impl Screen {
        fn new() -> Self {
            Self {
                pixels: vec![Rgb565::new(1, 1, 1); (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            }
        }

        fn at(&self, x: i32, y: i32) -> Rgb565 {
            self.pixels[(y as u32 * SCREEN_WIDTH + x as u32) as usize]
        }
    }

    impl OriginDimensions for Screen {
        fn size(&self) -> Size {
            Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
        }
    }

    impl DrawTarget for Screen {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0
                    && point.y >= 0
                    && (point.x as u32) < SCREEN_WIDTH
                    && (point.y as u32) < SCREEN_HEIGHT
                {
                    self.pixels[(point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize] = color;
                }
            }
            Ok(())
        }
    }

    fn drawn_panel(state: &UiState) -> GraphicsView<Screen> {
        let mut view = GraphicsView::new(Screen::new());
        let _ = view.draw_panel(&PanelLayout::tab5(), state);
        view
    }

    #[test]
    fn test_panel_clears_background_and_paints_swatches() {
        let view = drawn_panel(&UiState::default());
        let screen = view.target();
        assert_eq!(screen.at(2, 2), Rgb565::BLACK);
        assert_eq!(screen.at(190, 330), Rgb565::RED);
        assert_eq!(screen.at(1090, 330), Rgb565::WHITE);
    }

    #[test]
    fn test_panel_highlights_active_effect() {
        let view = drawn_panel(&UiState::default());
        let screen = view.target();
        // Top border midpoints of the Rainbow and Fire buttons
        assert_eq!(screen.at(190, 101), Rgb565::YELLOW);
        assert_ne!(screen.at(490, 101), Rgb565::YELLOW);
    }

    #[test]
    fn test_selection_moves_highlight() {
        let layout = PanelLayout::tab5();
        let previous = UiState::default();
        let current = UiState {
            effect: EffectId::Fire,
            ..previous
        };
        let mut view = drawn_panel(&previous);
        let _ = view.draw_selection(&layout, &previous, &current);

        let screen = view.target();
        assert_ne!(screen.at(190, 101), Rgb565::YELLOW);
        assert_eq!(screen.at(490, 101), Rgb565::YELLOW);
    }

    #[test]
    fn test_selection_of_off_highlights_off_button() {
        let layout = PanelLayout::tab5();
        let previous = UiState::default();
        let current = UiState {
            effect: EffectId::Off,
            ..previous
        };
        let mut view = drawn_panel(&previous);
        let _ = view.draw_selection(&layout, &previous, &current);
        // Top border midpoint of the off button
        assert_eq!(view.target().at(640, 581), Rgb565::YELLOW);
    }

    #[test]
    fn test_selection_of_color_rings_the_swatch() {
        let layout = PanelLayout::tab5();
        let previous = UiState::default();
        let current = UiState {
            effect: EffectId::SolidColor,
            solid_color: Rgb::new(255, 0, 0),
            ..previous
        };
        let mut view = drawn_panel(&previous);
        let _ = view.draw_selection(&layout, &previous, &current);

        let screen = view.target();
        // Ring sits just outside the swatch circle
        assert_eq!(screen.at(190, 330 - 51), Rgb565::WHITE);
        assert_eq!(screen.at(190, 330), Rgb565::RED);
        assert_ne!(screen.at(190, 101), Rgb565::YELLOW);
    }

    #[test]
    fn test_brightness_moves_knob() {
        let layout = PanelLayout::tab5();
        let mut view = drawn_panel(&UiState::default());
        let _ = view.draw_brightness(&layout, 0);
        // Knob at the left end, track beyond it is unfilled
        assert_eq!(view.target().at(190, 482), Rgb565::WHITE);
        assert_ne!(view.target().at(1000, 482), Rgb565::WHITE);

        let _ = view.draw_brightness(&layout, 255);
        assert_eq!(view.target().at(1089, 482), Rgb565::WHITE);
        assert_ne!(view.target().at(190, 482), Rgb565::WHITE);
    }

    #[test]
    fn test_brightness_value_is_printed_in_full() {
        let layout = PanelLayout::tab5();
        let lit = |view: &GraphicsView<Screen>, xs: core::ops::Range<i32>| {
            xs.flat_map(|x| (460..500).map(move |y| (x, y)))
                .any(|(x, y)| view.target().at(x, y) == Rgb565::WHITE)
        };
        let mut view = drawn_panel(&UiState::default());

        // "255" is centered right of the slider, its first digit starts at 1165
        let _ = view.draw_brightness(&layout, 255);
        assert!(lit(&view, 1165..1175));
        assert!(lit(&view, 1185..1195));

        // A single digit only covers the middle cell
        let _ = view.draw_brightness(&layout, 7);
        assert!(!lit(&view, 1165..1175));
        assert!(lit(&view, 1175..1185));
        assert!(!lit(&view, 1185..1195));
    }
}
