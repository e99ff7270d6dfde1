mod tests {
    use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
    use tab5_led_panel::color::{
        Rgb, clear, color_wheel, fade_by, fill, heat_color, rgb_from_u32, scaled, to_rgb565,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_color_wheel_segment_boundaries() {
        assert_eq!(color_wheel(0), BLUE);
        assert_eq!(color_wheel(85), RED);
        assert_eq!(color_wheel(170), GREEN);
        assert_eq!(color_wheel(255), BLUE);
    }

    #[test]
    fn test_color_wheel_blends_linearly() {
        assert_eq!(color_wheel(1), Rgb::new(3, 0, 252));
        assert_eq!(color_wheel(84), Rgb::new(252, 0, 3));
        assert_eq!(color_wheel(86), Rgb::new(252, 3, 0));
        assert_eq!(color_wheel(171), Rgb::new(0, 252, 3));

        for hue in 0..=255u8 {
            let color = color_wheel(hue);
            let total = u16::from(color.r) + u16::from(color.g) + u16::from(color.b);
            assert_eq!(total, 255, "hue {hue} is not on the wheel");
        }
    }

    #[test]
    fn test_heat_color_ramp() {
        assert_eq!(heat_color(0), BLACK);
        // Low third: shades of red only
        let ember = heat_color(60);
        assert!(ember.r > 0);
        assert_eq!((ember.g, ember.b), (0, 0));
        // Middle third: red to yellow
        let flame = heat_color(128);
        assert_eq!(flame.r, 255);
        assert_eq!(flame.b, 0);
        // Top third: yellow to white
        let core = heat_color(255);
        assert_eq!((core.r, core.g), (255, 255));
        assert_eq!(core.b, 252);
    }

    #[test]
    fn test_fill_and_clear() {
        let mut leds = [BLACK; 5];
        fill(&mut leds, RED);
        assert_eq!(leds, [RED; 5]);
        clear(&mut leds);
        assert_eq!(leds, [BLACK; 5]);
    }

    #[test]
    fn test_fade_by() {
        let mut leds = [WHITE, Rgb::new(100, 20, 0)];
        fade_by(&mut leds, 85);
        assert_eq!(leds, [Rgb::new(216, 216, 216), Rgb::new(85, 17, 0)]);

        let mut leds = [WHITE; 3];
        for _ in 0..100 {
            fade_by(&mut leds, 75);
        }
        assert_eq!(leds, [BLACK; 3]);
    }

    #[test]
    fn test_scaled() {
        assert_eq!(scaled(WHITE, 255), WHITE);
        assert_eq!(scaled(WHITE, 0), BLACK);
        assert_eq!(scaled(RED, 127), Rgb::new(127, 0, 0));
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF0000), RED);
        assert_eq!(rgb_from_u32(0x00A0FF), Rgb::new(0, 160, 255));
    }

    #[test]
    fn test_to_rgb565() {
        assert_eq!(to_rgb565(WHITE), Rgb565::WHITE);
        assert_eq!(to_rgb565(BLACK), Rgb565::BLACK);
        assert_eq!(to_rgb565(RED), Rgb565::RED);
    }
}
