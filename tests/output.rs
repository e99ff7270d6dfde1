mod tests {
    use tab5_led_panel::{OutputDriver, Rgb, SmartLedsOutput};

    use smart_leds::SmartLedsWrite;

    #[derive(Default)]
    struct FakeStrip {
        frames: Vec<Vec<Rgb>>,
        fail: bool,
    }

    impl SmartLedsWrite for FakeStrip {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn test_full_brightness_passes_colors_through() {
        let mut output = SmartLedsOutput::new(FakeStrip::default());
        assert_eq!(output.brightness(), 255);

        let colors = [Rgb::new(255, 128, 0), Rgb::new(1, 2, 3)];
        output.write(&colors);
        assert_eq!(output.writer().frames, vec![colors.to_vec()]);
    }

    #[test]
    fn test_brightness_scales_written_colors() {
        let mut output = SmartLedsOutput::new(FakeStrip::default());
        output.set_brightness(0);
        output.write(&[Rgb::new(255, 255, 255)]);

        output.set_brightness(128);
        output.write(&[Rgb::new(200, 0, 100)]);

        let frames = &output.writer().frames;
        assert_eq!(frames[0], vec![Rgb::new(0, 0, 0)]);
        let half = frames[1][0];
        assert!(half.r > 90 && half.r < 110);
        assert_eq!(half.g, 0);
        assert!(half.b > 45 && half.b < 55);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let strip = FakeStrip {
            fail: true,
            ..FakeStrip::default()
        };
        let mut output = SmartLedsOutput::new(strip);
        output.write(&[Rgb::new(1, 1, 1)]);
        assert!(output.into_inner().frames.is_empty());
    }
}
