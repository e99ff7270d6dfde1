mod tests {
    use tab5_led_panel::math8::{percent8, qadd8, qsub8, scale8, scale8_video};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_video_keeps_small_values_lit() {
        assert_eq!(scale8_video(1, 1), 1);
        assert_eq!(scale8_video(0, 191), 0);
        assert_eq!(scale8_video(10, 0), 0);
        assert_eq!(scale8_video(255, 191), 191);
        assert_eq!(scale8_video(255, 255), 255);
    }

    #[test]
    fn test_percent8() {
        assert_eq!(percent8(200, 85), 170);
        assert_eq!(percent8(200, 75), 150);
        assert_eq!(percent8(255, 100), 255);
        assert_eq!(percent8(255, 0), 0);
        assert_eq!(percent8(255, 150), 255);
    }

    #[test]
    fn test_saturating_add_sub() {
        assert_eq!(qadd8(200, 100), 255);
        assert_eq!(qadd8(100, 100), 200);
        assert_eq!(qsub8(10, 20), 0);
        assert_eq!(qsub8(30, 20), 10);
    }
}
