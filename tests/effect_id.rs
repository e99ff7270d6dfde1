mod tests {
    use tab5_led_panel::EffectId;

    const ALL: [EffectId; 6] = [
        EffectId::Rainbow,
        EffectId::Fire,
        EffectId::Meteor,
        EffectId::Scanner,
        EffectId::Off,
        EffectId::SolidColor,
    ];

    #[test]
    fn test_effect_id_from_raw() {
        assert_eq!(EffectId::from_raw(0), Some(EffectId::Rainbow));
        assert_eq!(EffectId::from_raw(1), Some(EffectId::Fire));
        assert_eq!(EffectId::from_raw(4), Some(EffectId::Off));
        assert_eq!(EffectId::from_raw(5), Some(EffectId::SolidColor));
        assert_eq!(EffectId::from_raw(6), None);
    }

    #[test]
    fn test_effect_id_raw_values_match_repr() {
        for id in ALL {
            assert_eq!(EffectId::from_raw(id as u8), Some(id));
        }
    }

    #[test]
    fn test_effect_id_names() {
        assert_eq!(EffectId::Scanner.as_str(), "scanner");
        assert_eq!(EffectId::parse_from_str("meteor"), Some(EffectId::Meteor));
        assert_eq!(
            EffectId::parse_from_str("solid_color"),
            Some(EffectId::SolidColor)
        );
        assert_eq!(EffectId::parse_from_str("aurora"), None);
        for id in ALL {
            assert_eq!(EffectId::parse_from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_effect_id_labels() {
        assert_eq!(EffectId::Fire.label(), "Fire");
        assert_eq!(EffectId::Off.label(), "OFF");
    }
}
