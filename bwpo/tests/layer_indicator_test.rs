pub mod common;

mod indicator_test {
    use bwpo::config::{IndicatorConfig, LED_COUNT};
    use bwpo::indicator::{IndicatorState, LayerIndicator, layer_color};
    use bwpo::keymap::LayerState;
    use bwpo::layout::{LED_FLAGS, Layer, led_index};
    use bwpo::led_indicator::LedIndicator;
    use bwpo::smart_leds::RGB8;
    use bwpo::smart_leds::hsv::{Hsv, hsv2rgb};

    const BACKGROUND: RGB8 = RGB8 { r: 3, g: 4, b: 5 };

    fn render(state: IndicatorState) -> [RGB8; LED_COUNT] {
        let indicator = LayerIndicator::new(&LED_FLAGS, IndicatorConfig::default());
        let mut leds = [BACKGROUND; LED_COUNT];
        let handled = indicator.render(&mut leds, 0, LED_COUNT as u8, &state);
        assert!(!handled, "the default indicators must be skipped");
        leds
    }

    fn layer_rgb(layer: Layer, brightness: u8) -> RGB8 {
        let hsv = layer_color(layer.index()).unwrap();
        let val = hsv.val.max(brightness.saturating_add(22));
        hsv2rgb(Hsv { val, ..hsv })
    }

    #[test]
    fn test_every_layer_color() {
        for index in 1..7u8 {
            let layer = Layer::from_index(index).unwrap();
            let leds = render(IndicatorState {
                highest_layer: index,
                brightness: 80,
                ..Default::default()
            });
            assert!(leds.iter().all(|led| *led == layer_rgb(layer, 80)), "layer {:?}", layer);
        }
    }

    #[test]
    fn test_highest_layer_from_layer_state() {
        let state = LayerState::default()
            .with_layer(Layer::Navigation.index())
            .with_layer(Layer::Numeral.index());
        let leds = render(IndicatorState {
            highest_layer: state.highest_layer(),
            brightness: 10,
            ..Default::default()
        });
        assert_eq!(leds[0], layer_rgb(Layer::Numeral, 10));
    }

    #[test]
    fn test_base_layer_without_caps_lock() {
        let leds = render(IndicatorState {
            brightness: 255,
            ..Default::default()
        });
        assert!(leds.iter().all(|led| *led == BACKGROUND));
    }

    #[test]
    fn test_caps_lock_overrides_modifier_leds_only() {
        let brightness = 120;
        let leds = render(IndicatorState {
            highest_layer: Layer::Symbols.index(),
            host_leds: LedIndicator::CAPS_LOCK,
            brightness,
        });

        let caps = RGB8::new(196, 0, 0);
        for (i, led) in leds.iter().enumerate() {
            if LED_FLAGS[i].modifier() {
                assert_eq!(*led, caps, "LED {}", i);
            } else {
                assert_eq!(*led, layer_rgb(Layer::Symbols, brightness), "LED {}", i);
            }
        }
    }

    #[test]
    fn test_caps_lock_marks_home_row_mods() {
        let leds = render(IndicatorState {
            host_leds: LedIndicator::CAPS_LOCK | LedIndicator::NUM_LOCK,
            brightness: 200,
            ..Default::default()
        });

        let red = RGB8::new(255, 0, 0);
        for col in [0, 1, 2, 3, 6, 7, 8, 9] {
            let index = led_index(1, col).unwrap() as usize;
            assert_eq!(leds[index], red);
        }
        let comma = led_index(1, 4).unwrap() as usize;
        assert_eq!(leds[comma], BACKGROUND);
    }

    #[test]
    fn test_split_halves_render_separately() {
        let indicator = LayerIndicator::new(&LED_FLAGS, IndicatorConfig::default());
        let mut leds = [BACKGROUND; LED_COUNT];
        let state = IndicatorState {
            highest_layer: Layer::Media.index(),
            host_leds: LedIndicator::CAPS_LOCK,
            brightness: 0,
        };
        let half = (LED_COUNT / 2) as u8;
        indicator.render(&mut leds, 0, half, &state);

        let left_mod = led_index(1, 0).unwrap() as usize;
        let right_mod = led_index(1, 9).unwrap() as usize;
        assert_eq!(leds[left_mod], RGB8::new(76, 0, 0));
        assert_eq!(leds[right_mod], BACKGROUND);
        assert!(leds[half as usize..].iter().all(|led| *led == BACKGROUND));
    }
}
