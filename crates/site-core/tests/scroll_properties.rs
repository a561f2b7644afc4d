use proptest::prelude::*;
use site_core::{HeroParallax, NavState, NavVariant, SCROLL_THRESHOLD};

proptest! {
    #[test]
    fn prop_scrolled_iff_past_threshold(y in -1_000.0f64..10_000.0) {
        let mut nav = NavState::new();
        nav.on_scroll(y);
        prop_assert_eq!(nav.scrolled, y >= SCROLL_THRESHOLD);
        prop_assert_eq!(nav.is_opaque(NavVariant::Overlay), y >= SCROLL_THRESHOLD);
    }

    #[test]
    fn prop_menu_toggle_alternates(
        scrolls in proptest::collection::vec(0.0f64..2_000.0, 1..20),
    ) {
        let mut nav = NavState::new();
        for (i, y) in scrolls.iter().enumerate() {
            let before = nav.menu_open;
            nav.on_scroll(*y);
            nav.toggle_menu();
            prop_assert_eq!(nav.menu_open, !before);
            prop_assert_eq!(nav.menu_open, i % 2 == 0);
        }
    }

    #[test]
    fn prop_hero_offset_monotonic_and_bounded(a in 0.0f64..=500.0, b in 0.0f64..=500.0) {
        for hero in [HeroParallax::inner_page(), HeroParallax::video_hero()] {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (f_lo, f_hi) = (hero.frame(lo), hero.frame(hi));
            prop_assert!(f_lo.translate_y <= f_hi.translate_y);

            let max = hero.offset.map(|m| m.output.1).unwrap_or_default();
            for frame in [f_lo, f_hi] {
                prop_assert!((0.0..=max).contains(&frame.translate_y));
                prop_assert!((0.0..=1.0).contains(&frame.opacity));
            }
        }
    }

    #[test]
    fn prop_frames_bounded_outside_domain(y in -5_000.0f64..50_000.0) {
        let frame = HeroParallax::inner_page().frame(y);
        prop_assert!((0.0..=150.0).contains(&frame.translate_y));
        prop_assert!((0.0..=1.0).contains(&frame.opacity));
    }
}
