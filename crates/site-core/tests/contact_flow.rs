use proptest::prelude::*;
use site_core::content::home::BOOK_DEMO;
use site_core::{
    ContactFormMachine, Field, FormPhase, Interest, NavState, Playback, Route, Sitemap,
    TracingSink, RESET_DELAY,
};

#[test]
fn test_home_to_contact_scenario() {
    let mut nav = NavState::new();
    nav.on_scroll(600.0);
    assert!(nav.scrolled);

    assert_eq!(Sitemap::default().resolve(BOOK_DEMO.href), Route::ContactUs);

    let mut form = ContactFormMachine::new();
    form.set_field(Field::Name, "Jane").unwrap();
    form.set_field(Field::Email, "jane@x.com").unwrap();
    form.set_field(Field::Interest, "demo").unwrap();
    form.set_field(Field::Message, "Hi").unwrap();

    form.submit(&TracingSink).unwrap();
    assert_eq!(form.phase(), FormPhase::Submitted);

    // The reset timer fires after RESET_DELAY.
    assert_eq!(RESET_DELAY.as_millis(), 3000);
    form.reset();

    let fields = form.form();
    assert_eq!(form.phase(), FormPhase::Editing);
    for field in [Field::Name, Field::Email, Field::Company, Field::Phone, Field::Message] {
        assert_eq!(fields.get(field), "");
    }
    assert_eq!(fields.interest, Interest::General);
}

#[test]
fn test_empty_required_field_does_not_transition() {
    let mut form = ContactFormMachine::new();
    form.set_field(Field::Name, "Jane").unwrap();
    form.set_field(Field::Message, "Hi").unwrap();

    assert!(form.submit(&TracingSink).is_err());
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.form().name, "Jane");
}

proptest! {
    #[test]
    fn prop_seek_past_midpoint(
        duration in 1.0f64..10_000.0,
        left in 0.0f64..1_000.0,
        width in 1.0f64..2_000.0,
        fraction in 0.5001f64..=1.0,
    ) {
        let mut playback = Playback::new();
        playback.on_loaded(duration);
        let target = playback.seek(left + fraction * width, left, width).unwrap();
        prop_assert!(target > duration / 2.0);
        prop_assert!((target - fraction * duration).abs() < 1e-6 * duration);
    }

    #[test]
    fn prop_seek_without_duration_never_moves(x in -1e6f64..1e6, current in 0.0f64..100.0) {
        let mut playback = Playback::new();
        playback.on_time_update(current);
        prop_assert_eq!(playback.seek(x, 0.0, 300.0), None);
        prop_assert_eq!(playback.current, current);
    }
}
