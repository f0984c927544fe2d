#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::attributes::*;
    use crate::error::FieldError;
    use crate::parcel::*;
    use crate::signal::*;
    use crate::{Color, Gravity};
    use std::time::Duration;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscriber_can_read() {
        let sig = signal(0);
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let sig_clone = sig.clone();
        sig.subscribe(move |v| {
            seen_clone.borrow_mut().push((*v, sig_clone.get()));
        });

        sig.set(7);
        assert_eq!(*seen.borrow(), vec![(7, 7)]);
    }

    #[test]
    fn test_color_parse_argb_forms() {
        assert_eq!(Color::parse_argb("#F00"), Some(Color(255, 0, 0, 255)));
        assert_eq!(Color::parse_argb("#8F00"), Some(Color(255, 0, 0, 0x88)));
        assert_eq!(Color::parse_argb("#AAAAAA"), Some(Color::DARK_GRAY));
        assert_eq!(Color::parse_argb("#80102030"), Some(Color(0x10, 0x20, 0x30, 0x80)));
        assert_eq!(Color::parse_argb("AAAAAA"), None);
        assert_eq!(Color::parse_argb("#GG0000"), None);
        assert_eq!(Color::parse_argb("#12345"), None);
    }

    #[test]
    fn test_color_argb_int() {
        let c = Color::from_argb(0x80FF0010);
        assert_eq!(c, Color(0xFF, 0x00, 0x10, 0x80));
        assert_eq!(c.to_argb(), 0x80FF0010);
        assert_eq!(c.to_argb_hex(), "#80FF0010");
    }

    #[test]
    fn test_color_serde_uses_hex() {
        let json = serde_json::to_string(&Color::DARK_GRAY).unwrap();
        assert_eq!(json, "\"#FFAAAAAA\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::DARK_GRAY);
        assert!(serde_json::from_str::<Color>("\"gray\"").is_err());
    }

    #[test]
    fn test_color_interpolation_endpoints() {
        let from = Color::DARK_GRAY;
        let to = Color::BLACK;
        assert_eq!(from.interpolate(&to, 0.0), from);
        assert_eq!(from.interpolate(&to, 1.0), to);
        assert_eq!(from.interpolate(&to, 0.5), Color(0x55, 0x55, 0x55, 255));
        // out-of-range fractions clamp
        assert_eq!(from.interpolate(&to, 2.0), to);
    }

    #[test]
    fn test_gravity_parse() {
        assert_eq!(Gravity::parse("start"), Some(Gravity::Start));
        assert_eq!(Gravity::parse("left"), Some(Gravity::Start));
        assert_eq!(Gravity::parse("center_vertical|end"), Some(Gravity::End));
        assert_eq!(Gravity::parse("center"), Some(Gravity::Center));
        assert_eq!(Gravity::parse("17"), Some(Gravity::Center));
        assert_eq!(Gravity::parse("0x800005"), Some(Gravity::End));
        assert_eq!(Gravity::parse("8388611"), Some(Gravity::Start));
        assert_eq!(Gravity::parse("top"), None);
        assert_eq!(Gravity::parse("sideways"), None);
    }

    #[test]
    fn test_attribute_parse_layout_element() {
        let attrs = AttributeSet::parse(
            r##"<com.example.FloatLabelEditText
                android:id="@+id/email"
                app:gravity='end'
                app:textColorHintFocused="#FF336699"
                android:hint="Email"/>"##,
        );
        assert_eq!(attrs.len(), 4);
        assert_eq!(attrs.get("android:hint"), Some("Email"));
        assert_eq!(attrs.get("hint"), Some("Email"));
        assert_eq!(attrs.gravity("gravity"), Some(Gravity::End));
        assert_eq!(
            attrs.color("textColorHintFocused"),
            Some(Color(0x33, 0x66, 0x99, 0xFF))
        );
        assert_eq!(attrs.color("textColorHintUnFocused"), None);
    }

    #[test]
    fn test_attribute_insert_replaces_by_local_name() {
        let attrs = AttributeSet::new()
            .with("app:gravity", "start")
            .with("gravity", "end");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("app:gravity"), Some("end"));
    }

    #[test]
    fn test_attribute_bad_values_read_as_absent() {
        let attrs: AttributeSet = [("textColorHintFocused", "blue"), ("gravity", "top")]
            .into_iter()
            .collect();
        assert_eq!(attrs.color("textColorHintFocused"), None);
        assert_eq!(attrs.gravity("gravity"), None);
    }

    #[test]
    fn test_attribute_parse_skips_unterminated() {
        let attrs = AttributeSet::parse(r#"a="1" b=2 c="3" d="oops"#);
        assert_eq!(attrs.get("a"), Some("1"));
        assert_eq!(attrs.get("b"), None);
        assert_eq!(attrs.get("c"), Some("3"));
        assert_eq!(attrs.get("d"), None);
    }

    struct Counter {
        n: u32,
    }

    impl Persist for Counter {
        const KIND: &'static str = "test.Counter";
        type Saved = u32;

        fn save(&self) -> u32 {
            self.n
        }
        fn restore(&mut self, saved: u32) {
            self.n = saved;
        }
    }

    #[test]
    fn test_parcel_bytes_round_trip() {
        let parcel = Counter { n: 9 }.save_parcel().unwrap();
        assert_eq!(parcel.kind(), "test.Counter");

        let bytes = parcel.to_bytes().unwrap();
        let back = Parcel::from_bytes(&bytes).unwrap();
        assert_eq!(back, parcel);

        let mut c = Counter { n: 0 };
        c.restore_parcel(&back).unwrap();
        assert_eq!(c.n, 9);
    }

    #[test]
    fn test_parcel_kind_mismatch() {
        let parcel = Parcel::pack("other.Widget", &9u32).unwrap();
        let mut c = Counter { n: 1 };
        let err = c.restore_parcel(&parcel).unwrap_err();
        assert!(matches!(
            err,
            FieldError::StateMismatch { ref expected, ref found }
                if expected == "test.Counter" && found == "other.Widget"
        ));
        assert_eq!(c.n, 1);
    }

    #[test]
    fn test_parcel_garbage_bytes() {
        let err = Parcel::from_bytes(b"not json").unwrap_err();
        assert!(matches!(err, FieldError::Decode(_)));
    }

    #[test]
    fn test_animation_deterministic() {
        let clock = TestClock::install();

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0);
        clock.advance(Duration::from_millis(250));
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);

        clock.advance(Duration::from_millis(750));
        let cont = a.update();
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
        reset_clock();
    }

    #[test]
    fn test_animate_between_restarts_from_fixed_endpoint() {
        let clock = TestClock::install();
        let spec = AnimationSpec::tween(Duration::from_millis(100), Easing::Linear);
        let mut a = AnimatedValue::new(0.0f32, spec);

        a.animate_between(0.0, 1.0);
        clock.advance(Duration::from_millis(50));
        a.update();
        a.animate_between(5.0, 6.0);
        assert_eq!(*a.get(), 5.0);
        clock.advance(Duration::from_millis(100));
        assert!(!a.update());
        assert_eq!(*a.get(), 6.0);
        reset_clock();
    }

    #[test]
    fn test_seek_settles_at_one() {
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
        );
        a.animate_between(0.0, 4.0);
        a.seek(0.25);
        assert_eq!(*a.get(), 1.0);
        assert!(a.is_animating());
        a.seek(1.0);
        assert_eq!(*a.get(), 4.0);
        assert!(!a.is_animating());
    }
}
