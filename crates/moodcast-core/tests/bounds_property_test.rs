use moodcast_core::models::MoodScore;
use moodcast_core::pattern::{Confidence, MoodImpact};
use proptest::prelude::*;

proptest! {
    #[test]
    fn confidence_is_always_in_unit_range(v in -1e6f64..1e6) {
        let c = Confidence::new(v);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }

    #[test]
    fn mood_impact_is_always_in_documented_range(v in -1e6f64..1e6) {
        let i = MoodImpact::new(v);
        prop_assert!((-3.0..=3.0).contains(&i.value()));
    }

    #[test]
    fn mood_score_is_always_on_scale(v in -1e6f64..1e6) {
        let s = MoodScore::new(v);
        prop_assert!((1.0..=10.0).contains(&s.value()));
    }

    #[test]
    fn clamping_is_idempotent(v in -10.0f64..10.0) {
        let once = MoodImpact::new(v);
        let twice = MoodImpact::new(once.value());
        prop_assert_eq!(once, twice);
    }
}
