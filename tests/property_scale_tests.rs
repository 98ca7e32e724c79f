use linegraph_rs::core::{Axis, ScaleSpec, TickScale, YScaleOptions};
use proptest::prelude::*;

proptest! {
    #[test]
    fn scale_step_is_positive_and_covers_the_extent(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.0f64..1_000_000.0,
        tick_count in 1usize..50
    ) {
        let max = min + span;
        let scale = TickScale::build(ScaleSpec::over(min, max, tick_count))
            .expect("valid scale");

        prop_assert!(scale.scale_step() > 0.0);
        prop_assert!(scale.upper_bound() >= max);
    }

    #[test]
    fn label_count_is_always_tick_count_plus_one(
        min in -1_000.0f64..1_000.0,
        span in 0.0f64..10_000.0,
        tick_count in 1usize..50,
        shorthand in proptest::bool::ANY
    ) {
        let scale = TickScale::build(ScaleSpec::over(min, min + span, tick_count))
            .expect("valid scale");
        prop_assert_eq!(scale.labels(shorthand).len(), tick_count + 1);
    }

    #[test]
    fn start_at_zero_keeps_the_bound(
        max in 0.001f64..1_000_000.0,
        tick_count in 1usize..50
    ) {
        let scale = TickScale::build(
            ScaleSpec::over(max / 2.0, max, tick_count).with_start_at_zero(true),
        )
        .expect("valid scale");

        prop_assert_eq!(scale.rounded_minimum(), 0.0);
        prop_assert!(scale.upper_bound() >= max);
    }

    #[test]
    fn exact_division_keeps_the_bound(
        min in -10_000.0f64..10_000.0,
        span in 0.001f64..10_000.0,
        tick_count in 1usize..50
    ) {
        let scale = TickScale::build(
            ScaleSpec::over(min, min + span, tick_count).with_optimise_ticks(false),
        )
        .expect("valid scale");

        prop_assert!(scale.scale_step() > 0.0);
        prop_assert!(scale.upper_bound() >= min + span);
    }

    #[test]
    fn split_axis_steps_stay_synchronized(
        negative in -10_000.0f64..-0.001,
        positive in 0.001f64..10_000.0,
        ticks in 2usize..40
    ) {
        let options = YScaleOptions { ticks, start_at_zero: false };
        let axis = Axis::y(&[negative, positive], &options, false).expect("split axis");

        let negative_scale = axis.negative().expect("negative half");
        prop_assert_eq!(negative_scale.scale_step(), axis.positive().scale_step());

        let zeros = axis
            .labels()
            .iter()
            .filter(|label| label.as_str() == "0")
            .count();
        prop_assert!(zeros <= 1);
    }
}
