use linegraph_rs::core::{ScaleRole, ScaleSpec, TickScale};
use linegraph_rs::error::GraphError;

#[test]
fn nice_example_extent_yields_decade_step() {
    let scale = TickScale::build(ScaleSpec::over(0.0, 97.0, 10)).expect("valid scale");

    assert_eq!(scale.scale_step(), 10.0);
    assert_eq!(scale.rounded_minimum(), 0.0);
    let labels = scale.labels(false);
    assert_eq!(labels.len(), 11);
    assert_eq!(labels.first().map(String::as_str), Some("0"));
    assert_eq!(labels.get(1).map(String::as_str), Some("10"));
    assert_eq!(labels.last().map(String::as_str), Some("100"));
}

#[test]
fn zero_tick_count_is_a_fatal_config_error() {
    let result = TickScale::build(ScaleSpec::over(0.0, 10.0, 0));
    assert!(matches!(result, Err(GraphError::InvalidConfig(_))));
}

#[test]
fn inverted_extent_is_rejected() {
    let result = TickScale::build(ScaleSpec::over(10.0, 0.0, 5));
    assert!(matches!(result, Err(GraphError::InvalidData(_))));
}

#[test]
fn degenerate_extent_widens_by_one_unit() {
    let scale = TickScale::build(ScaleSpec::over(5.0, 5.0, 4)).expect("degenerate scale");

    assert_eq!(scale.scale_step(), 1.0);
    assert_eq!(scale.rounded_minimum(), 5.0);
    assert_eq!(scale.labels(false).len(), 5);
}

#[test]
fn degenerate_extent_honours_minimum_step() {
    let scale = TickScale::build(ScaleSpec::over(0.0, 0.0, 5).with_minimum_step(2.0))
        .expect("degenerate scale");
    assert_eq!(scale.scale_step(), 2.0);
}

#[test]
fn unoptimised_scale_uses_exact_division() {
    let scale = TickScale::build(ScaleSpec::over(0.0, 97.0, 10).with_optimise_ticks(false))
        .expect("exact scale");

    assert!((scale.scale_step() - 9.7).abs() <= 1e-9);
    assert_eq!(scale.rounded_minimum(), 0.0);
    assert!(scale.upper_bound() >= 97.0);
}

#[test]
fn minimum_step_floors_the_nice_step() {
    let scale = TickScale::build(ScaleSpec::over(0.0, 4.0, 10).with_minimum_step(1.0))
        .expect("floored scale");
    assert_eq!(scale.scale_step(), 1.0);
}

#[test]
fn step_escalates_when_rounding_leaves_the_run_short() {
    // 9..101 at 10 ticks: a raw nice step of 10 from a floored minimum of 0
    // covers only 100; the ladder must climb once more.
    let scale = TickScale::build(ScaleSpec::over(9.0, 101.0, 10)).expect("valid scale");
    assert!(scale.upper_bound() >= 101.0);
    assert!(scale.scale_step() > 0.0);
}

#[test]
fn start_at_zero_pins_the_rounded_minimum() {
    let scale = TickScale::build(ScaleSpec::over(42.0, 97.0, 10).with_start_at_zero(true))
        .expect("valid scale");
    assert_eq!(scale.rounded_minimum(), 0.0);
    assert!(scale.upper_bound() >= 97.0);
}

#[test]
fn negative_role_orders_labels_descending_toward_zero() {
    let scale = TickScale::build(
        ScaleSpec::over(0.0, 20.0, 4)
            .with_start_at_zero(true)
            .with_role(ScaleRole::Negative),
    )
    .expect("negative scale");

    let labels = scale.labels(false);
    assert_eq!(labels, vec!["-20", "-15", "-10", "-5", "0"]);
}

#[test]
fn synchronized_step_rebuilds_the_rounded_minimum() {
    let scale = TickScale::build(ScaleSpec::over(3.0, 5.0, 5)).expect("valid scale");
    assert_eq!(scale.scale_step(), 0.5);
    assert_eq!(scale.rounded_minimum(), 3.0);

    let synchronized = scale.synchronized_to(5.0).expect("synchronized scale");
    assert_eq!(synchronized.scale_step(), 5.0);
    assert_eq!(synchronized.rounded_minimum(), 0.0);
    assert!(synchronized.upper_bound() >= 5.0);
}

#[test]
fn shorthand_labels_compress_large_values() {
    let scale = TickScale::build(ScaleSpec::over(0.0, 9_700.0, 10)).expect("valid scale");
    let labels = scale.labels(true);
    assert_eq!(labels.first().map(String::as_str), Some("0"));
    assert_eq!(labels.get(1).map(String::as_str), Some("1k"));
    assert_eq!(labels.last().map(String::as_str), Some("10k"));
}
