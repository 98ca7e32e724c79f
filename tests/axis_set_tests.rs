use linegraph_rs::core::{AxisSet, GridCellSize, GridOptions, ScaleOptions};

fn default_scale() -> ScaleOptions {
    ScaleOptions::default()
}

#[test]
fn negative_values_are_detected() {
    let grid = GridOptions::default();
    let with_negative =
        AxisSet::build(4, &[-5.0, -3.0, 10.0, 20.0], &default_scale(), &grid).expect("axis set");
    let without_negative =
        AxisSet::build(3, &[1.0, 2.0, 3.0], &default_scale(), &grid).expect("axis set");

    assert!(with_negative.has_negative());
    assert!(!without_negative.has_negative());
}

#[test]
fn strict_mode_forces_square_cells_to_the_minimum() {
    assert_eq!(
        GridCellSize::new(12.3, 9.7).squared(),
        GridCellSize::new(9.7, 9.7)
    );

    let grid = GridOptions::default();
    let mut axes = AxisSet::build(11, &[0.0, 97.0], &default_scale(), &grid).expect("axis set");
    // 10 cells per dimension: 123/10 = 12.3 wide, 97/10 = 9.7 tall.
    axes.derive_grid_cell(123.0, 97.0, true);

    assert_eq!(axes.grid_cell(), GridCellSize::new(9.7, 9.7));
}

#[test]
fn plain_mode_keeps_both_spacings() {
    let grid = GridOptions::default();
    let mut axes = AxisSet::build(11, &[0.0, 97.0], &default_scale(), &grid).expect("axis set");
    axes.derive_grid_cell(123.0, 97.0, false);

    assert_eq!(axes.grid_cell(), GridCellSize::new(12.3, 9.7));
}

#[test]
fn square_snap_rounds_up_when_padding_absorbs_the_shift() {
    let grid = GridOptions::default();
    let mut axes = AxisSet::build(11, &[0.0, 97.0], &default_scale(), &grid).expect("axis set");
    axes.derive_grid_cell(127.0, 97.0, false);

    // 12.7 -> 13 needs 0.3 * 10 = 3 px of right padding.
    let snapped = axes.snap_square_cells(5.0, false);
    assert_eq!(snapped.x, 13.0);
}

#[test]
fn square_snap_rounds_down_when_padding_cannot_absorb_it() {
    let grid = GridOptions::default();
    let mut axes = AxisSet::build(11, &[0.0, 97.0], &default_scale(), &grid).expect("axis set");
    axes.derive_grid_cell(127.0, 97.0, false);

    let snapped = axes.snap_square_cells(2.0, false);
    assert_eq!(snapped.x, 12.0);
}

#[test]
fn square_snap_keeps_sub_pixel_cells_unrounded() {
    let grid = GridOptions::default();
    let mut axes = AxisSet::build(11, &[0.0, 97.0], &default_scale(), &grid).expect("axis set");
    axes.derive_grid_cell(4.0, 97.0, false);

    let snapped = axes.snap_square_cells(100.0, false);
    assert_eq!(snapped.x, 0.4);
}

#[test]
fn square_snap_follows_strict_cells_on_both_dimensions() {
    let grid = GridOptions::default();
    let mut axes = AxisSet::build(11, &[0.0, 97.0], &default_scale(), &grid).expect("axis set");
    axes.derive_grid_cell(127.0, 97.0, true);

    // Strict first collapses to 9.7, then the snap rounds both spacings.
    let snapped = axes.snap_square_cells(100.0, true);
    assert_eq!(snapped.x, 10.0);
    assert_eq!(snapped.y, 10.0);
}

#[test]
fn shared_axis_zero_marks_the_origin_once() {
    let grid = GridOptions {
        shared_axis_zero: true,
        ..GridOptions::default()
    };
    let shared =
        AxisSet::build(11, &[0.0, 50.0, 97.0], &default_scale(), &grid).expect("axis set");
    assert!(shared.origin_label_shared());

    // A split axis keeps its zero mid-run, away from the origin corner.
    let split =
        AxisSet::build(4, &[-5.0, -3.0, 10.0, 20.0], &default_scale(), &grid).expect("axis set");
    assert!(!split.origin_label_shared());

    let unshared = AxisSet::build(
        11,
        &[0.0, 50.0, 97.0],
        &default_scale(),
        &GridOptions::default(),
    )
    .expect("axis set");
    assert!(!unshared.origin_label_shared());
}
