use linegraph_rs::core::CanvasSize;
use linegraph_rs::layout::{
    LEGEND_PADDING_PX, LegendAlignment, LegendEntry, LegendPosition, Padding, PlotLengths,
    compute_legend_layout, measure_legend,
};
use linegraph_rs::render::{Color, FixedWidthMeasurer, StrokeStyle};

const FONT_SIZE: f64 = 12.0;
const FONT_FAMILY: &str = "sans-serif";

fn entries() -> Vec<LegendEntry> {
    vec![
        LegendEntry {
            label: "alpha".to_owned(),
            colour: Color::rgb(0.8, 0.2, 0.2),
            stroke: StrokeStyle::Solid,
        },
        LegendEntry {
            label: "beta".to_owned(),
            colour: Color::rgb(0.2, 0.2, 0.8),
            stroke: StrokeStyle::Dashed,
        },
    ]
}

fn lengths() -> PlotLengths {
    PlotLengths::derive(CanvasSize::new(800, 600), &Padding::uniform(20.0)).expect("lengths")
}

#[test]
fn horizontal_entry_spacing_includes_box_and_label() {
    let measurer = FixedWidthMeasurer::default();
    let metrics = measure_legend(
        &entries(),
        LegendPosition::Top,
        &measurer,
        FONT_SIZE,
        FONT_FAMILY,
    );

    // "alpha" measures 5 * 12 * 0.6 = 36 px wide.
    let expected_first = 2.0 * LEGEND_PADDING_PX + FONT_SIZE + 36.0;
    assert!((metrics.entry_spacing[0] - expected_first).abs() <= 1e-9);
    assert!(
        (metrics.required_space - metrics.entry_spacing.iter().sum::<f64>()).abs() <= 1e-9
    );
}

#[test]
fn vertical_entry_spacing_is_box_plus_padding() {
    let measurer = FixedWidthMeasurer::default();
    let metrics = measure_legend(
        &entries(),
        LegendPosition::Left,
        &measurer,
        FONT_SIZE,
        FONT_FAMILY,
    );

    for spacing in &metrics.entry_spacing {
        assert!((spacing - (FONT_SIZE + LEGEND_PADDING_PX)).abs() <= 1e-9);
    }
    // Block width is bounded by the longest label.
    let expected_thickness = 2.0 * LEGEND_PADDING_PX + FONT_SIZE + 36.0;
    assert!((metrics.thickness - expected_thickness).abs() <= 1e-9);
}

#[test]
fn empty_legend_has_no_footprint() {
    let measurer = FixedWidthMeasurer::default();
    let metrics = measure_legend(&[], LegendPosition::Top, &measurer, FONT_SIZE, FONT_FAMILY);
    assert_eq!(metrics.required_space, 0.0);
    assert_eq!(metrics.thickness, 0.0);
}

#[test]
fn accumulated_offsets_equal_the_measured_footprint() {
    let measurer = FixedWidthMeasurer::default();
    let layout = compute_legend_layout(
        &entries(),
        LegendPosition::Top,
        LegendAlignment::Start,
        &lengths(),
        &measurer,
        FONT_SIZE,
        FONT_FAMILY,
    )
    .expect("legend layout");

    let metrics = measure_legend(
        &entries(),
        LegendPosition::Top,
        &measurer,
        FONT_SIZE,
        FONT_FAMILY,
    );
    let first = layout.offsets.first().copied().expect("first offset");
    let last = layout.offsets.last().copied().expect("last offset");
    let walked = last + metrics.entry_spacing.last().expect("spacing") - first;
    assert!((walked - layout.required_space).abs() <= 1e-9);
}

#[test]
fn start_alignment_begins_at_the_leading_edge() {
    let measurer = FixedWidthMeasurer::default();
    let lengths = lengths();
    let layout = compute_legend_layout(
        &entries(),
        LegendPosition::Top,
        LegendAlignment::Start,
        &lengths,
        &measurer,
        FONT_SIZE,
        FONT_FAMILY,
    )
    .expect("legend layout");

    assert_eq!(layout.offsets[0], lengths.x_begin);
}

#[test]
fn center_alignment_straddles_the_plot_center() {
    let measurer = FixedWidthMeasurer::default();
    let lengths = lengths();
    let layout = compute_legend_layout(
        &entries(),
        LegendPosition::Bottom,
        LegendAlignment::Center,
        &lengths,
        &measurer,
        FONT_SIZE,
        FONT_FAMILY,
    )
    .expect("legend layout");

    let expected = lengths.x_center - layout.required_space / 2.0;
    assert!((layout.offsets[0] - expected).abs() <= 1e-9);
}

#[test]
fn end_alignment_finishes_at_the_trailing_edge() {
    let measurer = FixedWidthMeasurer::default();
    let lengths = lengths();
    let layout = compute_legend_layout(
        &entries(),
        LegendPosition::Right,
        LegendAlignment::End,
        &lengths,
        &measurer,
        FONT_SIZE,
        FONT_FAMILY,
    )
    .expect("legend layout");

    let last_spacing = FONT_SIZE + LEGEND_PADDING_PX;
    let finish = layout.offsets.last().expect("offset") + last_spacing;
    assert!((finish - lengths.y_end).abs() <= 1e-9);
}

#[test]
fn vertical_layout_walks_the_y_extent() {
    let measurer = FixedWidthMeasurer::default();
    let lengths = lengths();
    let layout = compute_legend_layout(
        &entries(),
        LegendPosition::Left,
        LegendAlignment::Start,
        &lengths,
        &measurer,
        FONT_SIZE,
        FONT_FAMILY,
    )
    .expect("legend layout");

    assert_eq!(layout.offsets[0], lengths.y_begin);
    assert!(layout.offsets[1] > layout.offsets[0]);
}
