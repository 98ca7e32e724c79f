use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{AxisSet, CanvasSize, GridCellSize};
use crate::error::GraphResult;
use crate::layout::legend::{LegendMetrics, LegendPosition};
use crate::layout::padding::{Padding, PlotLengths};
use crate::render::TextMeasurer;

/// Inputs the layout pass needs beyond the axes themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions<'a> {
    pub base_padding: f64,
    pub label_font_size: f64,
    pub font_family: &'a str,
    /// Present when a title block reserves space above the plot.
    pub title_font_size: Option<f64>,
    pub strict: bool,
    pub optimise_square_size: bool,
}

/// Fully derived plot geometry for one draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub padding: Padding,
    pub lengths: PlotLengths,
    pub grid_cell: GridCellSize,
}

/// Computes padding and the rectangle the plot occupies, then reconciles
/// grid-cell geometry against it.
///
/// The measure pass folds the widest Y label, the X label row, the title
/// block and the legend footprint into the base padding; lengths are derived
/// fresh from that padding. In optimise-square-size mode the horizontal cell
/// spacing snaps to a whole pixel and the right padding is recomputed so the
/// final tick stays inside canvas bounds.
///
/// Either every field of the returned layout is derived, or an error leaves
/// no partial state behind.
pub fn compute_plot_layout(
    canvas: CanvasSize,
    axes: &mut AxisSet,
    legend: Option<&LegendMetrics>,
    measurer: &dyn TextMeasurer,
    options: &LayoutOptions<'_>,
) -> GraphResult<PlotLayout> {
    let widest_y_label = axes
        .y_axis()
        .labels()
        .iter()
        .map(|label| OrderedFloat(measurer.measure(label, options.label_font_size, options.font_family)))
        .max()
        .map_or(0.0, OrderedFloat::into_inner);

    let mut padding = Padding::uniform(options.base_padding);
    padding.left += widest_y_label + padding.text_padding;
    padding.bottom += options.label_font_size + padding.text_padding;
    if let Some(title_font_size) = options.title_font_size {
        padding.top += title_font_size + padding.text_padding;
    }
    if let Some(metrics) = legend {
        match metrics.position {
            LegendPosition::Top => padding.top += metrics.thickness,
            LegendPosition::Bottom => padding.bottom += metrics.thickness,
            LegendPosition::Left => padding.left += metrics.thickness,
            LegendPosition::Right => padding.right += metrics.thickness,
        }
    }

    let mut lengths = PlotLengths::derive(canvas, &padding)?;
    axes.derive_grid_cell(lengths.width(), lengths.height(), options.strict);

    if options.optimise_square_size {
        let snapped = axes.snap_square_cells(padding.right, options.strict);
        let plot_width = snapped.x * axes.x_cell_count().max(1) as f64;
        padding.right = canvas.width_px() - padding.left - plot_width;
        lengths = PlotLengths::derive(canvas, &padding)?;
    }

    Ok(PlotLayout {
        padding,
        lengths,
        grid_cell: axes.grid_cell(),
    })
}
