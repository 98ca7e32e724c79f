use tracing::warn;

use crate::api::engine::GraphEngine;
use crate::core::{
    AxisSet, DEFAULT_TENSION, DataSeries, Interpolation, Point, spline_control_points,
};
use crate::error::{GraphError, GraphResult};
use crate::layout::{
    LEGEND_PADDING_PX, LayoutOptions, LegendLayout, LegendPosition, PlotLayout,
    compute_legend_layout, compute_plot_layout, measure_legend,
};
use crate::render::{Color, LineRenderer, TextMeasurer};

const SERIES_LINE_WIDTH: f64 = 2.0;
const GRID_LINE_WIDTH: f64 = 1.0;
const POINT_MARKER_RADIUS: f64 = 3.0;
const GRID_LINE_COLOUR: Color = Color::rgba(0.0, 0.0, 0.0, 0.08);

impl<R: LineRenderer> GraphEngine<R> {
    /// One full pass: axes, layout and legend are rebuilt from scratch, then
    /// grid and series geometry stream into the renderer.
    pub(super) fn run_draw_pass(&mut self, measurer: &dyn TextMeasurer) -> GraphResult<PlotLayout> {
        let mut axes = self.compute_axes()?;
        let layout = self.compute_layout(&mut axes, measurer)?;

        let legend = if self.config.legend.draw {
            let entries = self.legend_entries();
            Some(compute_legend_layout(
                &entries,
                self.config.legend.position,
                self.config.legend.alignment,
                &layout.lengths,
                measurer,
                self.config.label_font_size,
                &self.config.font_family,
            )?)
        } else {
            None
        };

        if self.config.grid.gridded {
            self.emit_grid(&axes, &layout)?;
        }

        let series: Vec<DataSeries> = self.series.values().cloned().collect();
        for one in &series {
            let points = self.admit_points(self.series_points(one, &axes, &layout))?;
            self.emit_series_path(one, &points);
        }

        if let Some(legend) = &legend {
            self.emit_legend_swatches(legend, &layout)?;
        }

        Ok(layout)
    }

    /// Derives plot geometry with the legend footprint already folded in.
    pub(super) fn compute_layout(
        &self,
        axes: &mut AxisSet,
        measurer: &dyn TextMeasurer,
    ) -> GraphResult<PlotLayout> {
        let legend_metrics = if self.config.legend.draw {
            let entries = self.legend_entries();
            Some(measure_legend(
                &entries,
                self.config.legend.position,
                measurer,
                self.config.label_font_size,
                &self.config.font_family,
            ))
        } else {
            None
        };

        let options = LayoutOptions {
            base_padding: self.config.padding,
            label_font_size: self.config.label_font_size,
            font_family: &self.config.font_family,
            title_font_size: self
                .config
                .title
                .text
                .as_ref()
                .map(|_| self.config.title.font_size),
            strict: self.config.grid.strict,
            optimise_square_size: self.config.grid.optimise_square_size,
        };

        compute_plot_layout(
            self.canvas,
            axes,
            legend_metrics.as_ref(),
            measurer,
            &options,
        )
    }

    /// Maps one series into pixel space.
    ///
    /// Positions are anchored at the plot's bottom-left tick and advance by
    /// the reconciled grid-cell spacing, so snapped or squared cells shift
    /// every point consistently.
    fn series_points(&self, series: &DataSeries, axes: &AxisSet, layout: &PlotLayout) -> Vec<Point> {
        let plot_width = layout.grid_cell.x * axes.x_cell_count() as f64;
        let plot_height = layout.grid_cell.y * axes.y_cell_count() as f64;

        series
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let x_ratio = axes.x_axis().value_to_ratio(index as f64);
                let y_ratio = axes.y_axis().value_to_ratio(*value);
                Point::new(
                    layout.lengths.x_begin + x_ratio * plot_width,
                    layout.lengths.y_end - y_ratio * plot_height,
                )
            })
            .collect()
    }

    /// Applies the canvas-bounds guard to every mapped point.
    ///
    /// Offending points fail the pass, or are dropped with a warning when
    /// geometry leniency is enabled.
    fn admit_points(&self, points: Vec<Point>) -> GraphResult<Vec<Point>> {
        let mut admitted = Vec::with_capacity(points.len());
        for point in points {
            if self.admit_point(point)? {
                admitted.push(point);
            }
        }
        Ok(admitted)
    }

    fn admit_point(&self, point: Point) -> GraphResult<bool> {
        let inside = point.is_finite()
            && (0.0..=self.canvas.width_px()).contains(&point.x)
            && (0.0..=self.canvas.height_px()).contains(&point.y);
        if inside {
            return Ok(true);
        }

        if self.config.leniency.bypass_geometry {
            warn!(x = point.x, y = point.y, "coordinate outside canvas; skipping draw call");
            return Ok(false);
        }

        Err(GraphError::OutOfBounds {
            x: point.x,
            y: point.y,
            width: self.canvas.width,
            height: self.canvas.height,
        })
    }

    fn emit_grid(&mut self, axes: &AxisSet, layout: &PlotLayout) -> GraphResult<()> {
        let cell = layout.grid_cell;
        let x_cells = axes.x_cell_count();
        let y_cells = axes.y_cell_count();
        let plot_width = cell.x * x_cells as f64;
        let plot_height = cell.y * y_cells as f64;
        let x_begin = layout.lengths.x_begin;
        let y_end = layout.lengths.y_end;
        let y_top = y_end - plot_height;

        self.renderer.set_line_dash(&[]);
        for index in 0..=x_cells {
            let x = x_begin + index as f64 * cell.x;
            if !(self.admit_point(Point::new(x, y_top))? && self.admit_point(Point::new(x, y_end))?)
            {
                continue;
            }
            self.renderer.move_to(x, y_top);
            self.renderer.line_to(x, y_end);
        }
        for index in 0..=y_cells {
            let y = y_end - index as f64 * cell.y;
            if !(self.admit_point(Point::new(x_begin, y))?
                && self.admit_point(Point::new(x_begin + plot_width, y))?)
            {
                continue;
            }
            self.renderer.move_to(x_begin, y);
            self.renderer.line_to(x_begin + plot_width, y);
        }
        self.renderer.stroke(GRID_LINE_COLOUR, GRID_LINE_WIDTH);
        Ok(())
    }

    fn emit_series_path(&mut self, series: &DataSeries, points: &[Point]) {
        let Some(first) = points.first() else {
            return;
        };

        if points.len() == 1 {
            self.renderer
                .draw_circle(first.x, first.y, POINT_MARKER_RADIUS, series.colour());
            return;
        }

        let dash = series.stroke().dash_pattern();
        self.renderer.set_line_dash(&dash);
        self.renderer.move_to(first.x, first.y);

        let control_points = match series.interpolation() {
            Interpolation::Linear => Vec::new(),
            Interpolation::Cubic => spline_control_points(points, DEFAULT_TENSION),
        };

        if control_points.is_empty() {
            for point in &points[1..] {
                self.renderer.line_to(point.x, point.y);
            }
        } else {
            let second = points[1];
            let last = points[points.len() - 1];
            let head = control_points[0].prev;
            self.renderer
                .quadratic_curve_to(head.x, head.y, second.x, second.y);
            for index in 1..control_points.len() {
                let from = control_points[index - 1].next;
                let to = control_points[index].prev;
                let end = points[index + 1];
                self.renderer
                    .bezier_curve_to(from.x, from.y, to.x, to.y, end.x, end.y);
            }
            let tail = control_points[control_points.len() - 1].next;
            self.renderer.quadratic_curve_to(tail.x, tail.y, last.x, last.y);
        }

        self.renderer.stroke(series.colour(), SERIES_LINE_WIDTH);
        self.renderer.set_line_dash(&[]);
        for point in points {
            self.renderer
                .draw_circle(point.x, point.y, POINT_MARKER_RADIUS, series.colour());
        }
    }

    /// Marks each legend entry with its series colour at the laid-out offset.
    ///
    /// Label text itself is left to the host; the engine emits geometry only.
    fn emit_legend_swatches(
        &mut self,
        legend: &LegendLayout,
        layout: &PlotLayout,
    ) -> GraphResult<()> {
        let box_size = self.config.label_font_size;
        let base = self.config.padding;
        let across = match legend.position {
            // The title block sits above the top strip, so anchor on the
            // derived padding rather than the base margin.
            LegendPosition::Top => layout.padding.top - legend.thickness / 2.0,
            LegendPosition::Bottom => self.canvas.height_px() - base - legend.thickness / 2.0,
            LegendPosition::Left => base + legend.thickness / 2.0,
            LegendPosition::Right => self.canvas.width_px() - base - legend.thickness / 2.0,
        };

        let entries = self.legend_entries();
        for (entry, offset) in entries.iter().zip(&legend.offsets) {
            let along = if legend.position.is_horizontal() {
                offset + LEGEND_PADDING_PX + box_size / 2.0
            } else {
                offset + box_size / 2.0
            };
            let (x, y) = if legend.position.is_horizontal() {
                (along, across)
            } else {
                (across, along)
            };
            if !self.admit_point(Point::new(x, y))? {
                continue;
            }
            self.renderer
                .draw_circle(x, y, box_size / 2.0, entry.colour);
        }
        Ok(())
    }
}
