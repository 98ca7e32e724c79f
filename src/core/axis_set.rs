use serde::{Deserialize, Serialize};

use crate::core::axis::{Axis, ScaleOptions};
use crate::core::types::GridCellSize;
use crate::error::GraphResult;

/// Grid behavior options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridOptions {
    #[serde(default = "default_gridded")]
    pub gridded: bool,
    /// Force square grid cells (both spacings collapse to the smaller one).
    #[serde(default)]
    pub strict: bool,
    /// Snap the horizontal spacing to a whole pixel when padding allows.
    #[serde(default)]
    pub optimise_square_size: bool,
    /// Suppress the duplicated "0" tick where the X and Y axes intersect.
    #[serde(default)]
    pub shared_axis_zero: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            gridded: default_gridded(),
            strict: false,
            optimise_square_size: false,
            shared_axis_zero: false,
        }
    }
}

fn default_gridded() -> bool {
    true
}

/// Owns the X and Y axes plus the grid-cell geometry derived from them.
///
/// Grid cells are recomputed on every layout pass; nothing here survives a
/// data or configuration change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSet {
    x_axis: Axis,
    y_axis: Axis,
    has_negative: bool,
    shared_axis_zero: bool,
    grid_cell: GridCellSize,
}

impl AxisSet {
    /// Builds both axes from the dataset extents.
    pub fn build(
        sample_count: usize,
        y_values: &[f64],
        scale: &ScaleOptions,
        grid: &GridOptions,
    ) -> GraphResult<Self> {
        let has_negative = y_values.iter().any(|value| *value < 0.0);
        let x_axis = Axis::x(sample_count, &scale.x, scale.shorthand_numerics)?;
        let y_axis = Axis::y(y_values, &scale.y, scale.shorthand_numerics)?;

        Ok(Self {
            x_axis,
            y_axis,
            has_negative,
            shared_axis_zero: grid.shared_axis_zero,
            grid_cell: GridCellSize::new(0.0, 0.0),
        })
    }

    #[must_use]
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    #[must_use]
    pub fn has_negative(&self) -> bool {
        self.has_negative
    }

    #[must_use]
    pub fn grid_cell(&self) -> GridCellSize {
        self.grid_cell
    }

    #[must_use]
    pub fn x_cell_count(&self) -> usize {
        self.x_axis.label_count().saturating_sub(1)
    }

    #[must_use]
    pub fn y_cell_count(&self) -> usize {
        self.y_axis.label_count().saturating_sub(1)
    }

    /// True when the origin "0" label should be drawn once, not twice.
    ///
    /// Only a non-split Y axis puts its zero tick in the shared corner.
    #[must_use]
    pub fn origin_label_shared(&self) -> bool {
        self.shared_axis_zero
            && !self.has_negative
            && self.x_axis.labels().first().map(String::as_str) == Some("0")
            && self.y_axis.labels().first().map(String::as_str) == Some("0")
    }

    /// Derives tick spacing from the plot extents, forcing square cells in
    /// strict mode.
    pub fn derive_grid_cell(&mut self, plot_width: f64, plot_height: f64, strict: bool) {
        let x_cells = self.x_cell_count().max(1) as f64;
        let y_cells = self.y_cell_count().max(1) as f64;
        let raw = GridCellSize::new(plot_width / x_cells, plot_height / y_cells);
        self.grid_cell = if strict { raw.squared() } else { raw };
    }

    /// Rounds the horizontal spacing to the nearest whole pixel.
    ///
    /// A round-up is accepted only when the right-padding budget can absorb
    /// the accumulated shift across all cells; otherwise the spacing rounds
    /// down so the final tick never leaves the canvas.
    pub fn snap_square_cells(&mut self, right_padding: f64, strict: bool) -> GridCellSize {
        let raw = self.grid_cell.x;
        let cells = self.x_cell_count().max(1) as f64;
        let rounded = raw.round();

        let snapped = if rounded < 1.0 {
            // Sub-pixel cells cannot snap to a whole pixel.
            raw
        } else if rounded > raw && right_padding - (rounded - raw) * cells < 0.0 {
            raw.floor().max(1.0)
        } else {
            rounded
        };

        self.grid_cell.x = snapped;
        if strict {
            self.grid_cell.y = snapped;
        }
        self.grid_cell
    }
}
