use indexmap::IndexMap;

use crate::api::GraphConfig;
use crate::core::{AxisSet, CanvasSize, DataSeries};
use crate::error::{GraphError, GraphResult};
use crate::layout::{LegendEntry, LegendLayout, PlotLayout, compute_legend_layout};
use crate::render::{LineRenderer, TextMeasurer};

/// Main orchestration facade consumed by host applications.
///
/// `GraphEngine` owns the configuration, the named series registry and the
/// renderer, and recomputes axes, layout and legend geometry in full on
/// every draw pass. Derived state is never shared across instances.
pub struct GraphEngine<R: LineRenderer> {
    pub(super) renderer: R,
    pub(super) canvas: CanvasSize,
    pub(super) config: GraphConfig,
    /// `IndexMap` preserves insertion order, which drives legend order.
    pub(super) series: IndexMap<String, DataSeries>,
}

impl<R: LineRenderer> GraphEngine<R> {
    pub fn new(renderer: R, canvas: CanvasSize, config: GraphConfig) -> GraphResult<Self> {
        if !canvas.is_valid() {
            return Err(GraphError::InvalidCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }
        config.validate()?;

        Ok(Self {
            renderer,
            canvas,
            config,
            series: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GraphConfig) -> GraphResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn resize(&mut self, canvas: CanvasSize) -> GraphResult<()> {
        if !canvas.is_valid() {
            return Err(GraphError::InvalidCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }
        self.canvas = canvas;
        Ok(())
    }

    /// Inserts or replaces one named series.
    pub fn insert_series(&mut self, id: impl Into<String>, series: DataSeries) {
        self.series.insert(id.into(), series);
    }

    pub fn remove_series(&mut self, id: &str) -> Option<DataSeries> {
        self.series.shift_remove(id)
    }

    pub fn clear_series(&mut self) {
        self.series.clear();
    }

    #[must_use]
    pub fn series(&self) -> &IndexMap<String, DataSeries> {
        &self.series
    }

    /// Legend entries in series insertion order.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.series
            .values()
            .map(|series| LegendEntry {
                label: series.label().to_owned(),
                colour: series.colour(),
                stroke: series.stroke(),
            })
            .collect()
    }

    /// Rebuilds both axes from the current dataset and configuration.
    pub fn compute_axes(&self) -> GraphResult<AxisSet> {
        let sample_count = self
            .series
            .values()
            .map(DataSeries::len)
            .max()
            .unwrap_or(0);
        let y_values: Vec<f64> = self
            .series
            .values()
            .flat_map(|series| series.values().iter().copied())
            .collect();

        AxisSet::build(sample_count, &y_values, &self.config.scale, &self.config.grid)
    }

    /// Lays the legend out against freshly derived plot geometry.
    ///
    /// Returns `None` when legend drawing is disabled.
    pub fn compute_legend_layout(
        &self,
        measurer: &dyn TextMeasurer,
    ) -> GraphResult<Option<LegendLayout>> {
        if !self.config.legend.draw {
            return Ok(None);
        }

        let mut axes = self.compute_axes()?;
        let layout = self.compute_layout(&mut axes, measurer)?;
        let entries = self.legend_entries();
        compute_legend_layout(
            &entries,
            self.config.legend.position,
            self.config.legend.alignment,
            &layout.lengths,
            measurer,
            self.config.label_font_size,
            &self.config.font_family,
        )
        .map(Some)
    }

    /// Runs the full draw pass: axes, layout, legend, then series geometry
    /// emitted to the renderer. Returns the derived plot layout.
    pub fn draw(&mut self, measurer: &dyn TextMeasurer) -> GraphResult<PlotLayout> {
        self.run_draw_pass(measurer)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
