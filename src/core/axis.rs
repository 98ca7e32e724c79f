use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::scale::{ScaleRole, ScaleSpec, TickScale};
use crate::error::{GraphError, GraphResult};

/// Dimension an axis serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisKind {
    X,
    Y,
}

/// X-dimension tick options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XScaleOptions {
    #[serde(default = "default_ticks")]
    pub ticks: usize,
    #[serde(default = "default_optimise_ticks")]
    pub optimise_ticks: bool,
    /// Explicit label override, cycled when shorter than the label count.
    #[serde(default)]
    pub tick_labels: Option<Vec<String>>,
}

impl Default for XScaleOptions {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            optimise_ticks: default_optimise_ticks(),
            tick_labels: None,
        }
    }
}

/// Y-dimension tick options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YScaleOptions {
    #[serde(default = "default_ticks")]
    pub ticks: usize,
    #[serde(default)]
    pub start_at_zero: bool,
}

impl Default for YScaleOptions {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            start_at_zero: false,
        }
    }
}

/// Scale options shared by both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScaleOptions {
    #[serde(default)]
    pub x: XScaleOptions,
    #[serde(default)]
    pub y: YScaleOptions,
    /// Compress large tick values to `1.5k` / `2m` / `3b` shorthand.
    #[serde(default)]
    pub shorthand_numerics: bool,
}

fn default_ticks() -> usize {
    10
}

fn default_optimise_ticks() -> bool {
    true
}

/// One dimension's full tick run, possibly split into positive and negative
/// halves with a synchronized step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    kind: AxisKind,
    positive: TickScale,
    negative: Option<TickScale>,
    labels: Vec<String>,
    tick_values: Vec<f64>,
}

impl Axis {
    /// Builds the X axis over the sample-index domain `[0, sample_count - 1]`.
    ///
    /// Tick spacing is always an integer index step, never fractional.
    pub fn x(sample_count: usize, options: &XScaleOptions, shorthand: bool) -> GraphResult<Self> {
        if sample_count == 0 {
            warn!("x axis built from an empty dataset; degrading to a single default tick");
        }

        let max = sample_count.saturating_sub(1) as f64;
        let scale = TickScale::build(ScaleSpec {
            min: 0.0,
            max,
            tick_count: options.ticks,
            minimum_step: Some(1.0),
            optimise_ticks: options.optimise_ticks,
            start_at_zero: true,
            role: ScaleRole::Positive,
        })?;

        let tick_values = scale.tick_values();
        let mut labels = scale.labels(shorthand);
        if let Some(overrides) = options.tick_labels.as_deref() {
            if !overrides.is_empty() {
                labels = cycled_labels(overrides, labels.len());
            }
        }

        Ok(Self {
            kind: AxisKind::X,
            positive: scale,
            negative: None,
            labels,
            tick_values,
        })
    }

    /// Builds the Y axis over the value extent of `values`.
    ///
    /// When strictly-negative values exist the axis splits into two scales,
    /// each allotted half the tick budget, with their steps synchronized so
    /// spacing per tick is equal above and below zero.
    pub fn y(values: &[f64], options: &YScaleOptions, shorthand: bool) -> GraphResult<Self> {
        if values.iter().any(|value| !value.is_finite()) {
            return Err(GraphError::InvalidData(
                "axis values must be finite".to_owned(),
            ));
        }
        if values.is_empty() {
            warn!("y axis built from an empty dataset; degrading to a single default tick");
        }

        let negatives: Vec<f64> = values
            .iter()
            .filter(|value| **value < 0.0)
            .map(|value| value.abs())
            .collect();
        let non_negatives: Vec<f64> = values
            .iter()
            .copied()
            .filter(|value| *value >= 0.0)
            .collect();

        if negatives.is_empty() {
            let (min, max) = value_extent(&non_negatives);
            let positive = TickScale::build(ScaleSpec {
                min,
                max,
                tick_count: options.ticks,
                minimum_step: None,
                optimise_ticks: true,
                start_at_zero: options.start_at_zero,
                role: ScaleRole::Positive,
            })?;
            let labels = positive.labels(shorthand);
            let tick_values = positive.tick_values();
            return Ok(Self {
                kind: AxisKind::Y,
                positive,
                negative: None,
                labels,
                tick_values,
            });
        }

        let half_budget = (options.ticks / 2).max(1);
        let (negative_min, negative_max) = value_extent(&negatives);
        let positive_max = non_negatives
            .iter()
            .copied()
            .fold(0.0f64, |extent, value| extent.max(value));

        let negative = TickScale::build(ScaleSpec {
            min: negative_min,
            max: negative_max,
            tick_count: half_budget,
            minimum_step: None,
            optimise_ticks: true,
            start_at_zero: false,
            role: ScaleRole::Negative,
        })?;
        let positive = TickScale::build(ScaleSpec {
            min: 0.0,
            max: positive_max,
            tick_count: half_budget,
            minimum_step: None,
            optimise_ticks: true,
            start_at_zero: true,
            role: ScaleRole::Positive,
        })?;

        // Re-forcing a step can itself escalate when the re-rounded minimum
        // leaves a half short of its extent, so iterate to a common fixpoint.
        let mut step = positive.scale_step().max(negative.scale_step());
        let (positive, negative) = loop {
            let synced_positive = positive.synchronized_to(step)?;
            let synced_negative = negative.synchronized_to(step)?;
            let widest = synced_positive
                .scale_step()
                .max(synced_negative.scale_step());
            if widest == step {
                break (synced_positive, synced_negative);
            }
            step = widest;
        };

        let mut tick_values = negative.tick_values();
        let mut labels = negative.labels(shorthand);
        let positive_values = positive.tick_values();
        let positive_labels = positive.labels(shorthand);
        // The halves meet at zero; drop the duplicated boundary tick.
        if tick_values.last().copied() == positive_values.first().copied() {
            tick_values.pop();
            labels.pop();
        }
        tick_values.extend(positive_values);
        labels.extend(positive_labels);

        Ok(Self {
            kind: AxisKind::Y,
            positive,
            negative: Some(negative),
            labels,
            tick_values,
        })
    }

    #[must_use]
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    #[must_use]
    pub fn positive(&self) -> &TickScale {
        &self.positive
    }

    #[must_use]
    pub fn negative(&self) -> Option<&TickScale> {
        self.negative.as_ref()
    }

    /// Shared step across both halves of the axis.
    #[must_use]
    pub fn scale_step(&self) -> f64 {
        self.positive.scale_step()
    }

    /// Ordered tick labels, most negative first.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Ordered tick values aligned with `labels`.
    #[must_use]
    pub fn tick_values(&self) -> &[f64] {
        &self.tick_values
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Value bounds covered by the full tick run.
    #[must_use]
    pub fn value_extent(&self) -> (f64, f64) {
        let max = self.positive.upper_bound();
        let min = match &self.negative {
            Some(negative) => -negative.upper_bound(),
            None => self.positive.rounded_minimum(),
        };
        (min, max)
    }

    /// Maps a value to its fractional position along the tick run, 0 at the
    /// first tick and 1 at the last.
    ///
    /// Positions interpolate between adjacent tick values, which keeps the
    /// mapping correct even when a split axis has a wider boundary cell.
    #[must_use]
    pub fn value_to_ratio(&self, value: f64) -> f64 {
        let ticks = &self.tick_values;
        if ticks.len() < 2 {
            return 0.0;
        }

        let cells = (ticks.len() - 1) as f64;
        if value <= ticks[0] {
            return 0.0;
        }
        if value >= ticks[ticks.len() - 1] {
            return 1.0;
        }

        for (index, pair) in ticks.windows(2).enumerate() {
            if value <= pair[1] {
                let span = pair[1] - pair[0];
                let fraction = if span > 0.0 {
                    (value - pair[0]) / span
                } else {
                    0.0
                };
                return (index as f64 + fraction) / cells;
            }
        }
        1.0
    }
}

fn value_extent(values: &[f64]) -> (f64, f64) {
    // An empty slice collapses to a zero extent so the degenerate-scale path
    // takes over.
    if values.is_empty() {
        return (0.0, 0.0);
    }
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(*value), max.max(*value))
        })
}

fn cycled_labels(overrides: &[String], count: usize) -> Vec<String> {
    (0..count)
        .map(|index| overrides[index % overrides.len()].clone())
        .collect()
}
