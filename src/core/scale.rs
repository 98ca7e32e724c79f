use serde::{Deserialize, Serialize};

use crate::core::format::format_tick_value;
use crate::error::{GraphError, GraphResult};

/// Which half of a split axis a scale serves.
///
/// A `Negative` scale is computed over absolute values; negation happens only
/// at label production, so both halves share one rounding path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleRole {
    #[default]
    Positive,
    Negative,
}

/// Inputs for one tick scale over a numeric extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSpec {
    pub min: f64,
    pub max: f64,
    pub tick_count: usize,
    #[serde(default)]
    pub minimum_step: Option<f64>,
    #[serde(default = "default_optimise_ticks")]
    pub optimise_ticks: bool,
    #[serde(default)]
    pub start_at_zero: bool,
    #[serde(default)]
    pub role: ScaleRole,
}

impl ScaleSpec {
    /// Creates a spec over `[min, max]` with default tick behavior.
    #[must_use]
    pub fn over(min: f64, max: f64, tick_count: usize) -> Self {
        Self {
            min,
            max,
            tick_count,
            minimum_step: None,
            optimise_ticks: true,
            start_at_zero: false,
            role: ScaleRole::Positive,
        }
    }

    #[must_use]
    pub fn with_minimum_step(mut self, minimum_step: f64) -> Self {
        self.minimum_step = Some(minimum_step);
        self
    }

    #[must_use]
    pub fn with_optimise_ticks(mut self, optimise_ticks: bool) -> Self {
        self.optimise_ticks = optimise_ticks;
        self
    }

    #[must_use]
    pub fn with_start_at_zero(mut self, start_at_zero: bool) -> Self {
        self.start_at_zero = start_at_zero;
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: ScaleRole) -> Self {
        self.role = role;
        self
    }
}

fn default_optimise_ticks() -> bool {
    true
}

/// A nice tick step plus rounded bounds over one numeric extent.
///
/// Guarantees after construction: `scale_step > 0` and
/// `rounded_minimum + tick_count * scale_step >= max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickScale {
    role: ScaleRole,
    min: f64,
    max: f64,
    tick_count: usize,
    minimum_step: Option<f64>,
    optimise_ticks: bool,
    start_at_zero: bool,
    scale_step: f64,
    rounded_minimum: f64,
}

impl TickScale {
    pub fn build(spec: ScaleSpec) -> GraphResult<Self> {
        if spec.tick_count == 0 {
            return Err(GraphError::InvalidConfig(
                "tick count must be greater than zero".to_owned(),
            ));
        }
        if !spec.min.is_finite() || !spec.max.is_finite() {
            return Err(GraphError::InvalidData(
                "scale extent must be finite".to_owned(),
            ));
        }
        if spec.max < spec.min {
            return Err(GraphError::InvalidData(
                "scale extent must satisfy max >= min".to_owned(),
            ));
        }
        if let Some(minimum_step) = spec.minimum_step {
            if !minimum_step.is_finite() || minimum_step <= 0.0 {
                return Err(GraphError::InvalidData(
                    "minimum scale step must be finite and > 0".to_owned(),
                ));
            }
        }

        let (scale_step, rounded_minimum) = resolve_step(&spec);
        Ok(Self {
            role: spec.role,
            min: spec.min,
            max: spec.max,
            tick_count: spec.tick_count,
            minimum_step: spec.minimum_step,
            optimise_ticks: spec.optimise_ticks,
            start_at_zero: spec.start_at_zero,
            scale_step,
            rounded_minimum,
        })
    }

    /// Rebuilds this scale with a forced step, re-rounding the minimum.
    ///
    /// Split axes use this to give both halves the larger of their two steps.
    pub fn synchronized_to(&self, scale_step: f64) -> GraphResult<Self> {
        if !scale_step.is_finite() || scale_step <= 0.0 {
            return Err(GraphError::InvalidData(
                "synchronized scale step must be finite and > 0".to_owned(),
            ));
        }

        let max = effective_max(self.min, self.max);
        let ticks = self.tick_count as f64;
        let mut step = scale_step;
        let mut rounded_minimum = round_minimum(self.min, step, self.start_at_zero);
        while rounded_minimum + ticks * step < max {
            step = next_nice_step(step);
            rounded_minimum = round_minimum(self.min, step, self.start_at_zero);
        }

        let mut rebuilt = self.clone();
        rebuilt.scale_step = step;
        rebuilt.rounded_minimum = rounded_minimum;
        Ok(rebuilt)
    }

    #[must_use]
    pub fn role(&self) -> ScaleRole {
        self.role
    }

    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    #[must_use]
    pub fn scale_step(&self) -> f64 {
        self.scale_step
    }

    #[must_use]
    pub fn rounded_minimum(&self) -> f64 {
        self.rounded_minimum
    }

    /// Total value span covered by the tick run.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.scale_step * self.tick_count as f64
    }

    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.rounded_minimum + self.range()
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.tick_count + 1
    }

    /// Tick values in label order.
    ///
    /// A `Positive` scale ascends from the rounded minimum; a `Negative`
    /// scale negates and orders values descending toward zero.
    #[must_use]
    pub fn tick_values(&self) -> Vec<f64> {
        let ascending =
            (0..=self.tick_count).map(|index| self.rounded_minimum + index as f64 * self.scale_step);
        match self.role {
            ScaleRole::Positive => ascending.collect(),
            ScaleRole::Negative => ascending.rev().map(|value| -value).collect(),
        }
    }

    /// Stringified tick values, `tick_count + 1` entries.
    #[must_use]
    pub fn labels(&self, shorthand: bool) -> Vec<String> {
        self.tick_values()
            .into_iter()
            .map(|value| format_tick_value(value, shorthand))
            .collect()
    }
}

fn effective_max(min: f64, max: f64) -> f64 {
    // Degenerate extents widen by one unit so the step division stays defined.
    if max == min { min + 1.0 } else { max }
}

fn round_minimum(min: f64, step: f64, start_at_zero: bool) -> f64 {
    if start_at_zero {
        0.0
    } else {
        (min / step).floor() * step
    }
}

fn resolve_step(spec: &ScaleSpec) -> (f64, f64) {
    let degenerate = spec.max == spec.min;
    let max = effective_max(spec.min, spec.max);
    let ticks = spec.tick_count as f64;

    if !degenerate && !spec.optimise_ticks {
        // Exact division over the unrounded extent.
        let rounded_minimum = if spec.start_at_zero { 0.0 } else { spec.min };
        let mut step = (max - rounded_minimum) / ticks;
        if let Some(minimum_step) = spec.minimum_step {
            step = step.max(minimum_step);
        }
        // Division then re-multiplication can land one ulp short of `max`.
        while rounded_minimum + ticks * step < max {
            step *= 1.0 + 4.0 * f64::EPSILON;
        }
        return (step, rounded_minimum);
    }

    let mut step = if degenerate {
        spec.minimum_step.unwrap_or(1.0)
    } else {
        nice_step((max - spec.min) / ticks)
    };
    if let Some(minimum_step) = spec.minimum_step {
        step = step.max(minimum_step);
    }

    let mut rounded_minimum = round_minimum(spec.min, step, spec.start_at_zero);
    // Rounding the minimum down can leave the run short of `max`; escalate
    // along the nice-number ladder until the bound holds.
    while rounded_minimum + ticks * step < max {
        step = next_nice_step(step);
        rounded_minimum = round_minimum(spec.min, step, spec.start_at_zero);
    }
    (step, rounded_minimum)
}

/// Smallest value from {1, 2, 5, 10} x 10^k that is >= `raw`.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }

    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

fn next_nice_step(step: f64) -> f64 {
    nice_step(step * (1.0 + 1e-9))
}
