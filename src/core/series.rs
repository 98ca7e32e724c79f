use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::render::{Color, StrokeStyle};

/// Curve treatment applied between plotted points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Interpolation {
    /// Straight segments between samples.
    #[default]
    Linear,
    /// Smooth spline segments through interior samples.
    Cubic,
}

/// One ordered sequence of numeric samples plus its presentation style.
///
/// A series is immutable once assigned to a draw pass; the engine only reads
/// it through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    label: String,
    values: Vec<f64>,
    colour: Color,
    stroke: StrokeStyle,
    interpolation: Interpolation,
}

impl DataSeries {
    pub const DEFAULT_COLOUR: Color = Color::rgb(0.26, 0.47, 0.78);

    pub fn new(label: impl Into<String>, values: Vec<f64>) -> GraphResult<Self> {
        if values.iter().any(|value| !value.is_finite()) {
            return Err(GraphError::InvalidData(
                "series values must be finite".to_owned(),
            ));
        }

        Ok(Self {
            label: label.into(),
            values,
            colour: Self::DEFAULT_COLOUR,
            stroke: StrokeStyle::Solid,
            interpolation: Interpolation::Linear,
        })
    }

    #[must_use]
    pub fn with_colour(mut self, colour: Color) -> Self {
        self.colour = colour;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn colour(&self) -> Color {
        self.colour
    }

    #[must_use]
    pub fn stroke(&self) -> StrokeStyle {
        self.stroke
    }

    #[must_use]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }
}
