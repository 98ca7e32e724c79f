use serde::{Deserialize, Serialize};

use crate::core::CanvasSize;
use crate::error::{GraphError, GraphResult};

/// Gap between a label and the geometry it annotates.
pub const DEFAULT_TEXT_PADDING_PX: f64 = 4.0;

/// Pixel margins reserved around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub text_padding: f64,
}

impl Padding {
    #[must_use]
    pub fn uniform(base: f64) -> Self {
        Self {
            top: base,
            left: base,
            right: base,
            bottom: base,
            text_padding: DEFAULT_TEXT_PADDING_PX,
        }
    }

    pub fn validate(&self) -> GraphResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
            ("text", self.text_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "{side} padding must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Derived begin/end/center coordinates the plot occupies.
///
/// Lengths are always re-derived from the current padding and canvas size;
/// they are never cached across passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLengths {
    pub x_begin: f64,
    pub y_begin: f64,
    pub x_end: f64,
    pub y_end: f64,
    pub x_center: f64,
    pub y_center: f64,
}

impl PlotLengths {
    pub fn derive(canvas: CanvasSize, padding: &Padding) -> GraphResult<Self> {
        if !canvas.is_valid() {
            return Err(GraphError::InvalidCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }
        padding.validate()?;

        let x_begin = padding.left;
        let x_end = canvas.width_px() - padding.right;
        let y_begin = padding.top;
        let y_end = canvas.height_px() - padding.bottom;
        if x_end <= x_begin || y_end <= y_begin {
            return Err(GraphError::InvalidData(
                "padding leaves no plottable area".to_owned(),
            ));
        }

        Ok(Self {
            x_begin,
            y_begin,
            x_end,
            y_end,
            x_center: (x_begin + x_end) / 2.0,
            y_center: (y_begin + y_end) / 2.0,
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_end - self.x_begin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_end - self.y_begin
    }
}
