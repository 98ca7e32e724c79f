use serde::{Deserialize, Serialize};

use crate::core::axis::ScaleOptions;
use crate::core::axis_set::GridOptions;
use crate::error::{GraphError, GraphResult};
use crate::layout::legend::LegendOptions;

/// Chart title options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleOptions {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default = "default_title_font_size")]
    pub font_size: f64,
}

impl Default for TitleOptions {
    fn default() -> Self {
        Self {
            text: None,
            font_size: default_title_font_size(),
        }
    }
}

/// Error-degradation switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LeniencyOptions {
    /// Degrade out-of-canvas geometry to a logged warning and a skipped draw
    /// call instead of failing the pass.
    #[serde(default)]
    pub bypass_geometry: bool,
}

/// Full recognized configuration surface.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Every recognized key is
/// enumerated here and validated once at engine construction; nothing is
/// merged in piecemeal later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub grid: GridOptions,
    #[serde(default)]
    pub scale: ScaleOptions,
    #[serde(default)]
    pub legend: LegendOptions,
    #[serde(default)]
    pub title: TitleOptions,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default)]
    pub leniency: LeniencyOptions,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            grid: GridOptions::default(),
            scale: ScaleOptions::default(),
            legend: LegendOptions::default(),
            title: TitleOptions::default(),
            padding: default_padding(),
            label_font_size: default_label_font_size(),
            font_family: default_font_family(),
            leniency: LeniencyOptions::default(),
        }
    }
}

impl GraphConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridOptions) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: ScaleOptions) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendOptions) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.title.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_label_font_size(mut self, label_font_size: f64) -> Self {
        self.label_font_size = label_font_size;
        self
    }

    #[must_use]
    pub fn with_leniency(mut self, leniency: LeniencyOptions) -> Self {
        self.leniency = leniency;
        self
    }

    /// Validates the whole surface once.
    ///
    /// Zero tick counts are fatal; malformed enum strings never reach this
    /// point because they already degraded to defaults during deserialization.
    pub fn validate(&self) -> GraphResult<()> {
        if self.scale.x.ticks == 0 {
            return Err(GraphError::InvalidConfig(
                "scale.x.ticks must be greater than zero".to_owned(),
            ));
        }
        if self.scale.y.ticks == 0 {
            return Err(GraphError::InvalidConfig(
                "scale.y.ticks must be greater than zero".to_owned(),
            ));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(GraphError::InvalidConfig(
                "padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.label_font_size.is_finite() || self.label_font_size <= 0.0 {
            return Err(GraphError::InvalidConfig(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.title.font_size.is_finite() || self.title.font_size <= 0.0 {
            return Err(GraphError::InvalidConfig(
                "title font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_padding() -> f64 {
    8.0
}

fn default_label_font_size() -> f64 {
    12.0
}

fn default_title_font_size() -> f64 {
    16.0
}

fn default_font_family() -> String {
    "sans-serif".to_owned()
}
