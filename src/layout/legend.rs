use std::fmt;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use crate::error::{GraphError, GraphResult};
use crate::layout::padding::PlotLengths;
use crate::render::{Color, StrokeStyle, TextMeasurer};

/// Inner padding applied around each legend entry.
pub const LEGEND_PADDING_PX: f64 = 6.0;

/// Edge of the plot the legend block occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl LegendPosition {
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    fn parse(text: &str) -> Option<Self> {
        match text {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

impl fmt::Display for LegendPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LegendPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LegendPosition {
    // Unrecognized values degrade to the default instead of failing the
    // whole configuration.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text).unwrap_or_else(|| {
            warn!(value = %text, "unrecognized legend position; falling back to `top`");
            Self::default()
        }))
    }
}

/// Where the legend block sits along its edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendAlignment {
    Start,
    #[default]
    Center,
    End,
}

impl LegendAlignment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }

    fn parse(text: &str) -> Option<Self> {
        match text {
            "start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" => Some(Self::End),
            _ => None,
        }
    }
}

impl fmt::Display for LegendAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LegendAlignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LegendAlignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text).unwrap_or_else(|| {
            warn!(value = %text, "unrecognized legend alignment; falling back to `center`");
            Self::default()
        }))
    }
}

/// Legend configuration group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LegendOptions {
    #[serde(default)]
    pub draw: bool,
    #[serde(default)]
    pub position: LegendPosition,
    #[serde(default)]
    pub alignment: LegendAlignment,
}

/// One legend row: a coloured box plus the series label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub colour: Color,
    pub stroke: StrokeStyle,
}

/// Footprint measured over all entries before any positioning.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendMetrics {
    pub position: LegendPosition,
    /// Total extent the block reserves along its layout axis.
    pub required_space: f64,
    /// Extent the block reserves across its layout axis; this is what feeds
    /// back into padding.
    pub thickness: f64,
    pub entry_spacing: Vec<f64>,
}

/// Measures every entry's footprint for the given edge.
///
/// Horizontal rows reserve `2 * padding + box + label width` per entry;
/// vertical columns reserve `box + padding` per entry with the block width
/// bounded by the longest label.
#[must_use]
pub fn measure_legend(
    entries: &[LegendEntry],
    position: LegendPosition,
    measurer: &dyn TextMeasurer,
    font_size: f64,
    font_family: &str,
) -> LegendMetrics {
    let box_size = font_size;
    let mut entry_spacing = Vec::with_capacity(entries.len());
    let mut longest_label = 0.0f64;

    for entry in entries {
        let width = measurer.measure(&entry.label, font_size, font_family);
        longest_label = longest_label.max(width);
        let spacing = if position.is_horizontal() {
            2.0 * LEGEND_PADDING_PX + box_size + width
        } else {
            box_size + LEGEND_PADDING_PX
        };
        entry_spacing.push(spacing);
    }

    let required_space = entry_spacing.iter().sum();
    let thickness = if entries.is_empty() {
        0.0
    } else if position.is_horizontal() {
        box_size + 2.0 * LEGEND_PADDING_PX
    } else {
        2.0 * LEGEND_PADDING_PX + box_size + longest_label
    };

    LegendMetrics {
        position,
        required_space,
        thickness,
        entry_spacing,
    }
}

/// Positioned legend block: measured footprint plus per-entry offsets along
/// the layout axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    pub position: LegendPosition,
    pub alignment: LegendAlignment,
    pub required_space: f64,
    pub thickness: f64,
    pub offsets: Vec<f64>,
}

/// Lays the legend out against the derived plot lengths.
///
/// The accumulated offset delta always equals the pre-measured
/// `required_space` total.
pub fn compute_legend_layout(
    entries: &[LegendEntry],
    position: LegendPosition,
    alignment: LegendAlignment,
    lengths: &PlotLengths,
    measurer: &dyn TextMeasurer,
    font_size: f64,
    font_family: &str,
) -> GraphResult<LegendLayout> {
    let metrics = measure_legend(entries, position, measurer, font_size, font_family);
    if metrics
        .entry_spacing
        .iter()
        .any(|spacing| !spacing.is_finite() || *spacing < 0.0)
    {
        return Err(GraphError::InvalidData(
            "legend entry measurements must be finite and >= 0".to_owned(),
        ));
    }

    let (leading, center, trailing) = if position.is_horizontal() {
        (lengths.x_begin, lengths.x_center, lengths.x_end)
    } else {
        (lengths.y_begin, lengths.y_center, lengths.y_end)
    };

    let start = match alignment {
        LegendAlignment::Start => leading,
        LegendAlignment::Center => center - metrics.required_space / 2.0,
        LegendAlignment::End => trailing - metrics.required_space,
    };

    let mut offsets = Vec::with_capacity(entries.len());
    let mut cursor = start;
    for spacing in &metrics.entry_spacing {
        offsets.push(cursor);
        cursor += spacing;
    }

    Ok(LegendLayout {
        position,
        alignment,
        required_space: metrics.required_space,
        thickness: metrics.thickness,
        offsets,
    })
}
