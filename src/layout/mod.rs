pub mod engine;
pub mod legend;
pub mod padding;

pub use engine::{LayoutOptions, PlotLayout, compute_plot_layout};
pub use legend::{
    LEGEND_PADDING_PX, LegendAlignment, LegendEntry, LegendLayout, LegendMetrics, LegendOptions,
    LegendPosition, compute_legend_layout, measure_legend,
};
pub use padding::{DEFAULT_TEXT_PADDING_PX, Padding, PlotLengths};
