//! linegraph-rs: line chart layout and geometry engine.
//!
//! This crate turns numeric series plus a configuration value into tick
//! scales, plot geometry, cubic-spline control points and a positioned
//! legend, then emits backend-agnostic draw instructions. Rasterization is
//! left to `LineRenderer` implementations supplied by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod layout;
pub mod render;
pub mod telemetry;

pub use api::{GraphConfig, GraphEngine};
pub use error::{GraphError, GraphResult};
