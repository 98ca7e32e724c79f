use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Default curve tightness for cubic interpolation.
pub const DEFAULT_TENSION: f64 = 0.2;

/// Control-point pair bending a cubic segment smoothly through one interior
/// data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub prev: Point,
    pub next: Point,
}

/// Computes Catmull-Rom control-point pairs for each interior point.
///
/// The tangent at point `i` is proportional to `point[i+1] - point[i-1]`,
/// scaled by `tension`. Returns exactly `N - 2` pairs, index-aligned to
/// points `1..=N-2`. Fewer than three points yield an empty result so the
/// caller falls back to straight segments.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
#[must_use]
pub fn spline_control_points(points: &[Point], tension: f64) -> Vec<ControlPoint> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut pairs = Vec::with_capacity(points.len() - 2);
    for window in points.windows(3) {
        let (before, current, after) = (window[0], window[1], window[2]);
        let tangent_x = (after.x - before.x) * tension;
        let tangent_y = (after.y - before.y) * tension;
        pairs.push(ControlPoint {
            prev: Point::new(current.x - tangent_x, current.y - tangent_y),
            next: Point::new(current.x + tangent_x, current.y + tangent_y),
        });
    }
    pairs
}
