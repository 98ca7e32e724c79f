mod measure;
mod primitives;
mod recording;

pub use measure::{FixedWidthMeasurer, TextMeasurer};
pub use primitives::{Color, StrokeStyle};
pub use recording::{DrawCommand, RecordingRenderer};

/// Contract implemented by any drawing backend.
///
/// The engine emits geometry and style instructions only; it never touches
/// raw pixels, fonts or host surfaces.
pub trait LineRenderer {
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    /// Sets the dash pattern for subsequent strokes; an empty slice is solid.
    fn set_line_dash(&mut self, pattern: &[f64]);
    /// Strokes the current path and starts a new one.
    fn stroke(&mut self, colour: Color, width: f64);
    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, colour: Color);
}
