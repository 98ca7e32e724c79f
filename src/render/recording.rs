use crate::render::{Color, LineRenderer};

/// One recorded draw instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    BezierCurveTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
    QuadraticCurveTo {
        cx: f64,
        cy: f64,
        x: f64,
        y: f64,
    },
    SetLineDash {
        pattern: Vec<f64>,
    },
    Stroke {
        colour: Color,
        width: f64,
    },
    DrawCircle {
        x: f64,
        y: f64,
        radius: f64,
        colour: Color,
    },
}

/// Backend that records the command stream instead of drawing.
///
/// Used by tests and headless engine runs so geometry output can be asserted
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Stroke { .. }))
            .count()
    }

    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| {
                matches!(
                    command,
                    DrawCommand::BezierCurveTo { .. } | DrawCommand::QuadraticCurveTo { .. }
                )
            })
            .count()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::LineTo { .. }))
            .count()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::DrawCircle { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl LineRenderer for RecordingRenderer {
    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.commands.push(DrawCommand::BezierCurveTo {
            c1x,
            c1y,
            c2x,
            c2y,
            x,
            y,
        });
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.commands.push(DrawCommand::QuadraticCurveTo { cx, cy, x, y });
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.commands.push(DrawCommand::SetLineDash {
            pattern: pattern.to_vec(),
        });
    }

    fn stroke(&mut self, colour: Color, width: f64) {
        self.commands.push(DrawCommand::Stroke { colour, width });
    }

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, colour: Color) {
        self.commands.push(DrawCommand::DrawCircle {
            x,
            y,
            radius,
            colour,
        });
    }
}
