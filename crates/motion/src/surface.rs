// =============================================================================
// Folio Motion - Drawing Surface
// =============================================================================

use crate::types::{Hsla, Point};

/// Minimal immediate-mode 2D drawing target.
pub trait Surface {
    /// Match the backing store to the viewport.
    fn resize(&mut self, width: f64, height: f64);

    fn clear(&mut self);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Hsla);

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Hsla);
}

/// A recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Resize { width: f64, height: f64 },
    Clear,
    Circle { center: Point, radius: f64, color: Hsla },
    Line { from: Point, to: Point, width: f64, color: Hsla },
}

/// Surface that records every call, for tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since the last `Clear`.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.commands[start..]
    }

    pub fn circles(&self) -> usize {
        self.last_frame()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn lines(&self) -> usize {
        self.last_frame()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Hsla) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Hsla) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }
}

/// Shared surfaces let the owner keep inspecting what a renderer drew.
impl<S: Surface> Surface for std::rc::Rc<std::cell::RefCell<S>> {
    fn resize(&mut self, width: f64, height: f64) {
        self.borrow_mut().resize(width, height);
    }

    fn clear(&mut self) {
        self.borrow_mut().clear();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Hsla) {
        self.borrow_mut().fill_circle(center, radius, color);
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Hsla) {
        self.borrow_mut().stroke_line(from, to, width, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_frame_counts() {
        let mut surface = RecordingSurface::new();
        let color = Hsla::new(0.0, 0.0, 0.0, 1.0);
        surface.clear();
        surface.fill_circle(Point::new(1.0, 1.0), 2.0, color);
        surface.clear();
        surface.fill_circle(Point::new(1.0, 1.0), 2.0, color);
        surface.fill_circle(Point::new(3.0, 1.0), 2.0, color);
        surface.stroke_line(Point::new(1.0, 1.0), Point::new(3.0, 1.0), 0.5, color);

        assert_eq!(surface.circles(), 2);
        assert_eq!(surface.lines(), 1);
    }
}
