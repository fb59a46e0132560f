pub mod hit_testing;

use egui::Pos2;

use crate::shape::ShapeKind;

/// A position on the canvas in surface-local pixels
pub type Point = Pos2;

/// Kind-specific geometric descriptor of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Segment from `start` to `end`
    Line { start: Point, end: Point },
    /// Axis-aligned box spanned by two opposite corners.
    ///
    /// The corners are kept exactly as dragged: `start` is where the pointer went
    /// down and `end` follows the pointer, so `start` may lie right of or below `end`.
    Rectangle { start: Point, end: Point },
}

impl Geometry {
    pub fn new(kind: ShapeKind, start: Point, end: Point) -> Self {
        match kind {
            ShapeKind::Line => Geometry::Line { start, end },
            ShapeKind::Rectangle => Geometry::Rectangle { start, end },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Line { .. } => ShapeKind::Line,
            Geometry::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    pub fn start(&self) -> Point {
        match *self {
            Geometry::Line { start, .. } | Geometry::Rectangle { start, .. } => start,
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            Geometry::Line { end, .. } | Geometry::Rectangle { end, .. } => end,
        }
    }

    /// Same geometry with the end point moved to `end`
    pub fn with_end(&self, end: Point) -> Self {
        Geometry::new(self.kind(), self.start(), end)
    }
}
