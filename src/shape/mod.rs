pub mod factory;

use crate::geometry::{Geometry, Point};
use crate::tools::StrokeColor;

pub use factory::ShapeFactory;

/// Discriminant of the shape union
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rectangle,
}

/// A drawn shape: geometry, stroke color and the backend's drawable for both.
///
/// Shapes are only built by [`ShapeFactory`], which regenerates `render_handle`
/// whenever geometry or color change. Nothing mutates a shape in place.
#[derive(Debug, Clone)]
pub struct Shape<H> {
    geometry: Geometry,
    color: StrokeColor,
    render_handle: H,
}

impl<H> Shape<H> {
    pub(crate) fn new(geometry: Geometry, color: StrokeColor, render_handle: H) -> Self {
        Self {
            geometry,
            color,
            render_handle,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Where the pointer went down; fixed for the life of the shape
    pub fn start(&self) -> Point {
        self.geometry.start()
    }

    /// Where the pointer was at the last update
    pub fn end(&self) -> Point {
        self.geometry.end()
    }

    pub fn color(&self) -> StrokeColor {
        self.color
    }

    /// Opaque drawable, only meaningful to the backend that produced it
    pub fn render_handle(&self) -> &H {
        &self.render_handle
    }
}
