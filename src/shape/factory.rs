use super::Shape;
use crate::error::UnsupportedToolError;
use crate::geometry::{Geometry, Point};
use crate::renderer::RenderBackend;
use crate::tools::{StrokeColor, Tool};

/// Builds shapes and keeps their render handles in sync with the backend
#[derive(Debug)]
pub struct ShapeFactory<B> {
    backend: B,
}

impl<B: RenderBackend> ShapeFactory<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Create a new shape spanning `p1` to `p2`.
    ///
    /// On pointer-down both points are the pointer position, giving a zero-length shape.
    pub fn create(
        &self,
        tool: Tool,
        p1: Point,
        p2: Point,
        color: StrokeColor,
    ) -> Result<Shape<B::Handle>, UnsupportedToolError> {
        let kind = tool.shape_kind().ok_or(UnsupportedToolError { tool })?;
        Ok(self.build(Geometry::new(kind, p1, p2), color))
    }

    /// Returns a copy of `shape` whose end point is `p`, drawn in `color`.
    ///
    /// The start point and kind are never altered. Rectangles are not normalized.
    pub fn update(
        &self,
        shape: &Shape<B::Handle>,
        p: Point,
        color: StrokeColor,
    ) -> Shape<B::Handle> {
        self.build(shape.geometry().with_end(p), color)
    }

    fn build(&self, geometry: Geometry, color: StrokeColor) -> Shape<B::Handle> {
        let handle = self.backend.generate(&geometry, color.color32());
        Shape::new(geometry, color, handle)
    }
}
