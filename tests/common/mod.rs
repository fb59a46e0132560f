#![allow(dead_code)]

use std::cell::Cell;

use egui::Color32;
use sketch_board::{Geometry, RenderBackend};

/// Handle that remembers what it was generated from
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedHandle {
    /// Order of generation, to tell fresh handles from reused ones
    pub serial: usize,
    pub geometry: Geometry,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Clear,
    Paint(RecordedHandle),
}

/// Backend that paints into a log instead of pixels
#[derive(Debug, Default)]
pub struct RecordingBackend {
    generated: Cell<usize>,
}

impl RecordingBackend {
    pub fn generated(&self) -> usize {
        self.generated.get()
    }
}

impl RenderBackend for RecordingBackend {
    type Handle = RecordedHandle;
    type Surface = Vec<PaintOp>;

    fn generate(&self, geometry: &Geometry, color: Color32) -> RecordedHandle {
        let serial = self.generated.get();
        self.generated.set(serial + 1);
        RecordedHandle {
            serial,
            geometry: *geometry,
            color,
        }
    }

    fn clear(&self, surface: &mut Vec<PaintOp>) {
        surface.push(PaintOp::Clear);
    }

    fn paint(&self, surface: &mut Vec<PaintOp>, handle: &RecordedHandle) {
        surface.push(PaintOp::Paint(handle.clone()));
    }
}
