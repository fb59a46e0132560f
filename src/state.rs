use crate::geometry::Point;
use crate::geometry::hit_testing::{erase_at, hits};
use crate::input::InputEvent;
use crate::renderer::RenderBackend;
use crate::shape::{Shape, ShapeFactory};
use crate::tools::{StrokeColor, Tool};

/// Whether a drag is in progress.
///
/// ```text
/// ┌──────┐  pointer down  ┌──────────┐
/// │ Idle ├───────────────►│ Dragging │
/// │      │◄───────────────┤          │
/// └──────┘   pointer up   └──────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// The last shape was created by this drag and still follows the pointer
        shape_in_progress: bool,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Owns the drawing and turns pointer events into shape edits.
///
/// Tool and color can be changed at any time, including in the middle of a drag.
/// Every transition runs to completion and never fails on odd event sequences:
/// a second pointer-down without a pointer-up is ignored, a move without a drag does nothing.
pub struct AuthoringSession<B: RenderBackend> {
    factory: ShapeFactory<B>,
    /// Paint order, oldest first
    shapes: Vec<Shape<B::Handle>>,
    tool: Tool,
    color: StrokeColor,
    drag: DragState,
}

impl<B: RenderBackend> AuthoringSession<B> {
    pub fn new(backend: B) -> Self {
        Self::with_selection(backend, Tool::default(), StrokeColor::default())
    }

    pub fn with_selection(backend: B, tool: Tool, color: StrokeColor) -> Self {
        Self {
            factory: ShapeFactory::new(backend),
            shapes: Vec::new(),
            tool,
            color,
            drag: DragState::Idle,
        }
    }

    pub fn shapes(&self) -> &[Shape<B::Handle>] {
        &self.shapes
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> StrokeColor {
        self.color
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn backend(&self) -> &B {
        self.factory.backend()
    }

    pub fn select_tool(&mut self, tool: Tool) {
        log::debug!("Tool changed: {:?} -> {:?}", self.tool, tool);
        self.tool = tool;
    }

    /// Only shapes created or updated from now on use the new color
    pub fn select_color(&mut self, color: StrokeColor) {
        log::debug!("Color changed: {:?} -> {:?}", self.color, color);
        self.color = color;
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { position } => self.pointer_down(position),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp => self.pointer_up(),
        }
    }

    pub fn pointer_down(&mut self, p: Point) {
        if self.drag.is_dragging() {
            log::warn!("Pointer down at {:?} while already dragging, ignored", p);
            return;
        }

        match self.tool {
            Tool::Erase => {
                self.drag = DragState::Dragging {
                    shape_in_progress: false,
                };
                self.erase(p);
            }
            tool => {
                let shape = match self.factory.create(tool, p, p, self.color) {
                    Ok(shape) => shape,
                    Err(err) => unreachable!("erase is never routed to the factory: {err}"),
                };
                log::debug!("Started {:?} at {:?}", shape.kind(), p);
                self.shapes.push(shape);
                self.drag = DragState::Dragging {
                    shape_in_progress: true,
                };
            }
        }
    }

    pub fn pointer_move(&mut self, p: Point) {
        let DragState::Dragging { shape_in_progress } = self.drag else {
            return;
        };

        if self.tool == Tool::Erase {
            self.erase(p);
            return;
        }

        // Switching from the eraser to a drawing tool mid-drag leaves nothing to extend
        if !shape_in_progress {
            return;
        }

        if let Some(last) = self.shapes.last_mut() {
            *last = self.factory.update(last, p, self.color);
        }
    }

    /// Ends the drag; the last shape stays exactly as it is, even if it has no length
    pub fn pointer_up(&mut self) {
        if let Some(shape) = self.shapes.last().filter(|_| self.in_progress()) {
            log::debug!(
                "Finished {:?} from {:?} to {:?}",
                shape.kind(),
                shape.start(),
                shape.end()
            );
        }
        self.drag = DragState::Idle;
    }

    /// Clear the surface and paint every shape, oldest first
    pub fn render(&self, surface: &mut B::Surface) {
        let backend = self.factory.backend();
        backend.clear(surface);
        for shape in &self.shapes {
            backend.paint(surface, shape.render_handle());
        }
    }

    fn in_progress(&self) -> bool {
        matches!(
            self.drag,
            DragState::Dragging {
                shape_in_progress: true
            }
        )
    }

    fn erase(&mut self, p: Point) {
        let drawn_shape_erased =
            self.in_progress() && self.shapes.last().is_some_and(|last| hits(last, p));

        let shapes = std::mem::take(&mut self.shapes);
        self.shapes = erase_at(shapes, p);

        // Erasing keeps order, so a surviving in-progress shape is still the last one
        if drawn_shape_erased {
            if let DragState::Dragging { shape_in_progress } = &mut self.drag {
                *shape_in_progress = false;
            }
        }
    }
}

impl<B: RenderBackend + std::fmt::Debug> std::fmt::Debug for AuthoringSession<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthoringSession")
            .field("shapes", &format!("<{} shapes>", self.shapes.len()))
            .field("tool", &self.tool)
            .field("color", &self.color)
            .field("drag", &self.drag)
            .field("backend", self.factory.backend())
            .finish()
    }
}
