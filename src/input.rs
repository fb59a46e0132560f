use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events delivered to the authoring session.
///
/// Positions are surface-local: `(0, 0)` is the top-left corner of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved, whether or not a button is held
    PointerMove { position: Pos2 },
    /// Primary button released, wherever the pointer is
    PointerUp,
}

/// Pointer state for one frame, reduced to what the canvas cares about
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSample {
    /// Screen position, `None` when the pointer is outside the window
    pub hover_pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

/// Handles converting raw egui input into canvas [`InputEvent`]s
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Read this frame's primary-button state from egui and translate it
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let sample = ctx.input(|input| PointerSample {
            hover_pos: input.pointer.hover_pos(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
        });
        self.process_sample(sample)
    }

    pub fn process_sample(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if let Some(pos) = sample.hover_pos {
            let moved = self.last_pointer_pos != Some(pos);
            self.last_pointer_pos = Some(pos);

            if sample.pressed && self.canvas_rect.contains(pos) {
                events.push(InputEvent::PointerDown {
                    position: self.to_local(pos),
                });
            } else if moved {
                events.push(InputEvent::PointerMove {
                    position: self.to_local(pos),
                });
            }
        } else {
            self.last_pointer_pos = None;
        }

        if sample.released {
            events.push(InputEvent::PointerUp);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(pos2(100.0, 50.0), vec2(400.0, 300.0)))
    }

    #[test]
    fn test_positions_are_surface_local() {
        let mut input = handler();
        let events = input.process_sample(PointerSample {
            hover_pos: Some(pos2(110.0, 70.0)),
            pressed: true,
            released: false,
        });

        assert_eq!(
            events,
            vec![InputEvent::PointerDown {
                position: pos2(10.0, 20.0)
            }]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = handler();
        let events = input.process_sample(PointerSample {
            hover_pos: Some(pos2(20.0, 20.0)),
            pressed: true,
            released: false,
        });

        assert!(!events.iter().any(|e| matches!(e, InputEvent::PointerDown { .. })));
    }

    #[test]
    fn test_move_only_when_position_changes() {
        let mut input = handler();
        let sample = PointerSample {
            hover_pos: Some(pos2(200.0, 200.0)),
            ..Default::default()
        };

        assert_eq!(input.process_sample(sample).len(), 1);
        assert!(input.process_sample(sample).is_empty());
    }

    #[test]
    fn test_release_always_reports_pointer_up() {
        let mut input = handler();
        let events = input.process_sample(PointerSample {
            hover_pos: None,
            pressed: false,
            released: true,
        });

        assert_eq!(events, vec![InputEvent::PointerUp]);
    }
}
