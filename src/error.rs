use thiserror::Error;

use crate::tools::Tool;

/// The shape factory was asked to build a shape with a tool that never produces one.
///
/// The session routes [`Tool::Erase`] to the eraser, so seeing this error means a
/// transition guard is broken.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("tool {tool:?} cannot create shapes")]
pub struct UnsupportedToolError {
    pub tool: Tool,
}
