#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod tools;

pub use app::{Preferences, SketchApp};
pub use config::SketchConfig;
pub use error::UnsupportedToolError;
pub use geometry::{Geometry, Point};
pub use input::{InputEvent, InputHandler};
pub use renderer::{RenderBackend, SketchDrawable, SketchRenderer, SketchSurface};
pub use shape::{Shape, ShapeFactory, ShapeKind};
pub use state::{AuthoringSession, DragState};
pub use tools::{StrokeColor, Tool};
