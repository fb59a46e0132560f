use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::shape::ShapeKind;

/// The active authoring mode picked from the tool menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    Erase,
    #[default]
    Line,
    Rectangle,
}

impl Tool {
    /// Menu order
    pub const ALL: [Tool; 3] = [Tool::Erase, Tool::Line, Tool::Rectangle];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Erase => "Erase",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
        }
    }

    /// The kind of shape this tool draws, or `None` for the eraser
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Erase => None,
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
        }
    }
}

/// Stroke colors offered by the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeColor {
    #[default]
    Black,
    Red,
    Green,
    Blue,
}

impl StrokeColor {
    /// Swatch order
    pub const ALL: [StrokeColor; 4] = [
        StrokeColor::Black,
        StrokeColor::Red,
        StrokeColor::Green,
        StrokeColor::Blue,
    ];

    /// Display value as a short CSS hex string
    pub fn hex(self) -> &'static str {
        match self {
            StrokeColor::Black => "#000",
            StrokeColor::Red => "#e00",
            StrokeColor::Green => "#0e0",
            StrokeColor::Blue => "#00e",
        }
    }

    /// Display value handed to the render backend
    pub fn color32(self) -> Color32 {
        match self {
            StrokeColor::Black => Color32::from_rgb(0x00, 0x00, 0x00),
            StrokeColor::Red => Color32::from_rgb(0xee, 0x00, 0x00),
            StrokeColor::Green => Color32::from_rgb(0x00, 0xee, 0x00),
            StrokeColor::Blue => Color32::from_rgb(0x00, 0x00, 0xee),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StrokeColor::Black => "Black",
            StrokeColor::Red => "Red",
            StrokeColor::Green => "Green",
            StrokeColor::Blue => "Blue",
        }
    }
}
