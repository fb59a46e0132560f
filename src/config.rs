use egui::Color32;
use serde::{Deserialize, Serialize};

/// Settings for the hand-drawn look of the canvas.
///
/// Stored with the rest of the app state; missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// 0 draws clean lines, larger values wobble more
    pub roughness: f32,
    /// How far the middle of an edge may bend away from the straight line
    pub bowing: f32,
    pub stroke_width: f32,
    /// Base seed mixed into every drawable so the same shape always looks the same
    pub seed: u64,
    /// Canvas background as RGB
    pub background: [u8; 3],
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            stroke_width: 1.5,
            seed: 42,
            background: [255, 255, 255],
        }
    }
}

impl SketchConfig {
    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }
}
