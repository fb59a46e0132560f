use crate::config::SketchConfig;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::SketchRenderer;
use crate::state::AuthoringSession;
use crate::tools::{StrokeColor, Tool};

/// What survives a restart: the menu selection and the sketch look, never the drawing.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Preferences {
    pub tool: Tool,
    pub color: StrokeColor,
    pub sketch: SketchConfig,
}

#[derive(Debug)]
pub struct SketchApp {
    session: AuthoringSession<SketchRenderer>,
    input: InputHandler,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::from_preferences(Preferences::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let preferences = cc
            .storage
            .and_then(|storage| eframe::get_value::<Preferences>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!(
            "Starting with tool {:?} and color {:?}",
            preferences.tool,
            preferences.color
        );
        Self::from_preferences(preferences)
    }

    pub fn from_preferences(preferences: Preferences) -> Self {
        let renderer = SketchRenderer::new(preferences.sketch);
        Self {
            session: AuthoringSession::with_selection(
                renderer,
                preferences.tool,
                preferences.color,
            ),
            input: InputHandler::new(egui::Rect::NOTHING),
        }
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            tool: self.session.tool(),
            color: self.session.color(),
            sketch: self.session.backend().config().clone(),
        }
    }

    pub fn session(&self) -> &AuthoringSession<SketchRenderer> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut AuthoringSession<SketchRenderer> {
        &mut self.session
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.preferences());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
