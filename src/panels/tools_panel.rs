use crate::SketchApp;
use crate::tools::{StrokeColor, Tool};

const SWATCH_SIZE: f32 = 24.0;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(140.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.session().tool();
            for tool in Tool::ALL {
                if ui.radio(active_tool == tool, tool.label()).clicked() && active_tool != tool {
                    log::info!("Tool selected from UI: {}", tool.label());
                    app.session_mut().select_tool(tool);
                }
            }

            ui.separator();
            ui.heading("Color");

            let active_color = app.session().color();
            ui.horizontal_wrapped(|ui| {
                for color in StrokeColor::ALL {
                    if swatch(ui, color, active_color == color).clicked() && active_color != color {
                        log::info!("Color selected from UI: {} ({})", color.name(), color.hex());
                        app.session_mut().select_color(color);
                    }
                }
            });

            ui.separator();
            ui.label(format!("Shapes: {}", app.session().shapes().len()));
        });
}

fn swatch(ui: &mut egui::Ui, color: StrokeColor, selected: bool) -> egui::Response {
    let outline = if selected {
        egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
    } else {
        egui::Stroke::new(1.0, egui::Color32::from_gray(120))
    };

    ui.add(
        egui::Button::new("")
            .fill(color.color32())
            .stroke(outline)
            .min_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE)),
    )
    .on_hover_text(color.name())
}
