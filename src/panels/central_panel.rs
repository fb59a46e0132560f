use crate::SketchApp;
use crate::renderer::SketchSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        // Handle input
        let input = app.input_mut();
        input.set_canvas_rect(canvas_rect);
        for event in input.process_input(ctx) {
            app.session_mut().handle_event(&event);
        }

        // Render the canvas
        let mut surface = SketchSurface::new(painter, canvas_rect);
        app.session().render(&mut surface);
    });
}
