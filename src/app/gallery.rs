//! Variant cards and the animated canvas for `GalleryApp`.

use eframe::egui;
use algo_gallery::render::painter::PainterSurface;
use algo_gallery::scene::variant::Variant;

use super::GalleryApp;
use crate::ui;

impl GalleryApp {
    /// Render the strip of variant cards plus the run status.
    pub fn draw_selector(&mut self, ui: &mut egui::Ui) {
        let current = self.engine.status().map(|(v, _)| v);

        ui.horizontal_wrapped(|ui| {
            ui.add_space(4.0);
            for variant in Variant::ALL {
                let label = egui::RichText::new(variant.title())
                    .strong()
                    .color(ui::accent(variant));
                let response = ui
                    .selectable_label(current == Some(variant), label)
                    .on_hover_text(variant.description());
                if response.clicked() {
                    self.engine.select(variant);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.toggle_value(&mut self.show_analysis, "Analysis");
                match self.engine.status() {
                    Some((variant, frame)) => {
                        ui.weak(format!("{variant} · frame {frame}"));
                    }
                    None => {
                        ui.weak("idle");
                    }
                }
            });
        });
    }

    /// Render the selected diagram's heading and canvas, driving one frame.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        if let Some((variant, _)) = self.engine.status() {
            ui.heading(variant.title());
            ui.label(variant.description());
            ui.add_space(8.0);
        }

        let logical = self.engine.config().surface;
        let avail = ui.available_size();
        let width = avail.x.min(avail.y * logical.width / logical.height);
        if width < 1.0 {
            // Minimized or squeezed to nothing: frames are skipped, not run.
            self.engine.detach_surface();
            return;
        }
        self.engine.attach_surface(logical);

        let size = egui::vec2(width, width * logical.height / logical.width);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let background = self.engine.config().background;
        let mut surface = PainterSurface::fit(&painter, response.rect, logical, background);

        if !self.engine.pump(&mut surface) {
            self.engine.redraw(&mut surface);
        }
    }
}
