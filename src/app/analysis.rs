//! File analysis side panel for `GalleryApp`.
//!
//! The report is a deterministic function of the file's name and size; the
//! panel only stats the file.

use eframe::egui;
use algo_gallery::analysis::{analyze, AnalysisResult, FileMetadata};

use super::GalleryApp;
use crate::ui;

impl GalleryApp {
    pub fn draw_analysis_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Analysis");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.file_input)
                    .hint_text("Path to scan or lab file...")
                    .desired_width(ui.available_width() - 72.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Analyze").clicked() || submitted {
                self.run_analysis();
            }
        });

        if let Some(err) = &self.report_error {
            ui.colored_label(egui::Color32::from_rgb(220, 38, 38), err.as_str());
        }

        let Some((meta, report)) = &self.report else {
            return;
        };

        ui.separator();
        ui.label(egui::RichText::new(ui::truncate_str(&meta.name, 40)).strong());
        ui.weak(format!("{} · {} bytes", meta.mime_type, meta.byte_size));
        ui.add_space(6.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            draw_report(ui, report);
        });
    }

    fn run_analysis(&mut self) {
        let path = self.file_input.trim();
        if path.is_empty() {
            return;
        }
        match FileMetadata::from_path(path) {
            Ok(meta) => {
                let report = analyze(&meta);
                log::info!(
                    "analyzed {}: risk {} ({})",
                    meta.name,
                    report.risk,
                    ui::percent(report.ckd_probability)
                );
                self.report = Some((meta, report));
                self.report_error = None;
            }
            Err(e) => {
                log::warn!("cannot read {path}: {e}");
                self.report_error = Some(format!("{path}: {e}"));
            }
        }
    }
}

fn draw_report(ui: &mut egui::Ui, r: &AnalysisResult) {
    egui::Grid::new("findings").num_columns(2).striped(true).show(ui, |ui| {
        ui.label("CKD probability");
        ui.colored_label(ui::risk_color(r.risk), ui::percent(r.ckd_probability));
        ui.end_row();

        ui.label("Risk");
        ui.colored_label(ui::risk_color(r.risk), r.risk.to_string());
        ui.end_row();

        ui.label("Confidence");
        ui.label(ui::percent(r.confidence));
        ui.end_row();

        if r.is_image {
            for (name, flag) in [
                ("Swelling", r.has_swelling),
                ("Shrinkage", r.has_shrinkage),
                ("Pores", r.has_pores),
            ] {
                ui.label(name);
                ui.label(ui::detected(flag));
                ui.end_row();
            }
        }
    });

    if !r.other_issues.is_empty() {
        bullet_list(ui, "Other findings", &r.other_issues);
    }

    if let Some(params) = &r.parameters {
        ui.add_space(6.0);
        ui.strong("Parameters");
        egui::Grid::new("parameters").num_columns(2).striped(true).show(ui, |ui| {
            for p in params {
                ui.label(p.name).on_hover_text(p.description.as_str());
                ui.colored_label(ui::status_color(p.status), format!("{} ({})", p.value, p.status));
                ui.end_row();
            }
        });
    }

    bullet_list(ui, "Recommendations", &r.recommendations);
    bullet_list(ui, "Diet", &r.dietary_recommendations);
    bullet_list(ui, "Lifestyle", &r.lifestyle_recommendations);
}

fn bullet_list(ui: &mut egui::Ui, title: &str, items: &[&str]) {
    ui.add_space(6.0);
    ui.strong(title);
    for item in items {
        ui.label(format!("• {item}"));
    }
}
