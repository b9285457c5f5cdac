//! `GalleryApp`: the top-level egui application state.
//!
//! This module declares the `GalleryApp` struct and its `eframe::App` impl.
//! Drawing is split across the sibling sub-modules:
//!
//! - `gallery`: variant cards and the animated canvas
//! - `analysis`: file analysis side panel

pub mod gallery;
pub mod analysis;

use eframe::egui;

use algo_gallery::analysis::{AnalysisResult, FileMetadata};
use algo_gallery::engine::{AnimationLoop, EngineConfig, RepaintScheduler};
use algo_gallery::scene::variant::Variant;

// ─── Application state ───────────────────────────────────────────────────────

pub struct GalleryApp {
    pub engine: AnimationLoop<RepaintScheduler>,
    pub show_analysis: bool,
    pub file_input: String,
    pub report: Option<(FileMetadata, AnalysisResult)>,
    pub report_error: Option<String>,
}

impl GalleryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial: Option<&str>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let scheduler = RepaintScheduler::new(cc.egui_ctx.clone());
        let mut engine = AnimationLoop::new(EngineConfig::default(), scheduler);
        engine.select(Variant::NeuralNetwork);
        if let Some(id) = initial {
            // The default keeps running on an unknown id.
            if let Err(e) = engine.select_id(id) {
                log::info!("ignoring initial selection: {e}");
            }
        }

        Self {
            engine,
            show_analysis: true,
            file_input: String::new(),
            report: None,
            report_error: None,
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Variant cards
        egui::TopBottomPanel::top("gallery").show(ctx, |ui| {
            self.draw_selector(ui);
        });

        // Analysis side panel
        if self.show_analysis {
            egui::SidePanel::right("analysis")
                .default_width(300.0)
                .show(ctx, |ui| {
                    self.draw_analysis_panel(ui);
                });
        }

        // Animated diagram
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });
    }
}
