//! Headless surface that records draw calls instead of rasterizing them.
//!
//! Used wherever no GPU-backed painter exists: unit tests, and hosts that
//! only need to know *what* would have been painted.

use egui::{Pos2, Rect};

use super::color::Rgba;
use super::surface::{Ink, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line { from: Pos2, to: Pos2, width: f32, ink: Ink },
    Circle { center: Pos2, radius: f32, color: Rgba },
    Glow { center: Pos2, radius: f32, reach: f32, color: Rgba },
    Rect { rect: Rect, ink: Ink },
    Text { pos: Pos2, text: String, size: f32, color: Rgba },
}

#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames painted so far (each frame opens with a clear).
    pub fn frames(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear))
            .count()
    }

    /// Commands of the most recent frame, starting at its `Clear`.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Glow commands of the most recent frame, in paint order.
    pub fn last_glows(&self) -> Vec<(Pos2, f32, f32)> {
        self.last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Glow { center, radius, reach, .. } => Some((*center, *radius, *reach)),
                _ => None,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, width: f32, ink: Ink) {
        self.commands.push(DrawCommand::Line { from, to, width, ink });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn fill_glow(&mut self, center: Pos2, radius: f32, reach: f32, color: Rgba) {
        self.commands.push(DrawCommand::Glow { center, radius, reach, color });
    }

    fn fill_rect(&mut self, rect: Rect, ink: Ink) {
        self.commands.push(DrawCommand::Rect { rect, ink });
    }

    fn text(&mut self, pos: Pos2, text: &str, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_owned(),
            size,
            color,
        });
    }
}
