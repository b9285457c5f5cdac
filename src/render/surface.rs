//! The 2-D drawing target the renderers paint onto.
//!
//! Coordinates are logical surface units (the gallery uses 800×400); a
//! surface implementation maps them onto its own pixels. The primitive set
//! is the handful of canvas operations the five diagrams use.

use egui::{Pos2, Rect};

use super::color::Rgba;

/// Logical surface dimensions, fixed at attach time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Inclusive bounds test used by the particle cull rules.
    pub fn contains(&self, p: Pos2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(800.0, 400.0)
    }
}

/// How a line or rect is colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ink {
    Solid(Rgba),
    /// Two-stop linear gradient along the primitive's main axis: from the
    /// line's start to its end, or from a rect's left edge to its right edge.
    Ramp(Rgba, Rgba),
}

pub trait Surface {
    /// Wipe the previous frame.
    fn clear(&mut self);

    fn stroke_line(&mut self, from: Pos2, to: Pos2, width: f32, ink: Ink);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Rgba);

    /// Radial glow: `color` at the center fading linearly to transparent at
    /// `reach`, clipped to a disc of `radius`.
    fn fill_glow(&mut self, center: Pos2, radius: f32, reach: f32, color: Rgba);

    fn fill_rect(&mut self, rect: Rect, ink: Ink);

    /// Left-aligned text with its baseline at `pos`.
    fn text(&mut self, pos: Pos2, text: &str, size: f32, color: Rgba);
}
