//! egui Painter-backed surface.
//!
//! Maps logical surface units onto a screen rect (uniform scale, anchored at
//! the rect's top-left) and emulates the canvas gradients with vertex-colored
//! meshes: a quad per gradient line or rect, a triangle fan per glow.

use egui::epaint::Mesh;
use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Shape, Stroke, Vec2};

use super::color::Rgba;
use super::surface::{Ink, Surface, SurfaceSize};

/// Segments per glow fan. Glows are at most ~25 units across, so this is
/// visually round at any sane zoom.
const GLOW_SEGMENTS: usize = 32;

pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    scale: f32,
    background: Color32,
}

impl<'a> PainterSurface<'a> {
    /// Fit a logical surface of `size` into `screen` (letterboxed, top-left).
    pub fn fit(painter: &'a egui::Painter, screen: Rect, size: SurfaceSize, background: Rgba) -> Self {
        let scale = (screen.width() / size.width)
            .min(screen.height() / size.height)
            .max(f32::EPSILON);
        Self {
            painter,
            origin: screen.min,
            scale,
            background: to_color32(background),
        }
    }

    #[inline]
    fn map(&self, p: Pos2) -> Pos2 {
        self.origin + p.to_vec2() * self.scale
    }

    fn map_rect(&self, r: Rect) -> Rect {
        Rect::from_min_max(self.map(r.min), self.map(r.max))
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        // egui repaints from scratch every frame; clearing only needs to lay
        // down the canvas background under this frame's shapes.
        self.painter
            .rect_filled(self.painter.clip_rect(), Rounding::ZERO, self.background);
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, width: f32, ink: Ink) {
        let (a, b) = (self.map(from), self.map(to));
        let w = (width * self.scale).max(0.5);
        match ink {
            Ink::Solid(c) => {
                self.painter.line_segment([a, b], Stroke::new(w, to_color32(c)));
            }
            Ink::Ramp(c0, c1) => {
                let dir = b - a;
                if dir.length_sq() <= f32::EPSILON {
                    return;
                }
                let n = dir.normalized().rot90() * (w * 0.5);
                let mut mesh = Mesh::default();
                mesh.colored_vertex(a + n, to_color32(c0));
                mesh.colored_vertex(a - n, to_color32(c0));
                mesh.colored_vertex(b + n, to_color32(c1));
                mesh.colored_vertex(b - n, to_color32(c1));
                mesh.add_triangle(0, 1, 2);
                mesh.add_triangle(1, 2, 3);
                self.painter.add(Shape::mesh(mesh));
            }
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.map(center), radius * self.scale, to_color32(color));
    }

    fn fill_glow(&mut self, center: Pos2, radius: f32, reach: f32, color: Rgba) {
        if radius <= 0.0 || reach <= 0.0 {
            return;
        }
        let c = self.map(center);
        let r = radius.min(reach) * self.scale;
        let rim = color.lerp(color.fade(0.0), radius / reach);

        let mut mesh = Mesh::default();
        mesh.colored_vertex(c, to_color32(color));
        for i in 0..GLOW_SEGMENTS {
            let angle = i as f32 / GLOW_SEGMENTS as f32 * std::f32::consts::TAU;
            mesh.colored_vertex(c + Vec2::angled(angle) * r, to_color32(rim));
        }
        for i in 0..GLOW_SEGMENTS as u32 {
            let next = (i + 1) % GLOW_SEGMENTS as u32;
            mesh.add_triangle(0, 1 + i, 1 + next);
        }
        self.painter.add(Shape::mesh(mesh));
    }

    fn fill_rect(&mut self, rect: Rect, ink: Ink) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let r = self.map_rect(rect);
        match ink {
            Ink::Solid(c) => {
                self.painter.rect_filled(r, Rounding::ZERO, to_color32(c));
            }
            Ink::Ramp(c0, c1) => {
                let mut mesh = Mesh::default();
                mesh.colored_vertex(r.left_top(), to_color32(c0));
                mesh.colored_vertex(r.left_bottom(), to_color32(c0));
                mesh.colored_vertex(r.right_top(), to_color32(c1));
                mesh.colored_vertex(r.right_bottom(), to_color32(c1));
                mesh.add_triangle(0, 1, 2);
                mesh.add_triangle(1, 2, 3);
                self.painter.add(Shape::mesh(mesh));
            }
        }
    }

    fn text(&mut self, pos: Pos2, text: &str, size: f32, color: Rgba) {
        self.painter.text(
            self.map(pos),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(size * self.scale),
            to_color32(color),
        );
    }
}

pub fn to_color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_conversion() {
        let c = to_color32(Rgba::rgb(255, 0, 127));
        assert_eq!(c.r(), 255);
        assert_eq!(c.g(), 0);
        assert_eq!(c.b(), 127);
        assert_eq!(c.a(), 255);
    }

    #[test]
    fn fill_rect_takes_either_ink() {
        let screen = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(400.0, 200.0));
        let painter = egui::Painter::new(egui::Context::default(), egui::LayerId::background(), screen);
        let mut surface = PainterSurface::fit(&painter, screen, SurfaceSize::default(), Rgba::WHITE);
        assert_eq!(surface.map(Pos2::new(800.0, 400.0)), Pos2::new(410.0, 220.0));

        let rect = Rect::from_min_size(Pos2::new(300.0, 60.0), Vec2::new(50.0, 10.0));
        surface.fill_rect(rect, Ink::Solid(Rgba::BLACK));
        surface.fill_rect(rect, Ink::Ramp(Rgba::BLACK, Rgba::WHITE));
        // degenerate rects are skipped
        surface.fill_rect(Rect::from_min_size(rect.min, Vec2::ZERO), Ink::Solid(Rgba::BLACK));
    }

    #[test]
    fn transparent_stays_transparent() {
        assert_eq!(to_color32(Rgba::TRANSPARENT).a(), 0);
    }
}
