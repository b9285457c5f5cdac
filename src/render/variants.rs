//! The five diagram painters.
//!
//! Each painter reads one frame's layout and particle pool and paints it;
//! none of them mutate simulation state. Paint order per frame is always
//! clear → connections/decoration → particles → nodes, so glowing nodes sit
//! on top of the traffic flowing between them.

use egui::{Pos2, Rect, Vec2};

use crate::render::color::{hsla, Rgba};
use crate::render::surface::{Ink, Surface};
use crate::scene::geometry::{
    EnsembleLayout, FeatureLayout, ForestLayout, Layout, NeuralLayout, SvmLayout, FEATURE_SOURCE,
};
use crate::scene::particles::Particle;

/// Tailwind blue-500, used for the SVM margins and the feature input panel.
const BLUE: Rgba = Rgba::rgb(59, 130, 246);

pub fn paint_scene(surface: &mut dyn Surface, layout: &Layout, particles: &[Particle], frame: u64) {
    surface.clear();
    match layout {
        Layout::Neural(l) => paint_neural(surface, l, particles, frame),
        Layout::Forest(l) => paint_forest(surface, l, particles, frame),
        Layout::Svm(l) => paint_svm(surface, l, particles, frame),
        Layout::Ensemble(l) => paint_ensemble(surface, l, particles, frame),
        Layout::Features(l) => paint_features(surface, l, particles, frame),
    }
}

fn paint_particles(surface: &mut dyn Surface, particles: &[Particle], color: Rgba) {
    for p in particles {
        surface.fill_circle(p.pos, p.size, color);
    }
}

/// `sin(frame * rate)` as f32.
#[inline]
fn pulse(frame: u64, rate: f32) -> f32 {
    (frame as f32 * rate).sin()
}

#[inline]
fn cycle(frame: u64, offset: f32) -> f32 {
    (frame as f32 + offset).rem_euclid(360.0)
}

fn paint_neural(surface: &mut dyn Surface, l: &NeuralLayout, particles: &[Particle], frame: u64) {
    for (li, pair) in l.layers.windows(2).enumerate() {
        let c0 = hsla(cycle(frame, li as f32 * 30.0), 0.7, 0.6, 0.2);
        let c1 = hsla(cycle(frame, (li + 1) as f32 * 30.0), 0.7, 0.6, 0.2);
        for a in &pair[0] {
            for b in &pair[1] {
                surface.stroke_line(a.pos(), b.pos(), 1.0, Ink::Ramp(c0, c1));
            }
        }
    }

    paint_particles(surface, particles, hsla((frame % 180 * 2) as f32, 0.7, 0.6, 0.6));

    for (li, layer) in l.layers.iter().enumerate() {
        let color = hsla(cycle(frame, li as f32 * 30.0), 0.7, 0.6, 1.0);
        for n in layer {
            surface.fill_glow(n.pos(), 10.0, 15.0, color);
        }
    }
}

fn paint_forest(surface: &mut dyn Surface, l: &ForestLayout, particles: &[Particle], frame: u64) {
    let edge = Ink::Ramp(
        hsla(120.0, 0.7, 0.5, 0.3 + pulse(frame, 0.05) * 0.2),
        hsla(120.0, 0.7, 0.5, 0.1 + (frame as f32 * 0.05 + 1.0).sin() * 0.1),
    );
    for tree in &l.trees {
        for (i, node) in tree.iter().enumerate().skip(1) {
            if let Some(parent) = ForestLayout::parent(i) {
                surface.stroke_line(tree[parent].pos(), node.pos(), 2.0, edge);
            }
        }
    }

    paint_particles(surface, particles, hsla(120.0, 0.7, 0.5, 0.6 + pulse(frame, 0.1) * 0.2));

    for tree in &l.trees {
        for (i, node) in tree.iter().enumerate() {
            let alpha = 0.8 + (frame as f32 * 0.05 + i as f32).sin() * 0.2;
            surface.fill_glow(node.pos(), 8.0, 12.0, hsla(120.0, 0.7, 0.5, alpha));
        }
    }
}

fn paint_svm(surface: &mut dyn Surface, l: &SvmLayout, particles: &[Particle], frame: u64) {
    let wave = pulse(frame, 0.05);
    let [a, b] = l.boundary.decision_line();
    surface.stroke_line(
        a,
        b,
        3.0,
        Ink::Ramp(
            hsla(210.0, 0.7, 0.5, 0.5 + wave * 0.2),
            hsla(210.0, 0.7, 0.5, 0.3 + wave * 0.1),
        ),
    );
    for [m0, m1] in l.boundary.margin_lines() {
        surface.stroke_line(m0, m1, 1.0, Ink::Solid(BLUE.fade(0.2)));
    }

    paint_particles(surface, particles, hsla(210.0, 0.7, 0.5, 0.6 + pulse(frame, 0.1) * 0.2));

    for p in &l.scatter {
        let size = p.size.unwrap_or(5.0);
        let hue = if p.class == Some(1) { 120.0 } else { 0.0 };
        surface.fill_glow(p.pos(), size, size * 2.0, hsla(hue, 0.7, 0.5, 0.8 + wave * 0.2));
    }
}

fn paint_ensemble(surface: &mut dyn Surface, l: &EnsembleLayout, particles: &[Particle], frame: u64) {
    let wave = pulse(frame, 0.05);
    for (m, preds) in l.models.iter().enumerate() {
        let hue = m as f32 * 90.0;
        let ink = Ink::Ramp(hsla(hue, 0.7, 0.5, 0.3 + wave * 0.2), hsla(hue, 0.7, 0.5, 0.1));
        for p in preds {
            surface.stroke_line(p.pos(), l.aggregate, 1.0, ink);
        }
    }

    paint_particles(
        surface,
        particles,
        hsla((frame % 180 * 2) as f32, 0.7, 0.5, 0.6 + pulse(frame, 0.1) * 0.2),
    );

    for (m, preds) in l.models.iter().enumerate() {
        let color = hsla(m as f32 * 90.0, 0.7, 0.5, 0.8 + wave * 0.2);
        for p in preds {
            surface.fill_glow(p.pos(), 10.0, 15.0, color);
        }
    }

    // Aggregated prediction
    surface.fill_glow(l.aggregate, 15.0, 25.0, hsla(cycle(frame, 0.0), 0.7, 0.5, 0.8));
}

fn paint_features(surface: &mut dyn Surface, l: &FeatureLayout, particles: &[Particle], frame: u64) {
    surface.fill_rect(l.input, Ink::Solid(BLUE.fade(0.1 + pulse(frame, 0.05) * 0.05)));
    surface.stroke_line(
        Pos2::new(l.input.min.x, l.scan_y),
        Pos2::new(l.input.max.x, l.scan_y),
        2.0,
        Ink::Solid(BLUE.fade(0.8)),
    );

    paint_particles(surface, particles, hsla(210.0, 0.7, 0.5, 0.6 + pulse(frame, 0.1) * 0.2));

    for slot in &l.slots {
        let wave = slot.phase.sin();

        if let Some(label) = slot.anchor.label {
            surface.text(
                Pos2::new(200.0, slot.row_y + 20.0),
                label,
                14.0,
                Rgba::BLACK.fade(0.7 + wave * 0.3),
            );
        }

        surface.stroke_line(
            FEATURE_SOURCE,
            slot.anchor.pos(),
            1.0,
            Ink::Ramp(
                hsla(210.0, 0.7, 0.5, 0.4 + wave * 0.2),
                hsla(210.0, 0.7, 0.5, 0.2 + wave * 0.1),
            ),
        );

        let value = slot.anchor.value.unwrap_or(0.0);
        let hue = value * 360.0;
        surface.fill_rect(
            Rect::from_min_size(Pos2::new(300.0, slot.row_y + 10.0), Vec2::new(value * 100.0, 10.0)),
            Ink::Ramp(hsla(hue, 0.7, 0.5, 0.8), hsla(hue, 0.7, 0.5, 0.4)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recorder::{DrawCommand, RecordingSurface};
    use crate::render::surface::SurfaceSize;
    use crate::scene::geometry::{ensemble_layout, feature_layout, forest_layout, neural_layout};

    const SIZE: SurfaceSize = SurfaceSize::new(800.0, 400.0);

    fn count(s: &RecordingSurface, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        s.last_frame().iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn every_frame_opens_with_clear() {
        let mut s = RecordingSurface::new();
        paint_scene(&mut s, &Layout::Features(feature_layout(3)), &[], 3);
        assert_eq!(s.commands().first(), Some(&DrawCommand::Clear));
    }

    #[test]
    fn neural_draws_every_connection_and_neuron() {
        let mut s = RecordingSurface::new();
        paint_scene(&mut s, &Layout::Neural(neural_layout(SIZE, 0)), &[], 0);
        // 4*6 + 6*6 + 6*2 fully connected edges
        assert_eq!(count(&s, |c| matches!(c, DrawCommand::Line { .. })), 72);
        assert_eq!(count(&s, |c| matches!(c, DrawCommand::Glow { .. })), 18);
    }

    #[test]
    fn forest_draws_one_edge_per_child() {
        let mut s = RecordingSurface::new();
        paint_scene(&mut s, &Layout::Forest(forest_layout(SIZE, 5)), &[], 5);
        assert_eq!(count(&s, |c| matches!(c, DrawCommand::Line { width, .. } if *width == 2.0)), 3 * 14);
        assert_eq!(count(&s, |c| matches!(c, DrawCommand::Glow { .. })), 45);
    }

    #[test]
    fn ensemble_aggregate_glow_is_last() {
        let mut s = RecordingSurface::new();
        paint_scene(&mut s, &Layout::Ensemble(ensemble_layout(SIZE, 0)), &[], 0);
        let glows = s.last_glows();
        assert_eq!(glows.len(), 21);
        assert_eq!(glows.last(), Some(&(Pos2::new(750.0, 200.0), 15.0, 25.0)));
    }

    #[test]
    fn particles_painted_between_edges_and_nodes() {
        let particle = Particle {
            pos: Pos2::new(10.0, 10.0),
            velocity: Vec2::ZERO,
            size: 2.5,
            target: Pos2::ZERO,
        };
        let mut s = RecordingSurface::new();
        paint_scene(&mut s, &Layout::Neural(neural_layout(SIZE, 0)), &[particle], 0);
        let frame = s.last_frame();
        let circle = frame.iter().position(|c| matches!(c, DrawCommand::Circle { .. })).unwrap();
        let last_line = frame.iter().rposition(|c| matches!(c, DrawCommand::Line { .. })).unwrap();
        let first_glow = frame.iter().position(|c| matches!(c, DrawCommand::Glow { .. })).unwrap();
        assert!(last_line < circle && circle < first_glow);
    }

    #[test]
    fn features_label_every_slot() {
        let mut s = RecordingSurface::new();
        paint_scene(&mut s, &Layout::Features(feature_layout(0)), &[], 0);
        let labels: Vec<String> = s
            .last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["Texture", "Shape", "Size", "Density", "Pattern"]);
    }

    #[test]
    fn feature_bars_scale_with_value() {
        let layout = feature_layout(40);
        let mut s = RecordingSurface::new();
        paint_scene(&mut s, &Layout::Features(layout.clone()), &[], 40);
        let bars: Vec<f32> = s
            .last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { rect, .. } if rect.min.x == 300.0 => Some(rect.width()),
                _ => None,
            })
            .collect();
        assert_eq!(bars.len(), 5);
        for (w, slot) in bars.iter().zip(&layout.slots) {
            assert!((w - slot.anchor.value.unwrap() * 100.0).abs() < 1e-3);
        }
    }
}
