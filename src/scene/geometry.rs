//! Layout generators for the five diagrams.
//!
//! Everything here is a pure function of the surface size and the frame
//! counter. The one exception is the SVM scatter, which is drawn from the
//! run's RNG once when the run starts and then only read.

use std::f32::consts::{PI, TAU};

use egui::{Pos2, Rect, Vec2};
use rand::Rng;

use crate::render::surface::SurfaceSize;
use crate::scene::variant::Variant;

/// Neuron counts per layer, input to output.
pub const NEURAL_LAYERS: [usize; 4] = [4, 6, 6, 2];

pub const TREE_COUNT: usize = 3;
/// Root is depth 0, so each tree has 2^(MAX_DEPTH+1) - 1 nodes.
pub const TREE_MAX_DEPTH: u32 = 3;
pub const TREE_NODES: usize = (1 << (TREE_MAX_DEPTH + 1)) - 1;
const TREE_TOP: f32 = 50.0;
const TREE_LEVEL_STEP: f32 = 60.0;
const TREE_SPREAD: f32 = 80.0;

pub const SVM_POINTS: usize = 30;
const SVM_INSET: f32 = 50.0;
pub const SVM_HALF_SPAN: f32 = 200.0;
pub const SVM_MARGIN: f32 = 20.0;

pub const ENSEMBLE_MODELS: usize = 4;
pub const ENSEMBLE_SLOTS: usize = 5;

pub const FEATURE_NAMES: [&str; 5] = ["Texture", "Shape", "Size", "Density", "Pattern"];
pub const FEATURE_SOURCE: Pos2 = Pos2::new(150.0, 100.0);
const FEATURE_ANCHOR_X: f32 = 180.0;

/// Oscillation rate shared by most layouts (radians per frame).
const DRIFT: f32 = 0.02;

/// A layout vertex with optional semantic payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub label: Option<&'static str>,
    /// Activation / prediction strength, variant specific range.
    pub value: Option<f32>,
    /// Discrete class, ±1 for the SVM scatter.
    pub class: Option<i8>,
    pub size: Option<f32>,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, label: None, value: None, class: None, size: None }
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn pos(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }
}

// ── Neural network ──

#[derive(Debug, Clone, PartialEq)]
pub struct NeuralLayout {
    pub layers: Vec<Vec<Point>>,
}

pub fn neural_layout(size: SurfaceSize, frame: u64) -> NeuralLayout {
    let f = frame as f32;
    let column = size.width / (NEURAL_LAYERS.len() + 1) as f32;

    let layers = NEURAL_LAYERS
        .iter()
        .enumerate()
        .map(|(l, &count)| {
            let x = column * (l + 1) as f32;
            let row = size.height / (count + 1) as f32;
            (0..count)
                .map(|i| Point::new(x, row * (i + 1) as f32 + (f * DRIFT + i as f32).sin() * 5.0))
                .collect()
        })
        .collect();

    NeuralLayout { layers }
}

// ── Random forest ──

/// Trees stored flat in heap order: node `i` has children `2i+1`, `2i+2`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForestLayout {
    pub trees: Vec<Vec<Point>>,
}

impl ForestLayout {
    pub fn parent(index: usize) -> Option<usize> {
        (index > 0).then(|| (index - 1) / 2)
    }

    pub fn depth(index: usize) -> u32 {
        (index + 1).ilog2()
    }

    /// Nodes that have children.
    pub fn internal_nodes() -> usize {
        TREE_NODES / 2
    }
}

pub fn forest_layout(size: SurfaceSize, frame: u64) -> ForestLayout {
    let f = frame as f32;
    let column = size.width / (TREE_COUNT + 1) as f32;

    let trees = (0..TREE_COUNT)
        .map(|t| {
            // Children branch from the parent's resting x, not its drawn x.
            let mut base = [0.0f32; TREE_NODES];
            base[0] = column * (t + 1) as f32;
            for i in 1..TREE_NODES {
                let parent = (i - 1) / 2;
                let offset = TREE_SPREAD / (ForestLayout::depth(parent) + 1) as f32;
                base[i] = if i % 2 == 1 { base[parent] - offset } else { base[parent] + offset };
            }

            base.iter()
                .enumerate()
                .map(|(i, &x)| {
                    let d = ForestLayout::depth(i) as f32;
                    let sway = (f * DRIFT + d).sin() * (5.0 / (d + 1.0));
                    Point::new(x + sway, TREE_TOP + d * TREE_LEVEL_STEP).with_value(d)
                })
                .collect()
        })
        .collect();

    ForestLayout { trees }
}

// ── SVM ──

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvmBoundary {
    pub center: Pos2,
    pub angle: f32,
}

impl SvmBoundary {
    pub fn direction(&self) -> Vec2 {
        Vec2::angled(self.angle)
    }

    pub fn normal(&self) -> Vec2 {
        Vec2::angled(self.angle + PI * 0.5)
    }

    /// Separating line, ±`SVM_HALF_SPAN` about the center.
    pub fn decision_line(&self) -> [Pos2; 2] {
        let d = self.direction() * SVM_HALF_SPAN;
        [self.center - d, self.center + d]
    }

    /// The two margin lines, offset ±`SVM_MARGIN` along the normal.
    pub fn margin_lines(&self) -> [[Pos2; 2]; 2] {
        let [a, b] = self.decision_line();
        let n = self.normal() * SVM_MARGIN;
        [[a + n, b + n], [a - n, b - n]]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvmLayout {
    pub scatter: Vec<Point>,
    pub boundary: SvmBoundary,
}

pub fn svm_scatter<R: Rng + ?Sized>(size: SurfaceSize, rng: &mut R) -> Vec<Point> {
    let span_x = (size.width - 2.0 * SVM_INSET).max(1.0);
    let span_y = (size.height - 2.0 * SVM_INSET).max(1.0);
    (0..SVM_POINTS)
        .map(|_| Point {
            x: rng.gen_range(0.0..span_x) + SVM_INSET,
            y: rng.gen_range(0.0..span_y) + SVM_INSET,
            label: None,
            value: None,
            class: Some(if rng.gen_bool(0.5) { 1 } else { -1 }),
            size: Some(rng.gen_range(4.0..6.0)),
        })
        .collect()
}

pub fn svm_boundary(size: SurfaceSize, frame: u64) -> SvmBoundary {
    SvmBoundary {
        center: size.center(),
        angle: (frame % 360) as f32 * PI / 180.0,
    }
}

// ── Ensemble ──

#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleLayout {
    /// `models[m][slot]`, each carrying a prediction value in [0, 1].
    pub models: Vec<Vec<Point>>,
    pub aggregate: Pos2,
}

pub fn ensemble_layout(size: SurfaceSize, frame: u64) -> EnsembleLayout {
    let f = frame as f32;
    let column = size.width / (ENSEMBLE_MODELS + 1) as f32;

    let models = (0..ENSEMBLE_MODELS)
        .map(|m| {
            let x = column * (m + 1) as f32;
            (0..ENSEMBLE_SLOTS)
                .map(|i| {
                    let value = ((f + m as f32 * 30.0) * DRIFT + i as f32).sin() * 0.5 + 0.5;
                    Point::new(x, 50.0 + i as f32 * 60.0).with_value(value)
                })
                .collect()
        })
        .collect();

    EnsembleLayout {
        models,
        aggregate: Pos2::new(size.width - 50.0, size.height * 0.5),
    }
}

// ── Feature extraction ──

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSlot {
    /// Anchor the extraction line lands on; carries label and bar value.
    pub anchor: Point,
    /// Top of the slot's row.
    pub row_y: f32,
    /// Oscillator phase in [0, 2π).
    pub phase: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureLayout {
    pub slots: Vec<FeatureSlot>,
    pub input: Rect,
    pub scan_y: f32,
}

pub fn feature_layout(frame: u64) -> FeatureLayout {
    let f = frame as f32;
    let slots = FEATURE_NAMES
        .iter()
        .enumerate()
        .map(|(i, &name)| {
            let row_y = 50.0 + i as f32 * 40.0;
            let phase = (f * DRIFT + i as f32).rem_euclid(TAU);
            FeatureSlot {
                anchor: Point::new(FEATURE_ANCHOR_X, row_y + 15.0)
                    .with_label(name)
                    .with_value(phase.sin() * 0.5 + 0.5),
                row_y,
                phase,
            }
        })
        .collect();

    FeatureLayout {
        slots,
        input: Rect::from_min_size(Pos2::new(50.0, 50.0), Vec2::splat(100.0)),
        scan_y: 50.0 + (f * 0.05).sin() * 50.0 + 50.0,
    }
}

// ── Per-variant dispatch ──

#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    Neural(NeuralLayout),
    Forest(ForestLayout),
    Svm(SvmLayout),
    Ensemble(EnsembleLayout),
    Features(FeatureLayout),
}

impl Layout {
    /// Frame-0 layout for a fresh run. Draws the SVM scatter from `rng`.
    pub fn new<R: Rng + ?Sized>(variant: Variant, size: SurfaceSize, rng: &mut R) -> Self {
        match variant {
            Variant::NeuralNetwork => Layout::Neural(neural_layout(size, 0)),
            Variant::RandomForest => Layout::Forest(forest_layout(size, 0)),
            Variant::Svm => Layout::Svm(SvmLayout {
                scatter: svm_scatter(size, rng),
                boundary: svm_boundary(size, 0),
            }),
            Variant::Ensemble => Layout::Ensemble(ensemble_layout(size, 0)),
            Variant::FeatureExtraction => Layout::Features(feature_layout(0)),
        }
    }

    /// Recompute positions for `frame`. Point counts never change.
    pub fn refresh(&mut self, size: SurfaceSize, frame: u64) {
        match self {
            Layout::Neural(l) => *l = neural_layout(size, frame),
            Layout::Forest(l) => *l = forest_layout(size, frame),
            Layout::Svm(l) => l.boundary = svm_boundary(size, frame),
            Layout::Ensemble(l) => *l = ensemble_layout(size, frame),
            Layout::Features(l) => *l = feature_layout(frame),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Layout::Neural(_) => Variant::NeuralNetwork,
            Layout::Forest(_) => Variant::RandomForest,
            Layout::Svm(_) => Variant::Svm,
            Layout::Ensemble(_) => Variant::Ensemble,
            Layout::Features(_) => Variant::FeatureExtraction,
        }
    }

    pub fn point_count(&self) -> usize {
        match self {
            Layout::Neural(l) => l.layers.iter().map(Vec::len).sum(),
            Layout::Forest(l) => l.trees.iter().map(Vec::len).sum(),
            Layout::Svm(l) => l.scatter.len(),
            Layout::Ensemble(l) => l.models.iter().map(Vec::len).sum(),
            Layout::Features(l) => l.slots.len(),
        }
    }
}
