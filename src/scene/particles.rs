//! Generic particle pool shared by all five diagrams.
//!
//! A variant contributes two things: a [`ParticleRule`] (population target,
//! travel time, size range, cull predicate) and an [`Emitter`] on its layout
//! that picks a source/destination pair from the current frame's geometry.
//! One pass = spawn up to target, advance everything, cull.

use std::ops::Range;

use egui::{Pos2, Vec2};
use rand::Rng;

use crate::render::surface::SurfaceSize;
use crate::scene::geometry::{
    EnsembleLayout, FeatureLayout, ForestLayout, Layout, NeuralLayout, SvmLayout, FEATURE_SOURCE,
};
use crate::scene::variant::Variant;

/// Distance an SVM particle is aimed along the boundary normal.
const SVM_THROW: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Pos2,
    pub velocity: Vec2,
    pub size: f32,
    /// Where the particle was aimed at launch.
    pub target: Pos2,
}

impl Particle {
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.velocity;
    }
}

/// Source and destination picked from a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub from: Pos2,
    pub to: Pos2,
}

/// When a particle leaves the pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CullRule {
    /// Off any edge of the surface.
    Outside,
    /// Past its destination's x, or off the surface.
    PastTarget,
    /// Beyond a fixed x.
    PastX(f32),
}

impl CullRule {
    pub fn culls(&self, p: &Particle, size: SurfaceSize) -> bool {
        match *self {
            CullRule::Outside => !size.contains(p.pos),
            CullRule::PastTarget => p.pos.x > p.target.x || !size.contains(p.pos),
            CullRule::PastX(limit) => p.pos.x > limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleRule {
    /// Population the pool is topped up to every pass.
    pub target: usize,
    /// Frames to cover the route at speed 1: `velocity = (to - from) / divisor * speed`.
    pub divisor: f32,
    pub speed: f32,
    pub size: Range<f32>,
    pub cull: CullRule,
}

impl ParticleRule {
    pub fn for_variant(variant: Variant, size: SurfaceSize) -> Self {
        match variant {
            Variant::NeuralNetwork => Self {
                target: 10,
                divisor: 50.0,
                speed: 2.0,
                size: 2.0..5.0,
                cull: CullRule::PastTarget,
            },
            Variant::RandomForest => Self {
                target: 15,
                divisor: 30.0,
                speed: 1.0,
                size: 1.0..4.0,
                cull: CullRule::Outside,
            },
            Variant::Svm => Self {
                target: 20,
                divisor: 30.0,
                speed: 1.0,
                size: 1.0..3.0,
                cull: CullRule::Outside,
            },
            Variant::Ensemble => Self {
                target: 25,
                divisor: 50.0,
                speed: 1.0,
                size: 1.0..3.0,
                cull: CullRule::PastX(size.width - 40.0),
            },
            Variant::FeatureExtraction => Self {
                target: 20,
                divisor: 30.0,
                speed: 1.0,
                size: 1.0..3.0,
                cull: CullRule::PastX(300.0),
            },
        }
    }

    pub fn launch<R: Rng + ?Sized>(&self, route: Route, rng: &mut R) -> Particle {
        Particle {
            pos: route.from,
            velocity: (route.to - route.from) / self.divisor * self.speed,
            size: rng.gen_range(self.size.clone()),
            target: route.to,
        }
    }
}

/// Spawn-site rule: pick a plausible route on the current frame's geometry.
pub trait Emitter {
    fn route<R: Rng + ?Sized>(&self, rng: &mut R) -> Route;
}

impl Emitter for NeuralLayout {
    /// Random neuron to a random neuron of the next layer.
    fn route<R: Rng + ?Sized>(&self, rng: &mut R) -> Route {
        let l = rng.gen_range(0..self.layers.len() - 1);
        let from = &self.layers[l][rng.gen_range(0..self.layers[l].len())];
        let to = &self.layers[l + 1][rng.gen_range(0..self.layers[l + 1].len())];
        Route { from: from.pos(), to: to.pos() }
    }
}

impl Emitter for ForestLayout {
    /// Internal node down to one of its children.
    fn route<R: Rng + ?Sized>(&self, rng: &mut R) -> Route {
        let tree = &self.trees[rng.gen_range(0..self.trees.len())];
        let parent = rng.gen_range(0..ForestLayout::internal_nodes());
        let child = 2 * parent + 1 + usize::from(rng.gen_bool(0.5));
        Route { from: tree[parent].pos(), to: tree[child].pos() }
    }
}

impl Emitter for SvmLayout {
    /// From the boundary's trailing end, across the margin.
    fn route<R: Rng + ?Sized>(&self, _rng: &mut R) -> Route {
        let [from, _] = self.boundary.decision_line();
        Route { from, to: from + self.boundary.normal() * SVM_THROW }
    }
}

impl Emitter for EnsembleLayout {
    /// A model's prediction slot into the aggregation point.
    fn route<R: Rng + ?Sized>(&self, rng: &mut R) -> Route {
        let preds = &self.models[rng.gen_range(0..self.models.len())];
        let slot = &preds[rng.gen_range(0..preds.len())];
        Route { from: slot.pos(), to: self.aggregate }
    }
}

impl Emitter for FeatureLayout {
    /// Extraction source out to a feature slot.
    fn route<R: Rng + ?Sized>(&self, rng: &mut R) -> Route {
        let slot = &self.slots[rng.gen_range(0..self.slots.len())];
        Route { from: FEATURE_SOURCE, to: slot.anchor.pos() }
    }
}

impl Emitter for Layout {
    fn route<R: Rng + ?Sized>(&self, rng: &mut R) -> Route {
        match self {
            Layout::Neural(l) => l.route(rng),
            Layout::Forest(l) => l.route(rng),
            Layout::Svm(l) => l.route(rng),
            Layout::Ensemble(l) => l.route(rng),
            Layout::Features(l) => l.route(rng),
        }
    }
}

/// Counters for one spawn/advance/cull pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub spawned: usize,
    pub culled: usize,
    pub alive: usize,
}

#[derive(Debug, Clone)]
pub struct ParticlePool {
    rule: ParticleRule,
    particles: Vec<Particle>,
}

impl ParticlePool {
    pub fn new(rule: ParticleRule) -> Self {
        let particles = Vec::with_capacity(rule.target);
        Self { rule, particles }
    }

    pub fn rule(&self) -> &ParticleRule {
        &self.rule
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// One pass: top up toward target (at most `spawn_cap` new particles),
    /// advance every particle once, then drop the ones the rule culls.
    pub fn step<E, R>(&mut self, emitter: &E, size: SurfaceSize, spawn_cap: usize, rng: &mut R) -> PassStats
    where
        E: Emitter + ?Sized,
        R: Rng + ?Sized,
    {
        let budget = self.rule.target.saturating_sub(self.particles.len()).min(spawn_cap);
        for _ in 0..budget {
            let route = emitter.route(rng);
            self.particles.push(self.rule.launch(route, rng));
        }

        let before = self.particles.len();
        let rule = &self.rule;
        self.particles.retain_mut(|p| {
            p.advance();
            !rule.cull.culls(p, size)
        });

        PassStats {
            spawned: budget,
            culled: before - self.particles.len(),
            alive: self.particles.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::geometry::{ensemble_layout, feature_layout, forest_layout, neural_layout, svm_boundary};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SIZE: SurfaceSize = SurfaceSize::new(800.0, 400.0);

    fn layout_for(v: Variant, rng: &mut StdRng) -> Layout {
        Layout::new(v, SIZE, rng)
    }

    #[test]
    fn pool_never_exceeds_target() {
        let mut rng = StdRng::seed_from_u64(11);
        for v in Variant::ALL {
            let mut layout = layout_for(v, &mut rng);
            let mut pool = ParticlePool::new(ParticleRule::for_variant(v, SIZE));
            let target = pool.rule().target;
            for frame in 0..600 {
                layout.refresh(SIZE, frame);
                let stats = pool.step(&layout, SIZE, usize::MAX, &mut rng);
                assert!(pool.len() <= target, "{v}: {} > {target}", pool.len());
                assert_eq!(stats.alive, pool.len());
            }
        }
    }

    #[test]
    fn empty_pool_refills_in_one_pass() {
        let mut rng = StdRng::seed_from_u64(5);
        for v in Variant::ALL {
            let layout = layout_for(v, &mut rng);
            let mut pool = ParticlePool::new(ParticleRule::for_variant(v, SIZE));
            let stats = pool.step(&layout, SIZE, usize::MAX, &mut rng);
            // Nothing reaches its cull line on the very first step.
            assert_eq!(stats.culled, 0, "{v}");
            assert_eq!(pool.len(), pool.rule().target, "{v}");
        }
    }

    #[test]
    fn no_permanent_starvation() {
        // Every variant keeps churning: over a long run particles keep being
        // culled and replaced, and the pool is full after each pass that
        // starts empty-handed.
        let mut rng = StdRng::seed_from_u64(23);
        for v in Variant::ALL {
            let mut layout = layout_for(v, &mut rng);
            let mut pool = ParticlePool::new(ParticleRule::for_variant(v, SIZE));
            let mut culled = 0;
            for frame in 0..400 {
                layout.refresh(SIZE, frame);
                culled += pool.step(&layout, SIZE, usize::MAX, &mut rng).culled;
            }
            assert!(culled > 0, "{v} never recycles particles");
        }
    }

    #[test]
    fn spawn_cap_limits_a_pass() {
        let mut rng = StdRng::seed_from_u64(2);
        let layout = layout_for(Variant::Ensemble, &mut rng);
        let mut pool = ParticlePool::new(ParticleRule::for_variant(Variant::Ensemble, SIZE));
        let stats = pool.step(&layout, SIZE, 4, &mut rng);
        assert_eq!(stats.spawned, 4);
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn neural_particles_travel_toward_next_layer() {
        let mut rng = StdRng::seed_from_u64(8);
        let layout = neural_layout(SIZE, 0);
        let rule = ParticleRule::for_variant(Variant::NeuralNetwork, SIZE);
        for _ in 0..100 {
            let route = layout.route(&mut rng);
            assert!((route.to.x - route.from.x - 160.0).abs() < 1e-3);
            let p = rule.launch(route, &mut rng);
            // 50 frames at speed 2 = 25 frames to arrive
            assert!((p.velocity.x - 160.0 / 25.0).abs() < 1e-3);
            assert!((2.0..5.0).contains(&p.size));
        }
    }

    #[test]
    fn neural_cull_past_destination() {
        let p = Particle {
            pos: Pos2::new(330.0, 100.0),
            velocity: Vec2::new(6.4, 0.0),
            size: 3.0,
            target: Pos2::new(320.0, 100.0),
        };
        assert!(CullRule::PastTarget.culls(&p, SIZE));
        let back = Particle { pos: Pos2::new(300.0, 100.0), ..p };
        assert!(!CullRule::PastTarget.culls(&back, SIZE));
        let above = Particle { pos: Pos2::new(300.0, -1.0), ..p };
        assert!(CullRule::PastTarget.culls(&above, SIZE));
    }

    #[test]
    fn forest_routes_go_parent_to_child() {
        let mut rng = StdRng::seed_from_u64(4);
        let layout = forest_layout(SIZE, 10);
        for _ in 0..200 {
            let r = layout.route(&mut rng);
            assert!((r.to.y - r.from.y - 60.0).abs() < 1e-3);
        }
    }

    #[test]
    fn svm_particles_cross_the_margin() {
        let mut rng = StdRng::seed_from_u64(6);
        let layout = SvmLayout { scatter: Vec::new(), boundary: svm_boundary(SIZE, 90) };
        let rule = ParticleRule::for_variant(Variant::Svm, SIZE);
        let p = rule.launch(layout.route(&mut rng), &mut rng);
        assert!((p.velocity.length() - 2.0).abs() < 1e-3);
        assert!(p.velocity.dot(layout.boundary.normal()) > 0.0);
    }

    #[test]
    fn ensemble_and_feature_cull_lines() {
        let ens = ParticleRule::for_variant(Variant::Ensemble, SIZE);
        assert_eq!(ens.cull, CullRule::PastX(760.0));
        let feat = ParticleRule::for_variant(Variant::FeatureExtraction, SIZE);
        assert_eq!(feat.cull, CullRule::PastX(300.0));

        let mut rng = StdRng::seed_from_u64(9);
        let e = ensemble_layout(SIZE, 0);
        let r = e.route(&mut rng);
        assert_eq!(r.to, Pos2::new(750.0, 200.0));
        let f = feature_layout(0);
        let r = f.route(&mut rng);
        assert_eq!(r.from, FEATURE_SOURCE);
        assert!((r.to.x - 180.0).abs() < 1e-3);
    }

    #[test]
    fn advance_is_pure_translation() {
        let mut p = Particle {
            pos: Pos2::new(1.0, 2.0),
            velocity: Vec2::new(0.5, -0.25),
            size: 1.0,
            target: Pos2::ZERO,
        };
        p.advance();
        p.advance();
        assert_eq!(p.pos, Pos2::new(2.0, 1.5));
    }
}
