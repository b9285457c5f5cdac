//! Per-run simulation state.
//!
//! A [`Scene`] is everything one running diagram owns: its layout, its
//! particle pool, its frame counter and its RNG. It is built when a variant
//! is selected and dropped when the variant is deselected; nothing survives
//! from one run to the next.

pub mod geometry;
pub mod particles;
pub mod variant;

use rand::rngs::StdRng;

use crate::render::surface::{Surface, SurfaceSize};
use crate::render::variants::paint_scene;
use geometry::Layout;
use particles::{Particle, ParticlePool, ParticleRule, PassStats};
use variant::Variant;

pub struct Scene {
    variant: Variant,
    size: SurfaceSize,
    frame: u64,
    layout: Layout,
    pool: ParticlePool,
    rng: StdRng,
}

impl Scene {
    pub fn new(variant: Variant, size: SurfaceSize, mut rng: StdRng) -> Self {
        let layout = Layout::new(variant, size, &mut rng);
        Self {
            variant,
            size,
            frame: 0,
            layout,
            pool: ParticlePool::new(ParticleRule::for_variant(variant, size)),
            rng,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn particles(&self) -> &[Particle] {
        self.pool.particles()
    }

    pub fn target_population(&self) -> usize {
        self.pool.rule().target
    }

    /// Geometry then particles for the current frame.
    pub fn simulate(&mut self, spawn_cap: usize) -> PassStats {
        self.layout.refresh(self.size, self.frame);
        self.pool.step(&self.layout, self.size, spawn_cap, &mut self.rng)
    }

    /// Paint the current frame. Reads state only.
    pub fn paint(&self, surface: &mut dyn Surface) {
        paint_scene(surface, &self.layout, self.pool.particles(), self.frame);
    }

    /// Paint the most recently rendered frame again.
    pub fn repaint(&self, surface: &mut dyn Surface) {
        paint_scene(surface, &self.layout, self.pool.particles(), self.frame.saturating_sub(1));
    }

    /// One full frame: simulate, paint, then advance the counter.
    pub fn render_frame(&mut self, surface: &mut dyn Surface, spawn_cap: usize) -> PassStats {
        let stats = self.simulate(spawn_cap);
        self.paint(surface);
        self.frame += 1;
        stats
    }
}
