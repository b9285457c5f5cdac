use crate::render::color::Rgba;
use crate::render::surface::SurfaceSize;

/// Engine tuning. Construct with `EngineConfig::default()` and adjust with
/// the `with_*` builders.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Logical surface size attached by `AnimationLoop::attach_default_surface`.
    pub surface: SurfaceSize,
    /// Fixed RNG seed for every run. `None` seeds each run from entropy.
    pub seed: Option<u64>,
    /// Upper bound on particles spawned in one pass. `None` lets a pass
    /// refill the pool to its target.
    pub spawn_cap: Option<usize>,
    /// Canvas color laid down by `Surface::clear`.
    pub background: Rgba,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceSize::default(),
            seed: None,
            spawn_cap: None,
            background: Rgba::WHITE,
        }
    }
}

impl EngineConfig {
    pub fn with_surface(mut self, surface: SurfaceSize) -> Self {
        self.surface = surface;
        self
    }

    /// Make every run reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_spawn_cap(mut self, cap: usize) -> Self {
        self.spawn_cap = Some(cap);
        self
    }

    /// Spawn budget for a pass over a pool with the given target.
    pub fn spawn_budget(&self, target: usize) -> usize {
        self.spawn_cap.map_or(target, |cap| cap.min(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = EngineConfig::default();
        assert_eq!(c.surface, SurfaceSize::new(800.0, 400.0));
        assert_eq!(c.seed, None);
        assert_eq!(c.spawn_budget(25), 25);
    }

    #[test]
    fn builders() {
        let c = EngineConfig::default()
            .with_seed(42)
            .with_spawn_cap(3)
            .with_surface(SurfaceSize::new(640.0, 320.0));
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.spawn_budget(25), 3);
        assert_eq!(c.spawn_budget(2), 2);
        assert_eq!(c.surface.width, 640.0);
    }
}
