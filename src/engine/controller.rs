//! The animation loop state machine.
//!
//! `Idle` until a variant is selected. Selecting cancels whatever frame is
//! outstanding, drops the old run's scene and starts a cold one. Each due
//! frame is simulated, painted and then rescheduled; a frame whose token is
//! no longer the outstanding one is ignored, so callbacks from a cancelled
//! run can never touch the new one.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::engine::schedule::{FrameScheduler, FrameToken};
use crate::render::surface::{Surface, SurfaceSize};
use crate::scene::variant::Variant;
use crate::scene::Scene;

enum LoopState {
    Idle,
    Running {
        variant: Variant,
        /// Built lazily on the first frame that has a surface to size it.
        scene: Option<Scene>,
    },
}

pub struct AnimationLoop<S: FrameScheduler> {
    config: EngineConfig,
    scheduler: S,
    surface: Option<SurfaceSize>,
    state: LoopState,
    pending: Option<FrameToken>,
}

impl<S: FrameScheduler> AnimationLoop<S> {
    pub fn new(config: EngineConfig, scheduler: S) -> Self {
        Self {
            config,
            scheduler,
            surface: None,
            state: LoopState::Idle,
            pending: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // ── Surface ──

    pub fn attach_surface(&mut self, size: SurfaceSize) {
        if self.surface != Some(size) {
            log::debug!("surface attached: {}x{}", size.width, size.height);
        }
        self.surface = Some(size);
    }

    pub fn attach_default_surface(&mut self) {
        self.attach_surface(self.config.surface);
    }

    /// Frames keep being scheduled but are skipped until a surface returns.
    pub fn detach_surface(&mut self) {
        log::debug!("surface detached");
        self.surface = None;
    }

    pub fn surface(&self) -> Option<SurfaceSize> {
        self.surface
    }

    // ── Selection ──

    /// Stop the current run (if any) and cold-start `variant`.
    pub fn select(&mut self, variant: Variant) {
        self.cancel_pending();
        self.state = LoopState::Idle;

        let scene = self
            .surface
            .map(|size| Scene::new(variant, size, run_rng(self.config.seed)));
        log::info!("starting {} ({})", variant.title(), variant);
        self.state = LoopState::Running { variant, scene };
        self.schedule_next();
    }

    /// Like [`select`](Self::select) but by id. An unknown id leaves the
    /// current run untouched.
    pub fn select_id(&mut self, id: &str) -> Result<(), EngineError> {
        match id.parse::<Variant>() {
            Ok(variant) => {
                self.select(variant);
                Ok(())
            }
            Err(e) => {
                log::warn!("{e}");
                Err(e)
            }
        }
    }

    /// Stop the loop. No frame callback fires afterwards.
    pub fn teardown(&mut self) {
        self.cancel_pending();
        if let LoopState::Running { variant, .. } = &self.state {
            log::info!("stopping {variant}");
        }
        self.state = LoopState::Idle;
    }

    // ── Frames ──

    /// Run the frame for `token`. Returns whether a frame was painted.
    ///
    /// A token that is not the outstanding one is stale and ignored.
    /// Errors never escape: a missing surface skips the frame, a refused
    /// reschedule stops the loop.
    pub fn tick(&mut self, token: FrameToken, surface: &mut dyn Surface) -> bool {
        if self.pending != Some(token) {
            log::debug!("ignoring stale frame {}", token.id());
            return false;
        }
        self.pending = None;

        let painted = match self.render(surface) {
            Ok(()) => true,
            Err(EngineError::SurfaceUnavailable) => {
                log::debug!("no surface, skipping frame");
                false
            }
            Err(e) => {
                log::warn!("frame failed: {e}");
                false
            }
        };

        if self.is_running() {
            self.schedule_next();
        }
        painted
    }

    /// Poll the scheduler and run the due frame, if any.
    pub fn pump(&mut self, surface: &mut dyn Surface) -> bool {
        match self.scheduler.poll() {
            Some(token) => self.tick(token, surface),
            None => false,
        }
    }

    /// Paint the last simulated frame again without advancing anything.
    ///
    /// Immediate-mode hosts rebuild their whole display list on every pass,
    /// including passes that were not driven by a due frame.
    pub fn redraw(&self, surface: &mut dyn Surface) -> bool {
        if self.surface.is_none() {
            return false;
        }
        match self.scene() {
            Some(scene) => {
                scene.repaint(surface);
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Running variant and the number of frames it has painted.
    pub fn status(&self) -> Option<(Variant, u64)> {
        match &self.state {
            LoopState::Idle => None,
            LoopState::Running { variant, scene } => {
                Some((*variant, scene.as_ref().map_or(0, Scene::frame)))
            }
        }
    }

    pub(crate) fn scene(&self) -> Option<&Scene> {
        match &self.state {
            LoopState::Running { scene, .. } => scene.as_ref(),
            LoopState::Idle => None,
        }
    }

    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), EngineError> {
        let size = self.surface.ok_or(EngineError::SurfaceUnavailable)?;
        let LoopState::Running { variant, scene } = &mut self.state else {
            return Ok(());
        };

        let stale = scene.as_ref().map_or(true, |s| s.size() != size);
        if stale {
            *scene = Some(Scene::new(*variant, size, run_rng(self.config.seed)));
        }
        let Some(scene) = scene.as_mut() else {
            return Ok(());
        };

        let budget = self.config.spawn_budget(scene.target_population());
        let stats = scene.render_frame(surface, budget);
        log::trace!(
            "{} frame {}: +{} -{} = {}",
            variant,
            scene.frame(),
            stats.spawned,
            stats.culled,
            stats.alive
        );
        Ok(())
    }

    fn schedule_next(&mut self) {
        match self.scheduler.schedule() {
            Ok(token) => self.pending = Some(token),
            Err(e) => {
                log::warn!("{e}, stopping animation");
                self.pending = None;
                self.state = LoopState::Idle;
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
    }
}

impl<S: FrameScheduler> Drop for AnimationLoop<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn run_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
