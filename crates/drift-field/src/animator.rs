//! The particle field animator.
//!
//! Owns the surface, the field and the pending frame/resize state. The host
//! feeds it the current time through [`ParticleAnimator::pump`] and viewport
//! changes through [`ParticleAnimator::on_resize`].

use drift_core::{FieldConfig, Viewport};
use rand::Rng;
use tracing::{debug, info};

use crate::debounce::Debouncer;
use crate::field::ParticleField;
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::surface::Surface;

/// Counters for what the animator has done since it started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimatorStats {
    /// Update-and-draw passes run.
    pub ticks: u64,
    /// Fields regenerated after a settled resize.
    pub rebuilds: u64,
}

/// Drives a [`ParticleField`] over a [`Surface`], one tick per refresh.
#[derive(Debug)]
pub struct ParticleAnimator<S, F, R> {
    surface: S,
    scheduler: F,
    rng: R,
    config: FieldConfig,
    viewport: Viewport,
    field: ParticleField,
    /// Frame callback requested but not yet fired.
    pending_frame: Option<FrameHandle>,
    /// Latest viewport of an unsettled resize burst.
    pending_resize: Debouncer<Viewport>,
    running: bool,
    stats: AnimatorStats,
}

impl<S, F, R> ParticleAnimator<S, F, R>
where
    S: Surface,
    F: FrameScheduler,
    R: Rng,
{
    /// Size the surface, populate the field and request the first frame.
    ///
    /// Returns `None` when there is no surface to draw on.
    pub fn start(
        surface: Option<S>,
        mut scheduler: F,
        viewport: Viewport,
        config: FieldConfig,
        mut rng: R,
    ) -> Option<Self> {
        let Some(mut surface) = surface else {
            debug!("no drawing surface, particle animator not started");
            return None;
        };

        surface.resize(viewport);
        let field = ParticleField::generate(viewport, &config, &mut rng);
        let pending_frame = Some(scheduler.request_frame());
        info!(
            width = viewport.width,
            height = viewport.height,
            particles = field.len(),
            "particle animator started"
        );

        Some(Self {
            surface,
            scheduler,
            rng,
            config,
            viewport,
            field,
            pending_frame,
            pending_resize: Debouncer::new(config.resize_debounce_ms),
            running: true,
            stats: AnimatorStats::default(),
        })
    }

    /// Record a viewport change; it takes effect once resizing settles.
    pub fn on_resize(&mut self, viewport: Viewport, now_ms: u64) {
        if self.running {
            self.pending_resize.schedule(viewport, now_ms);
        }
    }

    /// Apply a settled resize and run the frame if its refresh has arrived.
    ///
    /// Returns `true` when a tick ran.
    pub fn pump(&mut self, now_ms: u64) -> bool {
        if !self.running {
            return false;
        }

        if let Some(viewport) = self.pending_resize.poll(now_ms) {
            self.rebuild(viewport);
        }

        match self.scheduler.take_due(now_ms) {
            Some(handle) if self.pending_frame == Some(handle) => {
                self.tick();
                self.pending_frame = Some(self.scheduler.request_frame());
                true
            }
            _ => false,
        }
    }

    /// Clear the surface, then advance and draw every particle.
    pub fn tick(&mut self) {
        self.surface.clear();
        self.field.step(self.viewport, &mut self.rng, &mut self.surface);
        self.stats.ticks += 1;
    }

    /// Stop requesting frames, keeping the current field.
    pub fn pause(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
            debug!("particle animator paused");
        }
    }

    /// Resume after [`pause`](Self::pause).
    pub fn resume(&mut self) {
        if self.running && self.pending_frame.is_none() {
            self.pending_frame = Some(self.scheduler.request_frame());
            debug!("particle animator resumed");
        }
    }

    /// Cancel pending work and release every particle.
    ///
    /// Later calls to [`pump`](Self::pump) and [`on_resize`](Self::on_resize)
    /// do nothing.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.pending_resize.cancel();
        self.field = ParticleField::default();
        self.running = false;
        info!(ticks = self.stats.ticks, "particle animator stopped");
    }

    fn rebuild(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.surface.resize(viewport);
        self.field = ParticleField::generate(viewport, &self.config, &mut self.rng);
        self.stats.rebuilds += 1;
        debug!(
            width = viewport.width,
            height = viewport.height,
            particles = self.field.len(),
            "particle field rebuilt"
        );
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.running && self.pending_frame.is_none()
    }

    pub fn has_pending_resize(&self) -> bool {
        self.pending_resize.is_pending()
    }

    pub fn stats(&self) -> AnimatorStats {
        self.stats
    }
}
