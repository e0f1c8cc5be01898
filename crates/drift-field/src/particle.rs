//! A single drifting particle.

use drift_core::{OPACITY_RANGE, ParticleColor, RADIUS_RANGE, SPEED_RANGE, Viewport};
use rand::Rng;

use crate::surface::Surface;

/// Draw uniformly from `[0, max)`, or 0 when the axis has no extent.
fn along<R: Rng>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 { rng.gen_range(0.0..max) } else { 0.0 }
}

/// A point drifting upward at a fixed speed.
///
/// Radius, speed, opacity and color are chosen once at spawn and never
/// change; only the position moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position in surface pixels.
    x: f32,
    /// Vertical position in surface pixels (grows downward).
    y: f32,
    radius: f32,
    /// Upward drift per frame.
    speed: f32,
    opacity: f32,
    color: ParticleColor,
}

impl Particle {
    /// Spawn a particle at a random position inside the viewport.
    pub fn spawn<R: Rng>(viewport: Viewport, rng: &mut R) -> Self {
        let x = along(rng, viewport.width);
        let y = along(rng, viewport.height);
        let radius = rng.gen_range(RADIUS_RANGE);
        let speed = rng.gen_range(SPEED_RANGE);
        let opacity = rng.gen_range(OPACITY_RANGE);
        Self {
            x,
            y,
            radius,
            speed,
            opacity,
            color: ParticleColor::violet(opacity),
        }
    }

    /// Build a particle with explicit attributes.
    pub fn with_attributes(x: f32, y: f32, radius: f32, speed: f32, opacity: f32) -> Self {
        Self {
            x,
            y,
            radius,
            speed,
            opacity,
            color: ParticleColor::violet(opacity),
        }
    }

    /// Advance one frame.
    ///
    /// Moves up by `speed`; once above the top edge the particle re-enters
    /// at the bottom with a fresh horizontal position.
    pub fn update<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) {
        self.y -= self.speed;
        if self.y < 0.0 {
            self.y = viewport.height;
            self.x = along(rng, viewport.width);
        }
    }

    /// Paint the particle as a filled circle.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.x, self.y, self.radius, self.color);
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn color(&self) -> ParticleColor {
        self.color
    }
}
