//! The particle field: every particle currently on screen.

use drift_core::{FieldConfig, Viewport};
use rand::Rng;

use crate::particle::Particle;
use crate::surface::Surface;

/// The full set of active particles.
///
/// Generated in one go for a viewport and replaced wholesale when the
/// viewport changes.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Generate a fresh field sized by the viewport width.
    pub fn generate<R: Rng>(viewport: Viewport, config: &FieldConfig, rng: &mut R) -> Self {
        let count = config.particle_count(viewport.width);
        Self {
            particles: (0..count).map(|_| Particle::spawn(viewport, rng)).collect(),
        }
    }

    /// Update then draw every particle, in set order.
    pub fn step<R, S>(&mut self, viewport: Viewport, rng: &mut R, surface: &mut S)
    where
        R: Rng,
        S: Surface + ?Sized,
    {
        for particle in &mut self.particles {
            particle.update(viewport, rng);
            particle.draw(surface);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_generate_count_follows_width() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mobile = ParticleField::generate(Viewport::new(500.0, 900.0), &config, &mut rng);
        assert_eq!(mobile.len(), 50);
        let desktop = ParticleField::generate(Viewport::new(1200.0, 800.0), &config, &mut rng);
        assert_eq!(desktop.len(), 100);
    }

    #[test]
    fn test_generate_within_viewport() {
        let viewport = Viewport::new(1200.0, 800.0);
        let mut rng = StdRng::seed_from_u64(9);
        let field = ParticleField::generate(viewport, &FieldConfig::default(), &mut rng);
        for p in field.particles() {
            assert!((0.0..1200.0).contains(&p.x()));
            assert!((0.0..800.0).contains(&p.y()));
        }
    }

    #[test]
    fn test_step_draws_each_particle_in_order() {
        let viewport = Viewport::new(500.0, 500.0);
        let mut rng = StdRng::seed_from_u64(2);
        let mut field = ParticleField::generate(viewport, &FieldConfig::default(), &mut rng);
        let mut surface = RecordingSurface::default();
        field.step(viewport, &mut rng, &mut surface);

        assert_eq!(surface.circles_since_clear(), field.len());
        for (call, p) in surface.calls.iter().zip(field.particles()) {
            match call {
                crate::surface::DrawCall::Circle { x, y, .. } => {
                    assert_eq!((*x, *y), (p.x(), p.y()));
                }
                other => panic!("unexpected call {other:?}"),
            }
        }
    }
}
