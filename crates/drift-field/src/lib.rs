//! Drifting particle background.
//!
//! A field of small translucent particles that float upward over a
//! resizable surface. The field is regenerated from scratch whenever the
//! viewport settles on a new size, and redrawn once per display refresh
//! requested through a [`FrameScheduler`].

mod animator;
mod debounce;
mod field;
mod particle;
mod scheduler;
mod surface;

pub use animator::{AnimatorStats, ParticleAnimator};
pub use debounce::Debouncer;
pub use field::ParticleField;
pub use particle::Particle;
pub use scheduler::{FrameHandle, FrameScheduler, IntervalScheduler, ManualScheduler};
pub use surface::{DrawCall, RecordingSurface, Surface};
