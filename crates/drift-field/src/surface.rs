//! Drawing surface abstraction.

use drift_core::{ParticleColor, Viewport};

/// A resizable 2D surface the animator paints onto.
pub trait Surface {
    /// Reallocate the surface for a new viewport.
    fn resize(&mut self, viewport: Viewport);

    /// Wipe the whole surface.
    fn clear(&mut self);

    /// Paint a filled circle centered at `(x, y)`.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: ParticleColor);
}

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Resize(Viewport),
    Clear,
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: ParticleColor,
    },
}

/// Headless surface that records every call, for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Number of `resize` calls seen so far.
    pub fn resize_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Resize(_)))
            .count()
    }

    /// The most recent viewport passed to `resize`.
    pub fn last_resize(&self) -> Option<Viewport> {
        self.calls.iter().rev().find_map(|c| match c {
            DrawCall::Resize(v) => Some(*v),
            _ => None,
        })
    }

    /// Circles drawn since the most recent `clear`.
    pub fn circles_since_clear(&self) -> usize {
        self.calls
            .iter()
            .rev()
            .take_while(|c| !matches!(c, DrawCall::Clear))
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.calls.push(DrawCall::Resize(viewport));
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: ParticleColor) {
        self.calls.push(DrawCall::Circle {
            x,
            y,
            radius,
            color,
        });
    }
}
