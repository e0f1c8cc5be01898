//! Core types shared by the drift crates.
//!
//! Holds the viewport geometry, the particle color model and the
//! particle-count policy used when a field is (re)generated.

use std::ops::Range;

/// Radius range for newly created particles, in surface pixels.
pub const RADIUS_RANGE: Range<f32> = 0.5..2.5;

/// Upward drift per frame range, in surface pixels.
pub const SPEED_RANGE: Range<f32> = 0.1..0.6;

/// Opacity range for newly created particles.
pub const OPACITY_RANGE: Range<f32> = 0.05..0.25;

/// Base tone of every particle (a translucent violet).
pub const VIOLET: (u8, u8, u8) = (139, 92, 246);

/// Size of the drawing surface in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given pixel size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Approximate a pixel viewport from a terminal size in cells.
    pub fn from_cells(cols: u16, rows: u16, cell_width_px: f32, cell_height_px: f32) -> Self {
        Self {
            width: cols as f32 * cell_width_px,
            height: rows as f32 * cell_height_px,
        }
    }

    /// Whether either dimension is zero (nothing can be drawn).
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A particle's RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0.0, 1.0]`.
    pub alpha: f32,
}

impl ParticleColor {
    /// The violet particle tone at the given opacity.
    pub const fn violet(alpha: f32) -> Self {
        Self {
            r: VIOLET.0,
            g: VIOLET.1,
            b: VIOLET.2,
            alpha,
        }
    }

    /// CSS `rgba(...)` notation.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }

    /// Composite over an opaque background.
    ///
    /// `gain` scales the alpha before compositing; the result is clamped to
    /// full opacity.
    pub fn blend_over(&self, background: (u8, u8, u8), gain: f32) -> (u8, u8, u8) {
        let a = (self.alpha * gain).clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
        (
            mix(self.r, background.0),
            mix(self.g, background.1),
            mix(self.b, background.2),
        )
    }
}

/// Particle-count policy and resize debounce window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Viewports narrower than this get `mobile_count` particles.
    pub mobile_breakpoint: f32,
    /// Particle count below the breakpoint.
    pub mobile_count: usize,
    /// Particle count at or above the breakpoint.
    pub desktop_count: usize,
    /// Quiet period before a resize burst takes effect.
    pub resize_debounce_ms: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            mobile_count: 50,
            desktop_count: 100,
            resize_debounce_ms: 200,
        }
    }
}

impl FieldConfig {
    /// Number of particles for a viewport of the given width.
    pub fn particle_count(&self, width: f32) -> usize {
        if width < self.mobile_breakpoint {
            self.mobile_count
        } else {
            self.desktop_count
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_count_policy() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(500.0), 50);
        assert_eq!(config.particle_count(767.9), 50);
        assert_eq!(config.particle_count(768.0), 100);
        assert_eq!(config.particle_count(1200.0), 100);
    }

    #[test]
    fn test_viewport_from_cells() {
        let viewport = Viewport::from_cells(120, 40, 8.0, 16.0);
        assert_eq!(viewport, Viewport::new(960.0, 640.0));
        assert!(!viewport.is_empty());
        assert!(Viewport::from_cells(0, 40, 8.0, 16.0).is_empty());
    }

    #[test]
    fn test_violet_css() {
        assert_eq!(ParticleColor::violet(0.1).css(), "rgba(139, 92, 246, 0.1)");
    }

    #[test]
    fn test_blend_over() {
        let color = ParticleColor::violet(0.25);
        // Full gain saturates to the particle tone.
        assert_eq!(color.blend_over((0, 0, 0), 4.0), VIOLET);
        // Zero alpha leaves the background untouched.
        assert_eq!(ParticleColor::violet(0.0).blend_over((10, 10, 15), 3.0), (10, 10, 15));
        // Half alpha over black halves each channel.
        assert_eq!(color.blend_over((0, 0, 0), 2.0), (70, 46, 123));
    }
}
