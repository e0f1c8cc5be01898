//! Terminal drawing surface backed by a braille canvas.

use drift_core::{ParticleColor, Viewport};
use drift_field::Surface;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Painter, Shape},
    },
};

/// A particle ready to paint, in canvas coordinates (y grows upward).
#[derive(Debug, Clone, PartialEq)]
struct Disc {
    x: f64,
    y: f64,
    radius: f64,
    color: Color,
}

impl Shape for Disc {
    fn draw(&self, painter: &mut Painter) {
        let r = self.radius;
        for (dx, dy) in [(0.0, 0.0), (r, 0.0), (-r, 0.0), (0.0, r), (0.0, -r)] {
            if let Some((x, y)) = painter.get_point(self.x + dx, self.y + dy) {
                painter.paint(x, y, self.color);
            }
        }
    }
}

/// Display list of the current frame, rendered as a ratatui widget.
#[derive(Debug)]
pub struct CanvasSurface {
    viewport: Viewport,
    discs: Vec<Disc>,
    background: (u8, u8, u8),
    /// Alpha boost so faint particles stay visible on a terminal.
    gain: f32,
}

impl CanvasSurface {
    pub fn new(background: [u8; 3], gain: f32) -> Self {
        Self {
            viewport: Viewport::default(),
            discs: Vec::new(),
            background: (background[0], background[1], background[2]),
            gain,
        }
    }

    fn background_color(&self) -> Color {
        let (r, g, b) = self.background;
        Color::Rgb(r, g, b)
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.discs.clear();
    }

    fn clear(&mut self) {
        self.discs.clear();
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: ParticleColor) {
        let (r, g, b) = color.blend_over(self.background, self.gain);
        self.discs.push(Disc {
            x: x as f64,
            // Canvas origin is bottom-left.
            y: (self.viewport.height - y) as f64,
            radius: radius as f64,
            color: Color::Rgb(r, g, b),
        });
    }
}

impl Widget for &CanvasSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Canvas::default()
            .background_color(self.background_color())
            .marker(Marker::Braille)
            .x_bounds([0.0, self.viewport.width as f64])
            .y_bounds([0.0, self.viewport.height as f64])
            .paint(|ctx| {
                for disc in &self.discs {
                    ctx.draw(disc);
                }
            })
            .render(area, buf);
    }
}
