mod args;
mod canvas;
mod logging;

use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::eyre;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use drift_config::{Config, DisplaySettings};
use drift_core::Viewport;
use drift_field::{IntervalScheduler, ParticleAnimator};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    text::Line,
};
use tracing::info;

use crate::args::Args;
use crate::canvas::CanvasSurface;

/// Longest wait for input while nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(100);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init()?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply(&mut config);

    let terminal = ratatui::init();
    let result = run(terminal, &config, args.seed);
    ratatui::restore();
    result
}

fn run(terminal: DefaultTerminal, config: &Config, seed: Option<u64>) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    App::new(config, seed, size.width, size.height)?.run(terminal)
}

type Animator = ParticleAnimator<CanvasSurface, IntervalScheduler, StdRng>;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    animator: Animator,
    display: DisplaySettings,
    /// Origin of the animation clock.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of `cols` x `rows`.
    pub fn new(
        config: &Config,
        seed: Option<u64>,
        cols: u16,
        rows: u16,
    ) -> color_eyre::Result<Self> {
        let display = config.display.clone();
        let viewport = viewport_for(&display, cols, rows);
        let surface = (!viewport.is_empty())
            .then(|| CanvasSurface::new(display.background, display.gain));
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let animator = ParticleAnimator::start(
            surface,
            IntervalScheduler::new(display.fps),
            viewport,
            config.field.to_field_config(),
            rng,
        )
        .ok_or_else(|| eyre!("terminal has no drawable area ({cols}x{rows})"))?;

        Ok(Self {
            running: false,
            animator,
            display,
            started: Instant::now(),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let now = self.elapsed_ms();
            let rebuilds = self.animator.stats().rebuilds;
            let ticked = self.animator.pump(now);
            if ticked || self.animator.stats().rebuilds != rebuilds {
                terminal.draw(|frame| self.render(frame))?;
            }
            self.handle_crossterm_events()?;
        }
        self.animator.stop();
        Ok(())
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(self.animator.surface(), area);

        let [_, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        let accent = Color::Rgb(139, 92, 246);
        let pause_label = if self.animator.is_paused() { " resume" } else { " pause" };
        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "space".bold().fg(accent),
            pause_label.dark_gray(),
        ])
        .centered();
        frame.render_widget(help, help_area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the time until the next frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let now = self.elapsed_ms();
        let mut timeout = self
            .animator
            .scheduler()
            .time_until_due(now)
            .map(Duration::from_millis)
            .unwrap_or(IDLE_POLL);
        if self.animator.has_pending_resize() {
            timeout = timeout.min(Duration::from_millis(10));
        }

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.toggle_pause(),
            _ => {}
        }
    }

    fn on_resize(&mut self, cols: u16, rows: u16) {
        let viewport = viewport_for(&self.display, cols, rows);
        let now = self.elapsed_ms();
        self.animator.on_resize(viewport, now);
    }

    fn toggle_pause(&mut self) {
        if self.animator.is_paused() {
            self.animator.resume();
        } else {
            self.animator.pause();
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        info!(ticks = self.animator.stats().ticks, "quitting");
        self.running = false;
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

/// Pixel viewport for a terminal of `cols` x `rows` cells.
fn viewport_for(display: &DisplaySettings, cols: u16, rows: u16) -> Viewport {
    Viewport::from_cells(cols, rows, display.cell_width_px, display.cell_height_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(cols: u16, rows: u16) -> color_eyre::Result<App> {
        App::new(&Config::default(), Some(1), cols, rows)
    }

    #[test]
    fn test_app_sizes_field_from_terminal() {
        // 80 cols * 8px = 640px, below the breakpoint
        let narrow = app(80, 24).unwrap();
        assert_eq!(narrow.animator.viewport(), Viewport::new(640.0, 384.0));
        assert_eq!(narrow.animator.field().len(), 50);

        let wide = app(160, 48).unwrap();
        assert_eq!(wide.animator.field().len(), 100);
    }

    #[test]
    fn test_app_requires_drawable_area() {
        assert!(app(0, 24).is_err());
    }

    #[test]
    fn test_keys() {
        let mut app = app(80, 24).unwrap();
        app.running = true;

        app.on_key_event(KeyEvent::from(KeyCode::Char(' ')));
        assert!(app.animator.is_paused());
        app.on_key_event(KeyEvent::from(KeyCode::Char(' ')));
        assert!(!app.animator.is_paused());

        app.on_key_event(KeyEvent::from(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_resize_is_debounced() {
        let mut app = app(80, 24).unwrap();
        app.on_resize(200, 60);
        assert!(app.animator.has_pending_resize());
        assert_eq!(app.animator.field().len(), 50);

        app.animator.pump(app.elapsed_ms() + 200);
        assert!(!app.animator.has_pending_resize());
        assert_eq!(app.animator.viewport(), Viewport::new(1600.0, 960.0));
        assert_eq!(app.animator.field().len(), 100);
    }
}
