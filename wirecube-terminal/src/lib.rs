/// Terminal frontend for the wireframe cube renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wirecube_core::{Color, CubeRenderer, DrawSurface, MonotonicClock, PixelSurface, StatusSink};

/// Glyph used for lit cube-edge pixels
const EDGE_GLYPH: char = '█';

/// Latest status readout pushed by the renderer
#[derive(Debug)]
pub struct StatusLine {
    text: String,
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            text: "FPS: --".to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for StatusLine {
    fn set_status(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// Main application struct driving the renderer at a fixed nominal interval
///
/// One terminal cell backs one surface pixel; the presented frame is
/// mapped to block glyphs after every tick.
pub struct TerminalApp {
    renderer: CubeRenderer<PixelSurface, MonotonicClock, StatusLine>,
    interval: Duration,
    running: bool,
}

impl TerminalApp {
    pub fn new(interval_ms: u64) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            renderer: CubeRenderer::new(
                PixelSurface::new(width as u32, height as u32),
                MonotonicClock::new(),
                StatusLine::new(),
            ),
            interval: Duration::from_millis(interval_ms),
            running: true,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Drain pending input and resize notifications before the tick
            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            self.renderer.tick();
            self.draw()?;

            // Sleep off the remainder of the nominal interval
            let elapsed = frame_start.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent { code, .. }) => {
                if let KeyCode::Char('q') | KeyCode::Esc = code {
                    self.running = false;
                }
            }
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "viewport resized");
                self.renderer.on_resize(i32::from(width), i32::from(height));
            }
            _ => {}
        }
    }

    /// Map the presented frame to terminal cells and queue it to stdout
    fn draw(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        let surface = self.renderer.surface();

        queue!(stdout, SetForegroundColor(TermColor::White))?;
        for y in 0..surface.height() {
            queue!(stdout, cursor::MoveTo(0, y as u16))?;
            for x in 0..surface.width() {
                let glyph = match surface.pixel(x, y) {
                    Some(pixel) if pixel != Color::BLACK => EDGE_GLYPH,
                    _ => ' ',
                };
                queue!(stdout, Print(glyph))?;
            }
        }

        // Status overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(TermColor::Yellow),
            Print(format!(
                "wirecube | {} | q to quit",
                self.renderer.status().text()
            )),
            ResetColor
        )?;

        stdout.flush()
    }
}
