/// The rotating wireframe cube renderer
use std::time::Instant;

use crate::fps::FpsCounter;
use crate::geometry::{cube_vertices, EDGES};
use crate::projection::{Camera, ScreenPoint};
use crate::surface::{Color, DrawSurface};
use crate::transform::TumbleState;

/// Stroke width of the cube edges, in pixels
const EDGE_STROKE: u32 = 2;

const BACKGROUND: Color = Color::BLACK;
const FOREGROUND: Color = Color::WHITE;

/// Monotonic millisecond clock, read on demand
///
/// The renderer never owns a process-wide clock; the host hands it a
/// reading whenever one is needed.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// `Instant`-backed clock measuring from its own creation
#[derive(Debug)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Host-provided text readout, used only for the FPS string
pub trait StatusSink {
    fn set_status(&mut self, text: &str);
}

/// Renders one frame of a tumbling wireframe cube per tick and keeps a
/// once-per-second FPS readout
///
/// Owns its surface, clock, and status sink exclusively; a single host
/// driver calls into it synchronously, so no locking is involved.
pub struct CubeRenderer<S, C, K> {
    surface: S,
    clock: C,
    status: K,
    tumble: TumbleState,
    camera: Camera,
    fps: FpsCounter,
}

impl<S, C, K> CubeRenderer<S, C, K>
where
    S: DrawSurface,
    C: Clock,
    K: StatusSink,
{
    /// Bind the renderer to its host-provided collaborators
    ///
    /// A zero-area surface is fine at this point; rendering is skipped
    /// until the host sizes it.
    pub fn new(surface: S, clock: C, status: K) -> Self {
        Self {
            surface,
            clock,
            status,
            tumble: TumbleState::new(),
            camera: Camera::new(),
            fps: FpsCounter::new(),
        }
    }

    pub fn angle(&self) -> f32 {
        self.tumble.angle
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn status(&self) -> &K {
        &self.status
    }

    /// Handle a viewport size change from the host
    ///
    /// Reallocates the backing storage only when a dimension actually
    /// changed, then redraws immediately at the new size. Negative
    /// dimensions are ignored; the host layer never produces them.
    pub fn on_resize(&mut self, new_width: i32, new_height: i32) {
        if new_width < 0 || new_height < 0 {
            return;
        }
        let (width, height) = (new_width as u32, new_height as u32);
        if width == self.surface.width() && height == self.surface.height() {
            return;
        }
        self.surface.resize(width, height);
        self.render_frame();
    }

    /// One driver tick: advance the rotation, draw the frame, account
    /// for it in the FPS readout
    pub fn tick(&mut self) {
        self.tumble.advance();
        self.render_frame();
        self.update_fps();
    }

    /// Draw one frame into the back buffer and present it
    ///
    /// Skipped entirely while the surface has no area; transient
    /// zero-size states are expected during layout.
    pub fn render_frame(&mut self) {
        let width = self.surface.width();
        let height = self.surface.height();
        if width == 0 || height == 0 {
            return;
        }

        self.surface.fill(BACKGROUND);

        let model = self.tumble.rotation_matrix();
        let mut points = [ScreenPoint::default(); 8];
        for (point, vertex) in points.iter_mut().zip(cube_vertices().iter()) {
            *point = self.camera.project(vertex, &model, width, height);
        }

        for &(a, b) in EDGES.iter() {
            self.surface.draw_line(points[a], points[b], EDGE_STROKE, FOREGROUND);
        }

        self.surface.present();
    }

    fn update_fps(&mut self) {
        if let Some(readout) = self.fps.record(self.clock.now_ms()) {
            self.status.set_status(&readout);
        }
    }
}
