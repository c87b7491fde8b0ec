/// Wirecube Core Library - cube geometry, rotation, and projection logic
///
/// This library provides the renderer for a tumbling wireframe cube:
/// the fixed cube geometry, rotation and perspective-projection math,
/// the drawable surface / clock / status contracts it consumes, and
/// frames-per-second accounting.

pub mod fps;
pub mod geometry;
pub mod projection;
pub mod renderer;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use fps::FpsCounter;
pub use geometry::{cube_vertices, Edge, EDGES};
pub use projection::{Camera, ScreenPoint};
pub use renderer::{Clock, CubeRenderer, MonotonicClock, StatusSink};
pub use surface::{Color, DrawSurface, PixelSurface};
pub use transform::{TumbleState, ANGLE_STEP, TUMBLE_RATIO};
