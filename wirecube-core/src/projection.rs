/// Perspective projection onto a pixel surface
use nalgebra::{Matrix4, Point3};

/// Distance added to the rotated z coordinate before the perspective
/// divide. Large enough that the rotated cube (radius sqrt(3)) can never
/// reach the viewpoint.
pub const CAMERA_DISTANCE: f32 = 3.5;

/// Fraction of the smaller surface dimension used as the projection scale
pub const ZOOM: f32 = 0.8;

/// A projected vertex in integer pixel coordinates
///
/// Ephemeral per-frame output; recomputed from scratch every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

/// Fixed-viewpoint perspective camera
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub distance: f32,
    pub zoom: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            distance: CAMERA_DISTANCE,
            zoom: ZOOM,
        }
    }

    /// Project a model-space point to pixel coordinates
    ///
    /// The point is rotated by `model`, divided by its distance from the
    /// viewpoint, scaled by the smaller surface dimension, and translated
    /// so the model origin lands at the surface center. Pixel coordinates
    /// are truncated, not rounded.
    pub fn project(
        &self,
        point: &Point3<f32>,
        model: &Matrix4<f32>,
        width: u32,
        height: u32,
    ) -> ScreenPoint {
        let rotated = model.transform_point(point);

        let depth = rotated.z + self.distance;
        let scale = width.min(height) as f32 * self.zoom;
        let center_x = width as f32 * 0.5;
        let center_y = height as f32 * 0.5;

        ScreenPoint {
            x: ((rotated.x / depth) * scale + center_x) as i32,
            y: ((rotated.y / depth) * scale + center_y) as i32,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
