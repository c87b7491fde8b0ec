/// Rotation state for the tumbling cube
use nalgebra::{Matrix4, Vector3};

/// Angle advanced on every driver tick, in radians. Chosen for a ~60 Hz
/// driver to complete a rotation in a few seconds.
pub const ANGLE_STEP: f32 = 0.03;

/// Ratio of the Y-axis rotation rate to the X-axis rate. The differing
/// rates make the motion a tumble rather than a flat spin.
pub const TUMBLE_RATIO: f32 = 0.7;

/// Monotonically increasing rotation angle (in radians)
///
/// The angle grows without bound; the wrap is implicit in trigonometric
/// periodicity. Drift from repeated single-precision addition over long
/// runs is accepted behavior.
#[derive(Debug, Clone, Copy)]
pub struct TumbleState {
    pub angle: f32,
}

impl TumbleState {
    pub fn new() -> Self {
        Self { angle: 0.0 }
    }

    /// Advance by the fixed per-tick increment
    pub fn advance(&mut self) {
        self.angle += ANGLE_STEP;
    }

    /// Rotation applied to every vertex: about X by the current angle,
    /// then about Y by `TUMBLE_RATIO` times the angle
    pub fn rotation_matrix(&self) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(self.angle, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, self.angle * TUMBLE_RATIO, 0.0));

        ry * rx
    }
}

impl Default for TumbleState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_angle_accumulation() {
        let mut state = TumbleState::new();
        for _ in 0..100 {
            state.advance();
        }
        let mut expected = 0.0f32;
        for _ in 0..100 {
            expected += ANGLE_STEP;
        }
        assert_eq!(state.angle, expected);
    }

    #[test]
    fn test_identity_at_zero() {
        let state = TumbleState::new();
        let matrix = state.rotation_matrix();
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_matches_explicit_sin_cos() {
        let state = TumbleState { angle: 1.2 };
        let matrix = state.rotation_matrix();

        let (sa, ca) = state.angle.sin_cos();
        let (sb, cb) = (state.angle * TUMBLE_RATIO).sin_cos();

        let p = Point3::new(0.3f32, -0.8, 0.5);
        // X rotation
        let y1 = p.y * ca - p.z * sa;
        let z1 = p.y * sa + p.z * ca;
        // Y rotation
        let x2 = p.x * cb + z1 * sb;
        let z2 = -p.x * sb + z1 * cb;

        let rotated = matrix.transform_point(&p);
        assert!((rotated.x - x2).abs() < 1e-5);
        assert!((rotated.y - y1).abs() < 1e-5);
        assert!((rotated.z - z2).abs() < 1e-5);
    }
}
