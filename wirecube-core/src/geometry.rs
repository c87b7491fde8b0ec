/// Wireframe cube geometry
use nalgebra::Point3;

/// An unordered pair of vertex indices joined by a drawn line
pub type Edge = (usize, usize);

/// The 12 cube edges: four on the z = -1 face, four on the z = 1 face,
/// and four connecting the two faces
pub const EDGES: [Edge; 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// The 8 fixed corners of the unit cube spanning [-1, 1] on every axis
pub fn cube_vertices() -> [Point3<f32>; 8] {
    [
        Point3::new(-1.0, -1.0, -1.0),
        Point3::new(1.0, -1.0, -1.0),
        Point3::new(1.0, 1.0, -1.0),
        Point3::new(-1.0, 1.0, -1.0),
        Point3::new(-1.0, -1.0, 1.0),
        Point3::new(1.0, -1.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(-1.0, 1.0, 1.0),
    ]
}
