//! Core point types for the frame-align library

use nalgebra::Vector3;

/// A position in three-dimensional space.
///
/// Coordinates are IEEE double precision. The frame the coordinates are
/// expressed in is carried by the surrounding type ([`LocalPoint`] or
/// [`GlobalPoint`]), not by the point itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    /// Create a point from its three coordinates.
    ///
    /// # Example
    /// ```
    /// use frame_align::Point3D;
    ///
    /// let p = Point3D::new(1.0, 2.0, 3.0);
    /// assert_eq!(p.y, 2.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3<f64>> for Point3D {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3D> for Vector3<f64> {
    fn from(p: Point3D) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

/// A measurement expressed in the local frame of one physical unit.
///
/// The `group_id` identifies which unit (and therefore which local frame)
/// the point was measured in. Alignment parameters are looked up by this id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalPoint {
    /// Identifier of the physical unit this point was measured on
    pub group_id: u32,
    /// Position in that unit's local frame
    pub position: Point3D,
}

impl LocalPoint {
    pub fn new(group_id: u32, position: Point3D) -> Self {
        Self { group_id, position }
    }
}

/// A point re-expressed in the shared global frame.
///
/// Derived from exactly one [`LocalPoint`]; the source `group_id` is kept
/// for traceability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalPoint {
    /// Identifier of the physical unit the point originated from
    pub group_id: u32,
    /// Position in the shared global frame
    pub position: Point3D,
}

impl GlobalPoint {
    pub fn new(group_id: u32, position: Point3D) -> Self {
        Self { group_id, position }
    }
}
