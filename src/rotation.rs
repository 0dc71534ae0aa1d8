//! Elementary rotation-matrix builders and angle-unit constants

use nalgebra::Matrix3;

/// Angle-unit conversion constants
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Rotation about the x axis by `angle` radians.
///
/// Right-handed convention: `rotation_x(PI / 2)` sends +y to +z.
///
/// # Example
/// ```
/// use frame_align::rotation::rotation_x;
/// use nalgebra::Vector3;
///
/// let r = rotation_x(std::f64::consts::FRAC_PI_2);
/// let rotated = r * Vector3::new(0.0, 1.0, 0.0);
/// assert!((rotated - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-12);
/// ```
#[rustfmt::skip]
pub fn rotation_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0,   c,  -s,
        0.0,   s,   c,
    )
}

/// Rotation about the y axis by `angle` radians.
///
/// Right-handed convention: `rotation_y(PI / 2)` sends +z to +x.
#[rustfmt::skip]
pub fn rotation_y(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
          c, 0.0,   s,
        0.0, 1.0, 0.0,
         -s, 0.0,   c,
    )
}

/// Rotation about the z axis by `angle` radians.
///
/// Right-handed convention: `rotation_z(PI / 2)` sends +x to +y.
#[rustfmt::skip]
pub fn rotation_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
          c,  -s, 0.0,
          s,   c, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Composed rotation `Rz(gamma) * Ry(beta) * Rx(alpha)`.
///
/// Intrinsic yaw-pitch-roll with z as the outermost axis: a point is rotated
/// about x first, then y, then z. The composition order is a contract of the
/// alignment parameters; rotation composition is non-commutative, so a
/// different order would place the same measurements in a different global
/// frame.
///
/// All angles are in radians. Any real value is accepted; sine and cosine
/// are total, so the result is always a well-defined rotation matrix.
///
/// # Arguments
/// * `alpha` - rotation about x (roll)
/// * `beta` - rotation about y (pitch)
/// * `gamma` - rotation about z (yaw)
pub fn rotation_xyz(alpha: f64, beta: f64, gamma: f64) -> Matrix3<f64> {
    rotation_z(gamma) * rotation_y(beta) * rotation_x(alpha)
}
