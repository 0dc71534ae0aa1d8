//! Rigid transforms and group-wise transform application

use std::collections::HashMap;

use nalgebra::{Matrix3, Vector3};

use crate::alignment::{AlignmentParams, AlignmentTable};
use crate::errors::FrameResult;
use crate::rotation::rotation_xyz;
use crate::types::{GlobalPoint, LocalPoint, Point3D};

/// A rigid-body transform: rotation followed by translation.
///
/// Maps local-frame coordinates into the global frame as `R * p + T`.
/// No scaling or shear; the rotation part is always orthonormal when built
/// through [`RigidTransform::from_params`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    pub rotation: Matrix3<f64>,
    pub translation: Vector3<f64>,
}

impl RigidTransform {
    /// Build the transform for one group from its fitted parameters.
    ///
    /// The rotation is composed as `Rz(gamma) * Ry(beta) * Rx(alpha)`; see
    /// [`rotation_xyz`](crate::rotation::rotation_xyz) for the order contract.
    ///
    /// # Example
    /// ```
    /// use frame_align::{AlignmentParams, Point3D, RigidTransform};
    ///
    /// let params = AlignmentParams {
    ///     tx: 1.0,
    ///     ty: 2.0,
    ///     tz: 3.0,
    ///     ..AlignmentParams::IDENTITY
    /// };
    /// let transform = RigidTransform::from_params(&params);
    /// let origin = transform.apply(Point3D::default());
    /// assert_eq!(origin, Point3D::new(1.0, 2.0, 3.0));
    /// ```
    pub fn from_params(params: &AlignmentParams) -> Self {
        Self {
            rotation: rotation_xyz(params.alpha, params.beta, params.gamma),
            translation: Vector3::new(params.tx, params.ty, params.tz),
        }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Map a point into the target frame: `R * p + T`.
    pub fn apply(&self, point: Point3D) -> Point3D {
        (self.rotation * Vector3::from(point) + self.translation).into()
    }

    /// The inverse transform `(R^T, -R^T * T)`.
    ///
    /// The rotation part is orthonormal, so its transpose is its inverse.
    /// Composing forward and inverse returns the original point within
    /// floating-point tolerance.
    pub fn inverse(&self) -> Self {
        let rotation_inv = self.rotation.transpose();
        Self {
            rotation: rotation_inv,
            translation: -(rotation_inv * self.translation),
        }
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Map a collection of local-frame points into the shared global frame.
///
/// The rigid transform for every distinct group is resolved before any
/// point is mapped, so a group with no alignment entry fails the whole call
/// with [`MissingAlignment`](crate::FrameError::MissingAlignment) instead of
/// producing partial output. Each rotation matrix is built exactly once per
/// group regardless of how many points the group contains.
///
/// Output order equals input order. Empty input yields empty output.
///
/// # Example
/// ```
/// use frame_align::{AlignmentParams, AlignmentTable, LocalPoint, Point3D, transform_points};
///
/// let mut alignment = AlignmentTable::new();
/// alignment.insert(0, AlignmentParams {
///     tx: 1.0,
///     ..AlignmentParams::IDENTITY
/// });
///
/// let points = [LocalPoint::new(0, Point3D::new(0.5, 0.0, 0.0))];
/// let globals = transform_points(&points, &alignment)?;
/// assert_eq!(globals[0].position, Point3D::new(1.5, 0.0, 0.0));
/// # Ok::<(), frame_align::FrameError>(())
/// ```
pub fn transform_points(
    points: &[LocalPoint],
    alignment: &AlignmentTable,
) -> FrameResult<Vec<GlobalPoint>> {
    let mut transforms: HashMap<u32, RigidTransform> = HashMap::new();
    for point in points {
        if !transforms.contains_key(&point.group_id) {
            let params = alignment.lookup(point.group_id)?;
            transforms.insert(point.group_id, RigidTransform::from_params(params));
        }
    }

    Ok(points
        .iter()
        .map(|point| {
            GlobalPoint::new(point.group_id, transforms[&point.group_id].apply(point.position))
        })
        .collect())
}
