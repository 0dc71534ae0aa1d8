//! Per-group alignment parameters and their lookup table
//!
//! Alignment parameters are fitted by an upstream calibration process and
//! supplied to this library as data; nothing here estimates them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{FrameError, FrameResult};

/// The six rigid-transform parameters fitted for one physical unit.
///
/// Angles are in radians and compose as intrinsic yaw-pitch-roll with z
/// outermost (see [`rotation_xyz`](crate::rotation::rotation_xyz)).
/// Translation offsets are in the same length unit as the point coordinates.
///
/// # Example
/// ```
/// use frame_align::AlignmentParams;
///
/// // A unit rotated 180 degrees about z, shifted +10 along x.
/// let params = AlignmentParams {
///     gamma: std::f64::consts::PI,
///     tx: 10.0,
///     ..AlignmentParams::IDENTITY
/// };
/// assert_eq!(params.alpha, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentParams {
    /// Rotation about x in radians (roll, innermost)
    pub alpha: f64,
    /// Rotation about y in radians (pitch)
    pub beta: f64,
    /// Rotation about z in radians (yaw, outermost)
    pub gamma: f64,
    /// Translation along x
    pub tx: f64,
    /// Translation along y
    pub ty: f64,
    /// Translation along z
    pub tz: f64,
}

impl AlignmentParams {
    /// Parameters of the identity transform (zero angles, zero offsets).
    ///
    /// Useful as a base for struct-update syntax in tests and fixtures. The
    /// transform never falls back to this on a missing table entry.
    pub const IDENTITY: Self = Self {
        alpha: 0.0,
        beta: 0.0,
        gamma: 0.0,
        tx: 0.0,
        ty: 0.0,
        tz: 0.0,
    };
}

/// Mapping from group id to fitted alignment parameters.
///
/// Read-only input to the transform: one record per physical unit, owned by
/// the calling pipeline. Serializes transparently as a plain map, so a JSON
/// document keyed by group id deserializes directly.
///
/// # Example
/// ```
/// use frame_align::{AlignmentParams, AlignmentTable};
///
/// let mut table = AlignmentTable::new();
/// table.insert(3, AlignmentParams::IDENTITY);
/// assert!(table.lookup(3).is_ok());
/// assert!(table.lookup(4).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlignmentTable {
    entries: HashMap<u32, AlignmentParams>,
}

impl AlignmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the parameters for one group.
    pub fn insert(&mut self, group_id: u32, params: AlignmentParams) {
        self.entries.insert(group_id, params);
    }

    /// Parameters for `group_id`, if present.
    pub fn get(&self, group_id: u32) -> Option<&AlignmentParams> {
        self.entries.get(&group_id)
    }

    /// Parameters for `group_id`, or [`FrameError::MissingAlignment`].
    pub fn lookup(&self, group_id: u32) -> FrameResult<&AlignmentParams> {
        self.entries
            .get(&group_id)
            .ok_or(FrameError::MissingAlignment { group_id })
    }

    /// Number of groups with fitted parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterator over the group ids present in the table.
    pub fn group_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }
}

impl FromIterator<(u32, AlignmentParams)> for AlignmentTable {
    fn from_iter<I: IntoIterator<Item = (u32, AlignmentParams)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
