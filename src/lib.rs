//! frame-align - rigid-body frame alignment for multi-unit measurement systems
//!
//! Measurement systems built from many physical units (actuator petals,
//! camera modules, sensor heads) report positions in each unit's own local
//! frame. This library maps those measurements into a single shared global
//! frame using per-unit rigid transforms: three rotation angles composed as
//! intrinsic yaw-pitch-roll (z outermost) plus a translation offset, fitted
//! by an upstream calibration process.
//!
//! # Features
//!
//! - Elementary rotation builders with a fixed `Rz * Ry * Rx` composition contract
//! - Group-wise, order-preserving transform application
//! - Invertible rigid transforms for global-to-local round trips
//! - Minimal tabular interface with configurable legacy column aliasing
//! - Strict lookup semantics: a group without fitted parameters is an error,
//!   never an implicit identity
//!
//! # Quick Start
//!
//! ```rust
//! use frame_align::{AlignmentParams, AlignmentTable, LocalPoint, Point3D, transform_points};
//!
//! // Fitted parameters for two units (normally loaded from calibration data).
//! let mut alignment = AlignmentTable::new();
//! alignment.insert(0, AlignmentParams::IDENTITY);
//! alignment.insert(1, AlignmentParams {
//!     gamma: std::f64::consts::PI, // unit 1 is mounted rotated 180 degrees
//!     tx: 100.0,
//!     ..AlignmentParams::IDENTITY
//! });
//!
//! // Measurements tagged with the unit they were taken on.
//! let points = [
//!     LocalPoint::new(0, Point3D::new(1.0, 0.0, 0.0)),
//!     LocalPoint::new(1, Point3D::new(1.0, 0.0, 0.0)),
//! ];
//!
//! let globals = transform_points(&points, &alignment)?;
//! assert_eq!(globals[0].position, Point3D::new(1.0, 0.0, 0.0));
//! assert!((globals[1].position.x - 99.0).abs() < 1e-12);
//! # Ok::<(), frame_align::FrameError>(())
//! ```

pub mod alignment;
mod errors;
pub mod rotation;
pub mod table;
mod transform;
mod types;

pub use alignment::{AlignmentParams, AlignmentTable};
pub use errors::{FrameError, FrameResult};
pub use rotation::{DEG_TO_RAD, RAD_TO_DEG, rotation_x, rotation_xyz, rotation_y, rotation_z};
pub use table::{ColumnSchema, PointTable, apply_alignment};
pub use transform::{RigidTransform, transform_points};
pub use types::{GlobalPoint, LocalPoint, Point3D};
