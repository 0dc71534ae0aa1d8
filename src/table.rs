//! Minimal tabular interface: column schema, legacy-alias normalization,
//! and in-place application of the alignment transform
//!
//! The core transform works on [`LocalPoint`] slices; this module adapts it
//! to the tabular shape measurement pipelines actually produce (one row per
//! measured point, coordinates in named columns).

use std::collections::HashMap;

use tracing::warn;

use crate::alignment::AlignmentTable;
use crate::errors::{FrameError, FrameResult};
use crate::transform::transform_points;
use crate::types::{LocalPoint, Point3D};

/// Column naming for tabular input and output.
///
/// Upstream pipelines have shipped more than one naming convention for the
/// local coordinate columns, so the legacy alias set is configuration rather
/// than a hard-coded list. During [`PointTable::normalize_columns`] each
/// `(legacy, primary)` pair renames a legacy-named column to its primary
/// name, with a warning diagnostic per rename. The global output columns
/// have a single fixed convention.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    /// Primary names of the local coordinate columns (x, y, z)
    pub local: [String; 3],
    /// Names of the global coordinate columns written by the transform
    pub global: [String; 3],
    /// Legacy column renames applied on ingest, as `(legacy, primary)` pairs
    pub aliases: Vec<(String, String)>,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            local: ["x_local".into(), "y_local".into(), "z_local".into()],
            global: ["x_global".into(), "y_global".into(), "z_global".into()],
            aliases: vec![
                ("x_fcl".into(), "x_local".into()),
                ("y_fcl".into(), "y_local".into()),
                ("z_fcl".into(), "z_local".into()),
            ],
        }
    }
}

/// An in-memory tabular dataset of measured points.
///
/// One `group_id` per row plus named `f64` columns, all of the table's row
/// count. This is deliberately minimal: just enough schema to carry the
/// coordinate columns the transform reads and writes.
///
/// # Example
/// ```
/// use frame_align::PointTable;
///
/// let mut table = PointTable::new(vec![0, 0, 1]);
/// table.set_column("x_local", vec![1.0, 2.0, 3.0])?;
/// assert_eq!(table.column("x_local"), Some(&[1.0, 2.0, 3.0][..]));
/// # Ok::<(), frame_align::FrameError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointTable {
    group_ids: Vec<u32>,
    columns: HashMap<String, Vec<f64>>,
}

impl PointTable {
    /// Create a table with one row per entry of `group_ids` and no columns.
    pub fn new(group_ids: Vec<u32>) -> Self {
        Self {
            group_ids,
            columns: HashMap::new(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.group_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group_ids.is_empty()
    }

    /// The group id of every row, in row order.
    pub fn group_ids(&self) -> &[u32] {
        &self.group_ids
    }

    /// Add a column, or overwrite it if the name already exists.
    ///
    /// Fails with [`FrameError::ColumnLength`] when `values` does not match
    /// the row count.
    pub fn set_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> FrameResult<()> {
        let name = name.into();
        if values.len() != self.group_ids.len() {
            return Err(FrameError::ColumnLength {
                column: name,
                expected: self.group_ids.len(),
                actual: values.len(),
            });
        }
        self.columns.insert(name, values);
        Ok(())
    }

    /// The values of a column, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Rename legacy-named columns to their primary names.
    ///
    /// Each configured alias whose legacy name is present (and whose primary
    /// name is not already taken) is renamed in place, emitting a warning so
    /// the legacy-schema path is visible in pipeline logs. Idempotent: a
    /// table already in the primary schema is left untouched.
    pub fn normalize_columns(&mut self, schema: &ColumnSchema) {
        for (legacy, primary) in &schema.aliases {
            if self.columns.contains_key(primary) {
                continue;
            }
            if let Some(values) = self.columns.remove(legacy) {
                warn!("renamed legacy column '{}' to '{}'", legacy, primary);
                self.columns.insert(primary.clone(), values);
            }
        }
    }

    /// Extract the rows as local-frame points using the primary local
    /// column names.
    ///
    /// Fails with [`FrameError::MissingColumn`] when a coordinate column is
    /// absent; call [`normalize_columns`](Self::normalize_columns) first if
    /// the input may use a legacy naming convention.
    pub fn local_points(&self, schema: &ColumnSchema) -> FrameResult<Vec<LocalPoint>> {
        let [x, y, z] = &schema.local;
        let xs = self
            .column(x)
            .ok_or_else(|| FrameError::missing_column(x.clone()))?;
        let ys = self
            .column(y)
            .ok_or_else(|| FrameError::missing_column(y.clone()))?;
        let zs = self
            .column(z)
            .ok_or_else(|| FrameError::missing_column(z.clone()))?;

        Ok(self
            .group_ids
            .iter()
            .enumerate()
            .map(|(i, &group_id)| LocalPoint::new(group_id, Point3D::new(xs[i], ys[i], zs[i])))
            .collect())
    }
}

/// Transform a table of local-frame measurements into the global frame,
/// in place.
///
/// Normalizes legacy column names, maps every row through its group's rigid
/// transform, and writes the three global coordinate columns - created if
/// absent, overwritten if already present. The table is left unmodified
/// beyond the normalization when the transform fails.
///
/// # Example
/// ```
/// use frame_align::{AlignmentParams, AlignmentTable, ColumnSchema, PointTable, apply_alignment};
///
/// let mut table = PointTable::new(vec![0, 0]);
/// table.set_column("x_local", vec![1.0, 2.0])?;
/// table.set_column("y_local", vec![0.0, 0.0])?;
/// table.set_column("z_local", vec![0.0, 0.0])?;
///
/// let mut alignment = AlignmentTable::new();
/// alignment.insert(0, AlignmentParams {
///     ty: -5.0,
///     ..AlignmentParams::IDENTITY
/// });
///
/// apply_alignment(&mut table, &ColumnSchema::default(), &alignment)?;
/// assert_eq!(table.column("y_global"), Some(&[-5.0, -5.0][..]));
/// # Ok::<(), frame_align::FrameError>(())
/// ```
pub fn apply_alignment(
    table: &mut PointTable,
    schema: &ColumnSchema,
    alignment: &AlignmentTable,
) -> FrameResult<()> {
    table.normalize_columns(schema);

    let points = table.local_points(schema)?;
    let globals = transform_points(&points, alignment)?;

    let [x, y, z] = &schema.global;
    table.set_column(x.clone(), globals.iter().map(|g| g.position.x).collect())?;
    table.set_column(y.clone(), globals.iter().map(|g| g.position.y).collect())?;
    table.set_column(z.clone(), globals.iter().map(|g| g.position.z).collect())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::AlignmentParams;

    fn three_row_table(x_name: &str, y_name: &str, z_name: &str) -> PointTable {
        let mut table = PointTable::new(vec![0, 0, 0]);
        table.set_column(x_name, vec![1.0, 2.0, 3.0]).unwrap();
        table.set_column(y_name, vec![4.0, 5.0, 6.0]).unwrap();
        table.set_column(z_name, vec![7.0, 8.0, 9.0]).unwrap();
        table
    }

    #[test]
    fn test_row_accessors() {
        let table = three_row_table("x_local", "y_local", "z_local");
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.group_ids(), &[0, 0, 0]);
    }

    #[test]
    fn test_set_column_rejects_wrong_length() {
        let mut table = PointTable::new(vec![0, 1]);
        let err = table.set_column("x_local", vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            FrameError::ColumnLength {
                column: "x_local".into(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_normalize_renames_legacy_columns() {
        let schema = ColumnSchema::default();
        let mut table = three_row_table("x_fcl", "y_fcl", "z_fcl");

        table.normalize_columns(&schema);

        assert!(!table.has_column("x_fcl"));
        assert_eq!(table.column("x_local"), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(table.column("z_local"), Some(&[7.0, 8.0, 9.0][..]));
    }

    #[test]
    fn test_normalize_is_idempotent_on_primary_schema() {
        let schema = ColumnSchema::default();
        let mut table = three_row_table("x_local", "y_local", "z_local");
        let before = table.clone();

        table.normalize_columns(&schema);
        assert_eq!(table, before);
    }

    #[test]
    fn test_normalize_with_custom_alias_set() {
        let schema = ColumnSchema {
            aliases: vec![("xl".into(), "x_local".into())],
            ..ColumnSchema::default()
        };
        let mut table = PointTable::new(vec![0]);
        table.set_column("xl", vec![42.0]).unwrap();

        table.normalize_columns(&schema);
        assert_eq!(table.column("x_local"), Some(&[42.0][..]));
    }

    #[test]
    fn test_local_points_reports_missing_column() {
        let schema = ColumnSchema::default();
        let mut table = PointTable::new(vec![0]);
        table.set_column("x_local", vec![1.0]).unwrap();

        let err = table.local_points(&schema).unwrap_err();
        assert_eq!(err, FrameError::missing_column("y_local"));
    }

    #[test]
    fn test_apply_alignment_writes_global_columns() {
        let schema = ColumnSchema::default();
        let mut table = three_row_table("x_local", "y_local", "z_local");
        let alignment: AlignmentTable = [(
            0,
            AlignmentParams {
                tx: 10.0,
                ..AlignmentParams::IDENTITY
            },
        )]
        .into_iter()
        .collect();

        apply_alignment(&mut table, &schema, &alignment).unwrap();

        assert_eq!(table.column("x_global"), Some(&[11.0, 12.0, 13.0][..]));
        assert_eq!(table.column("y_global"), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(table.column("z_global"), Some(&[7.0, 8.0, 9.0][..]));
    }

    #[test]
    fn test_apply_alignment_overwrites_stale_global_columns() {
        let schema = ColumnSchema::default();
        let mut table = three_row_table("x_local", "y_local", "z_local");
        table.set_column("x_global", vec![0.0, 0.0, 0.0]).unwrap();
        table.set_column("y_global", vec![0.0, 0.0, 0.0]).unwrap();
        table.set_column("z_global", vec![0.0, 0.0, 0.0]).unwrap();

        let alignment: AlignmentTable =
            [(0, AlignmentParams::IDENTITY)].into_iter().collect();
        apply_alignment(&mut table, &schema, &alignment).unwrap();

        assert_eq!(table.column("x_global"), Some(&[1.0, 2.0, 3.0][..]));
    }

    #[test]
    fn test_apply_alignment_propagates_missing_group() {
        let schema = ColumnSchema::default();
        let mut table = three_row_table("x_local", "y_local", "z_local");
        let alignment = AlignmentTable::new();

        let err = apply_alignment(&mut table, &schema, &alignment).unwrap_err();
        assert_eq!(err, FrameError::MissingAlignment { group_id: 0 });
        // No partial output: the global columns were never created.
        assert!(!table.has_column("x_global"));
    }

    #[test]
    fn test_empty_table_round_trips() {
        let schema = ColumnSchema::default();
        let mut table = PointTable::new(vec![]);
        table.set_column("x_local", vec![]).unwrap();
        table.set_column("y_local", vec![]).unwrap();
        table.set_column("z_local", vec![]).unwrap();

        apply_alignment(&mut table, &schema, &AlignmentTable::new()).unwrap();
        assert_eq!(table.column("x_global"), Some(&[][..]));
    }
}
