//! Error types for the frame-align library

use thiserror::Error;

pub type FrameResult<T> = Result<T, FrameError>;

/// Errors raised by frame alignment.
///
/// The transform itself is total (sine and cosine accept any real input),
/// so every failure is either a lookup problem (unknown group) or a schema
/// problem (tabular input missing or malformed columns). Errors propagate
/// synchronously; the operation is deterministic and side-effect-free, so
/// retrying without fixing the input reproduces the same failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    /// A point references a group with no alignment parameters.
    ///
    /// Defaulting to the identity transform here would produce physically
    /// wrong but plausible-looking output, so this is always an error.
    #[error("no alignment parameters for group {group_id}")]
    MissingAlignment { group_id: u32 },

    /// A required coordinate column is absent under both its primary name
    /// and every configured legacy alias.
    #[error("missing coordinate column '{column}' (no primary or alias name present)")]
    MissingColumn { column: String },

    /// A column's length disagrees with the table's row count.
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },
}

impl FrameError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}
