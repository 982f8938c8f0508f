//! Row concatenation.
//!
//! Inputs are expected to be single-group matrices that share one column layout.
//! The appended rows always join the accumulator's trailing group; per-input
//! group boundaries are not kept. Column labels and boundaries are not compared,
//! only the column count has to agree for the values to stack.

use crate::core::error::{MatrixError, Result};
use crate::matrix::MatrixHandle;
use log::{debug, warn};
use ndarray::{concatenate, Axis};

/// Stack matrices vertically in input order.
pub fn rbind<I>(inputs: I) -> Result<MatrixHandle>
where
    I: IntoIterator<Item = MatrixHandle>,
{
    let mut inputs = inputs.into_iter();
    let first = inputs
        .next()
        .ok_or_else(|| MatrixError::EmptyInput("rbind needs at least one matrix".to_string()))?;
    warn_on_multiple_groups(&first, 0);

    inputs
        .enumerate()
        .try_fold(first, |acc, (idx, other)| append_rows(acc, other, idx + 1))
}

fn warn_on_multiple_groups(handle: &MatrixHandle, position: usize) {
    if handle.groups().len() > 1 {
        warn!(
            "Matrix {} has {} groups; rbind folds appended rows into the last group",
            position + 1,
            handle.groups().len()
        );
    }
}

fn append_rows(acc: MatrixHandle, other: MatrixHandle, position: usize) -> Result<MatrixHandle> {
    if acc.ncols() != other.ncols() {
        return Err(MatrixError::DimensionMismatch {
            expected: format!("{} columns", acc.ncols()),
            actual: format!("{} columns in matrix {}", other.ncols(), position + 1),
        });
    }
    warn_on_multiple_groups(&other, position);

    let mut parts = acc.into_parts();
    let other = other.into_parts();
    debug!(
        "Appending {} rows to {} accumulated rows",
        other.values.nrows(),
        parts.values.nrows()
    );

    parts.groups.extend_trailing(other.values.nrows())?;
    parts.regions.extend(other.regions);
    let stacked = concatenate(Axis(0), &[parts.values.view(), other.values.view()])?;
    parts.values = stacked;

    MatrixHandle::from_parts(parts)
}
