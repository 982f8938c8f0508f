//! Column concatenation with rows matched by region name.

use crate::core::error::{MatrixError, Result};
use crate::matrix::{MatrixHandle, Region};
use log::{debug, warn};
use ndarray::{concatenate, Array2, Axis};
use rustc_hash::FxHashMap;

/// Stack matrices horizontally in input order.
///
/// Rows of every later input are placed next to the row of the first input with
/// the same region name, whatever order they are stored in. Row order, regions
/// and row groups come from the first input; sample labels, boundaries and
/// per-sample parameters are appended.
///
/// A region name missing from the first input fails with
/// [`MatrixError::UnknownRegion`]. Names must be unique within each input,
/// otherwise the match is ambiguous and [`MatrixError::DuplicateRegionName`] is
/// returned. Rows of the first input without a partner in a later input get
/// missing values (`NaN`) in that input's columns.
pub fn cbind<I>(inputs: I) -> Result<MatrixHandle>
where
    I: IntoIterator<Item = MatrixHandle>,
{
    let mut inputs = inputs.into_iter();
    let first = inputs
        .next()
        .ok_or_else(|| MatrixError::EmptyInput("cbind needs at least one matrix".to_string()))?;
    let index = region_index(first.regions())?;

    inputs.try_fold(first, |acc, other| append_columns(acc, other, &index))
}

fn region_index(regions: &[Region]) -> Result<FxHashMap<String, usize>> {
    let mut index = FxHashMap::default();
    index.reserve(regions.len());
    for (row, region) in regions.iter().enumerate() {
        if index.insert(region.name.clone(), row).is_some() {
            return Err(MatrixError::DuplicateRegionName(region.name.clone()));
        }
    }
    Ok(index)
}

fn append_columns(
    acc: MatrixHandle,
    other: MatrixHandle,
    index: &FxHashMap<String, usize>,
) -> Result<MatrixHandle> {
    let mut aligned = Array2::from_elem((acc.nrows(), other.ncols()), f64::NAN);
    let mut filled = vec![false; acc.nrows()];

    for (row, region) in other.regions().iter().enumerate() {
        let target = *index
            .get(region.name.as_str())
            .ok_or_else(|| MatrixError::UnknownRegion(region.name.clone()))?;
        if filled[target] {
            return Err(MatrixError::DuplicateRegionName(region.name.clone()));
        }
        filled[target] = true;
        aligned.row_mut(target).assign(&other.values().row(row));
    }

    let unmatched = filled.iter().filter(|f| !**f).count();
    if unmatched > 0 {
        warn!(
            "{} of {} rows have no counterpart among the appended samples {:?}; filling with nan",
            unmatched,
            filled.len(),
            other.sample_labels()
        );
    }

    let mut parts = acc.into_parts();
    let other = other.into_parts();
    debug!(
        "Appending {} columns to {} accumulated columns",
        other.values.ncols(),
        parts.values.ncols()
    );

    parts
        .parameters
        .append_samples(&other.parameters, parts.samples.len(), other.samples.len());
    parts.samples.append(&other.samples);
    let stacked = concatenate(Axis(1), &[parts.values.view(), aligned.view()])?;
    parts.values = stacked;

    MatrixHandle::from_parts(parts)
}
