//! Row filtering primitives.
//!
//! This module exposes the [`RowFilter`] trait along with the strand and value
//! range filters. [`filter_rows`] applies any of them while keeping the row
//! groups intact.

use crate::core::error::Result;
use crate::matrix::{MatrixHandle, Region, Strand};
use log::debug;
use ndarray::{ArrayView1, Axis};

/// Decides, row by row, what survives a filter.
///
/// Implementations return `true` if the row is kept.
pub trait RowFilter {
    fn keep_row(&self, region: &Region, values: ArrayView1<'_, f64>) -> bool;
}

/// Keeps rows on one strand.
#[derive(Debug, Clone, Copy)]
pub struct StrandFilter {
    strand: Strand,
}

impl StrandFilter {
    pub fn new(strand: Strand) -> Self {
        Self { strand }
    }
}

impl RowFilter for StrandFilter {
    #[inline(always)]
    fn keep_row(&self, region: &Region, _values: ArrayView1<'_, f64>) -> bool {
        region.strand == self.strand
    }
}

/// Keeps rows whose values all lie within `[min, max]`.
///
/// Missing values are ignored; a row with nothing but missing values is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueRangeFilter {
    min: Option<f64>,
    max: Option<f64>,
}

impl ValueRangeFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

impl RowFilter for ValueRangeFilter {
    fn keep_row(&self, _region: &Region, values: ArrayView1<'_, f64>) -> bool {
        let (lo, hi) = values
            .iter()
            .filter(|v| !v.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo > hi {
            return true;
        }
        self.min.map_or(true, |min| lo >= min) && self.max.map_or(true, |max| hi <= max)
    }
}

/// Keep the rows accepted by `filter`, in their original order.
///
/// Group boundaries are recounted group by group, so the number of groups never
/// changes; a group with no surviving rows becomes zero-width. Columns, samples
/// and parameters are untouched.
pub fn filter_rows<F: RowFilter + ?Sized>(handle: &MatrixHandle, filter: &F) -> Result<MatrixHandle> {
    let keep: Vec<bool> = handle
        .regions()
        .iter()
        .zip(handle.values().rows())
        .map(|(region, row)| filter.keep_row(region, row))
        .collect();
    let kept: Vec<usize> = keep
        .iter()
        .enumerate()
        .filter_map(|(idx, k)| if *k { Some(idx) } else { None })
        .collect();

    debug!("Row filter kept {} of {} rows", kept.len(), handle.nrows());

    let values = handle.values().select(Axis(0), &kept);
    let regions = kept.iter().map(|&i| handle.regions()[i].clone()).collect();
    let groups = handle.groups().retain_mask(&keep);

    MatrixHandle::new(
        values,
        regions,
        groups,
        handle.samples().clone(),
        handle.parameters().clone(),
    )
}

/// Keep only rows on `strand`.
pub fn filter_strand(handle: &MatrixHandle, strand: Strand) -> Result<MatrixHandle> {
    filter_rows(handle, &StrandFilter::new(strand))
}

/// Keep only rows whose values lie within the optional bounds.
pub fn filter_values(handle: &MatrixHandle, min: Option<f64>, max: Option<f64>) -> Result<MatrixHandle> {
    filter_rows(handle, &ValueRangeFilter::new(min, max))
}
