use crate::core::error::{MatrixError, Result};
use crate::matrix::grouping::{Dimension, Grouping};
use crate::matrix::params::Parameters;
use crate::matrix::region::Region;
use ndarray::Array2;

/// The owned pieces of a [`MatrixHandle`], for transforms that rebuild one.
#[derive(Debug, Clone)]
pub struct MatrixParts {
    pub values: Array2<f64>,
    pub regions: Vec<Region>,
    pub groups: Grouping,
    pub samples: Grouping,
    pub parameters: Parameters,
}

/// A signal matrix with its region records, row/column groupings and header
/// parameters.
///
/// The constructor guarantees that the parallel structures agree: one region per
/// row, row groups covering every row, sample groups covering every column.
/// Transforms never patch a handle in place; they take it apart with
/// [`MatrixHandle::into_parts`] and build a new one, which re-runs the checks.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixHandle {
    values: Array2<f64>,
    regions: Vec<Region>,
    groups: Grouping,
    samples: Grouping,
    parameters: Parameters,
}

impl MatrixHandle {
    pub fn new(
        values: Array2<f64>,
        regions: Vec<Region>,
        groups: Grouping,
        samples: Grouping,
        parameters: Parameters,
    ) -> Result<Self> {
        if groups.dimension() != Dimension::Groups || samples.dimension() != Dimension::Samples {
            return Err(MatrixError::InvalidInput(
                "row grouping must describe groups and column grouping samples".to_string(),
            ));
        }

        let (nrows, ncols) = values.dim();
        if regions.len() != nrows {
            return Err(MatrixError::DimensionMismatch {
                expected: format!("{} region records", nrows),
                actual: format!("{} region records", regions.len()),
            });
        }
        if groups.total() != nrows {
            return Err(MatrixError::DimensionMismatch {
                expected: format!("group boundaries ending at {}", nrows),
                actual: format!("group boundaries ending at {}", groups.total()),
            });
        }
        if samples.total() != ncols {
            return Err(MatrixError::DimensionMismatch {
                expected: format!("sample boundaries ending at {}", ncols),
                actual: format!("sample boundaries ending at {}", samples.total()),
            });
        }

        Ok(Self {
            values,
            regions,
            groups,
            samples,
            parameters,
        })
    }

    pub fn from_parts(parts: MatrixParts) -> Result<Self> {
        Self::new(
            parts.values,
            parts.regions,
            parts.groups,
            parts.samples,
            parts.parameters,
        )
    }

    pub fn into_parts(self) -> MatrixParts {
        MatrixParts {
            values: self.values,
            regions: self.regions,
            groups: self.groups,
            samples: self.samples,
            parameters: self.parameters,
        }
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn groups(&self) -> &Grouping {
        &self.groups
    }

    pub fn samples(&self) -> &Grouping {
        &self.samples
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn group_labels(&self) -> &[String] {
        self.groups.labels()
    }

    pub fn sample_labels(&self) -> &[String] {
        self.samples.labels()
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }
}
