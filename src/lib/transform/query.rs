//! Read-only views of a matrix: label listing and per-sample value ranges.

use crate::matrix::MatrixHandle;
use ndarray::{s, Axis};
use serde::Serialize;

/// Group and sample labels, in matrix order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixInfo {
    pub groups: Vec<String>,
    pub samples: Vec<String>,
}

pub fn info(handle: &MatrixHandle) -> MatrixInfo {
    MatrixInfo {
        groups: handle.group_labels().to_vec(),
        samples: handle.sample_labels().to_vec(),
    }
}

/// Summary of one sample's values, missing values excluded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRange {
    #[serde(rename = "Samples")]
    pub sample: String,
    #[serde(rename = "Min")]
    pub min: f64,
    #[serde(rename = "Max")]
    pub max: f64,
    #[serde(rename = "Median")]
    pub median: f64,
    #[serde(rename = "10th")]
    pub p10: f64,
    #[serde(rename = "90th")]
    pub p90: f64,
}

/// Percentile of sorted data, interpolating linearly between closest ranks.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = q / 100.0 * (n - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
        }
    }
}

/// Min, max, median, 10th and 90th percentile for every sample's columns.
pub fn data_range(handle: &MatrixHandle) -> Vec<SampleRange> {
    let samples = handle.samples();
    (0..samples.len())
        .map(|idx| {
            let range = samples.range(idx);
            let block = handle
                .values()
                .slice(s![.., range.start..range.end]);
            let mut finite: Vec<f64> = block
                .axis_iter(Axis(0))
                .flat_map(|row| row.to_vec())
                .filter(|v| !v.is_nan())
                .collect();
            finite.sort_by(|a, b| a.total_cmp(b));

            SampleRange {
                sample: samples.labels()[idx].clone(),
                min: finite.first().copied().unwrap_or(f64::NAN),
                max: finite.last().copied().unwrap_or(f64::NAN),
                median: percentile(&finite, 50.0),
                p10: percentile(&finite, 10.0),
                p90: percentile(&finite, 90.0),
            }
        })
        .collect()
}
