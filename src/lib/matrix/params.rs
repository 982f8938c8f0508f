//! Header parameters carried alongside the matrix.
//!
//! Everything in the file header that is not one of the four structural keys is
//! kept verbatim (and in order) so a transformed matrix is written back with
//! the same settings it was computed with. A handful of keys hold one entry per
//! sample and have to follow the samples through subsetting and merging.

use log::warn;
use serde_json::{Map, Value};

/// Header keys whose value is an array with one entry per sample.
pub const PER_SAMPLE_KEYS: &[&str] = &[
    "upstream",
    "downstream",
    "body",
    "bin size",
    "ref point",
    "unscaled 5 prime",
    "unscaled 3 prime",
];

pub const GROUP_LABELS: &str = "group_labels";
pub const GROUP_BOUNDARIES: &str = "group_boundaries";
pub const SAMPLE_LABELS: &str = "sample_labels";
pub const SAMPLE_BOUNDARIES: &str = "sample_boundaries";

/// Keys owned by the row/column groupings rather than by [`Parameters`].
pub const STRUCTURAL_KEYS: &[&str] = &[
    GROUP_LABELS,
    GROUP_BOUNDARIES,
    SAMPLE_LABELS,
    SAMPLE_BOUNDARIES,
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters(Map<String, Value>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a header map, dropping the structural keys and keeping the order of the rest.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(
            map.into_iter()
                .filter(|(key, _)| !STRUCTURAL_KEYS.contains(&key.as_str()))
                .collect(),
        )
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) {
        let key = key.into();
        if STRUCTURAL_KEYS.contains(&key.as_str()) {
            warn!("Ignoring structural header key '{}' in parameters", key);
            return;
        }
        self.0.insert(key, value);
    }

    fn per_sample(&self, key: &str, sample_count: usize) -> Option<&Vec<Value>> {
        match self.0.get(key) {
            Some(Value::Array(values)) if values.len() == sample_count => Some(values),
            Some(Value::Array(values)) => {
                warn!(
                    "Header key '{}' has {} entries for {} samples; leaving it untouched",
                    key,
                    values.len(),
                    sample_count
                );
                None
            }
            _ => None,
        }
    }

    /// Parameters for a sample selection: every per-sample array is rebuilt
    /// from the picked sample positions, in pick order.
    pub fn select_samples(&self, picked: &[usize], sample_count: usize) -> Self {
        let mut selected = self.clone();
        for key in PER_SAMPLE_KEYS {
            if let Some(values) = self.per_sample(key, sample_count) {
                let subset = picked.iter().map(|&i| values[i].clone()).collect();
                selected.0.insert(key.to_string(), Value::Array(subset));
            }
        }
        selected
    }

    /// Append another matrix's per-sample arrays after this one's.
    ///
    /// Scalar settings keep the accumulator's value.
    pub fn append_samples(&mut self, other: &Parameters, own_count: usize, other_count: usize) {
        for key in PER_SAMPLE_KEYS {
            let ours_ok = self.per_sample(key, own_count).is_some();
            let theirs = match other.per_sample(key, other_count) {
                Some(values) => values.clone(),
                None => {
                    if ours_ok {
                        warn!("Header key '{}' is missing from a merged matrix", key);
                    }
                    continue;
                }
            };
            if !ours_ok {
                continue;
            }
            if let Some(Value::Array(ours)) = self.0.get_mut(*key) {
                ours.extend(theirs);
            }
        }
    }
}
