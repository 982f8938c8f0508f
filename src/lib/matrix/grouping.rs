//! Named partitions of matrix rows (groups) and columns (samples).
//!
//! A [`Grouping`] pairs a label list with a cumulative boundary array of length
//! `labels + 1`. Group `i` spans `boundaries[i]..boundaries[i + 1]`. Every
//! transform that moves rows or columns derives a fresh grouping through the
//! functions in this module, so boundary arithmetic lives in exactly one place.

use crate::core::error::{MatrixError, Result};
use log::debug;
use std::ops::Range;

/// Which of the two grouping dimensions a partition describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Row groups (`group_labels` / `group_boundaries`).
    Groups,
    /// Column groups (`sample_labels` / `sample_boundaries`).
    Samples,
}

impl Dimension {
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Groups => "group",
            Dimension::Samples => "sample",
        }
    }

    fn unknown(&self, name: &str) -> MatrixError {
        match self {
            Dimension::Groups => MatrixError::UnknownGroup(name.to_string()),
            Dimension::Samples => MatrixError::UnknownSample(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    dimension: Dimension,
    labels: Vec<String>,
    boundaries: Vec<usize>,
}

impl Grouping {
    /// Build a grouping, checking that the boundaries start at zero, never
    /// decrease and have exactly one more entry than there are labels.
    pub fn new(dimension: Dimension, labels: Vec<String>, boundaries: Vec<usize>) -> Result<Self> {
        let invalid = |reason: String| MatrixError::InvalidBoundaries {
            kind: dimension.label(),
            boundaries: boundaries.clone(),
            reason,
        };

        match boundaries.first() {
            None => return Err(invalid("boundary array is empty".to_string())),
            Some(&first) if first != 0 => {
                return Err(invalid(format!("first boundary must be 0, got {}", first)))
            }
            _ => {}
        }
        if let Some(pos) = boundaries.windows(2).position(|w| w[1] < w[0]) {
            return Err(invalid(format!(
                "boundary {} decreases from {} to {}",
                pos + 1,
                boundaries[pos],
                boundaries[pos + 1]
            )));
        }
        if boundaries.len() != labels.len() + 1 {
            return Err(invalid(format!(
                "{} labels need {} boundaries, got {}",
                labels.len(),
                labels.len() + 1,
                boundaries.len()
            )));
        }

        Ok(Self {
            dimension,
            labels,
            boundaries,
        })
    }

    /// Build a grouping from per-group sizes.
    pub fn from_sizes(dimension: Dimension, labels: Vec<String>, sizes: &[usize]) -> Result<Self> {
        let mut boundaries = Vec::with_capacity(sizes.len() + 1);
        boundaries.push(0);
        for size in sizes {
            let last = *boundaries.last().unwrap_or(&0);
            boundaries.push(last + size);
        }
        Self::new(dimension, labels, boundaries)
    }

    /// A grouping with one group covering `size` rows or columns.
    pub fn single<S: Into<String>>(dimension: Dimension, label: S, size: usize) -> Self {
        Self {
            dimension,
            labels: vec![label.into()],
            boundaries: vec![0, size],
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of rows (or columns) covered, i.e. the last boundary.
    pub fn total(&self) -> usize {
        *self.boundaries.last().unwrap_or(&0)
    }

    /// Row (or column) range of group `idx`.
    pub fn range(&self, idx: usize) -> Range<usize> {
        self.boundaries[idx]..self.boundaries[idx + 1]
    }

    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.boundaries.windows(2).map(|w| w[1] - w[0])
    }

    /// Position of the first group with this label.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.labels.iter().position(|label| label == name)
    }

    /// Same boundaries, new labels. The label count must not change.
    pub fn with_labels(&self, labels: Vec<String>) -> Result<Self> {
        if labels.len() != self.labels.len() {
            return Err(MatrixError::LabelCountMismatch {
                kind: self.dimension.label(),
                expected: self.labels.len(),
                actual: labels.len(),
            });
        }
        Ok(Self {
            dimension: self.dimension,
            labels,
            boundaries: self.boundaries.clone(),
        })
    }

    /// Recount every group against a keep-mask over all rows.
    ///
    /// Boundaries are rebuilt group by group, so the group count never changes;
    /// a group that loses all its rows collapses to a zero-width segment.
    pub fn retain_mask(&self, keep: &[bool]) -> Self {
        debug_assert_eq!(keep.len(), self.total());
        let mut boundaries = Vec::with_capacity(self.boundaries.len());
        boundaries.push(0);
        for idx in 0..self.len() {
            let kept = keep[self.range(idx)].iter().filter(|k| **k).count();
            let last = *boundaries.last().unwrap_or(&0);
            boundaries.push(last + kept);
        }
        Self {
            dimension: self.dimension,
            labels: self.labels.clone(),
            boundaries,
        }
    }

    /// Grow the trailing group by `extra` rows.
    ///
    /// This is the row-concatenation shape: the appended rows join the last group
    /// instead of keeping their own boundaries. A grouping without groups has
    /// nothing to extend.
    pub fn extend_trailing(&mut self, extra: usize) -> Result<()> {
        let len = self.boundaries.len();
        match self.boundaries.last_mut() {
            Some(last) if len > 1 => {
                *last += extra;
                Ok(())
            }
            _ => Err(MatrixError::EmptyInput(format!(
                "cannot append {} rows to a matrix without {}s",
                extra,
                self.dimension.label()
            ))),
        }
    }

    /// Append another grouping's groups after this one's, offsetting its
    /// boundaries by the current total (the other's leading zero is dropped).
    pub fn append(&mut self, other: &Grouping) {
        let offset = self.total();
        self.labels.extend(other.labels.iter().cloned());
        self.boundaries
            .extend(other.boundaries.iter().skip(1).map(|b| b + offset));
    }
}

/// Result of resolving a list of group or sample names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Flat row (or column) indices to slice with, in output order.
    pub indices: Vec<usize>,
    /// Positions of the selected groups in the source grouping, in output order.
    pub picked: Vec<usize>,
    /// Grouping of the sliced result.
    pub grouping: Grouping,
}

impl Selection {
    fn identity(grouping: &Grouping) -> Self {
        Self {
            indices: (0..grouping.total()).collect(),
            picked: (0..grouping.len()).collect(),
            grouping: grouping.clone(),
        }
    }
}

/// Translate requested names into flat indices and a fresh grouping.
///
/// Without a request the identity order and the original grouping are returned.
/// Each requested name contributes its whole range, in request order; a name
/// requested twice contributes twice. The first unknown name aborts resolution.
pub fn resolve_selection<S: AsRef<str>>(
    requested: Option<&[S]>,
    grouping: &Grouping,
) -> Result<Selection> {
    let requested = match requested {
        None => return Ok(Selection::identity(grouping)),
        Some(requested) => requested,
    };

    let dimension = grouping.dimension();
    let mut indices = Vec::new();
    let mut picked = Vec::with_capacity(requested.len());
    let mut labels = Vec::with_capacity(requested.len());
    let mut boundaries = Vec::with_capacity(requested.len() + 1);
    boundaries.push(0);

    for name in requested {
        let name = name.as_ref();
        let idx = grouping
            .position(name)
            .ok_or_else(|| dimension.unknown(name))?;
        let range = grouping.range(idx);
        let last = *boundaries.last().unwrap_or(&0);
        boundaries.push(last + range.len());
        indices.extend(range);
        picked.push(idx);
        labels.push(name.to_string());
    }

    debug!(
        "Resolved {} {}(s) to {} indices",
        picked.len(),
        dimension.label(),
        indices.len()
    );

    Ok(Selection {
        indices,
        picked,
        grouping: Grouping::new(dimension, labels, boundaries)?,
    })
}

/// Resolve row groups; unknown names fail with [`MatrixError::UnknownGroup`].
pub fn resolve_group_selection<S: AsRef<str>>(
    requested: Option<&[S]>,
    groups: &Grouping,
) -> Result<Selection> {
    debug_assert_eq!(groups.dimension(), Dimension::Groups);
    resolve_selection(requested, groups)
}

/// Resolve samples; unknown names fail with [`MatrixError::UnknownSample`].
pub fn resolve_sample_selection<S: AsRef<str>>(
    requested: Option<&[S]>,
    samples: &Grouping,
) -> Result<Selection> {
    debug_assert_eq!(samples.dimension(), Dimension::Samples);
    resolve_selection(requested, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Grouping {
        Grouping::new(
            Dimension::Groups,
            vec!["G1".to_string(), "G2".to_string()],
            vec![0, 2, 5],
        )
        .unwrap()
    }

    #[test]
    fn rejects_malformed_boundaries() {
        let labels = || vec!["a".to_string(), "b".to_string()];
        assert!(Grouping::new(Dimension::Groups, labels(), vec![1, 2, 3]).is_err());
        assert!(Grouping::new(Dimension::Groups, labels(), vec![0, 3, 2]).is_err());
        assert!(Grouping::new(Dimension::Groups, labels(), vec![0, 3]).is_err());
        assert!(Grouping::new(Dimension::Groups, labels(), vec![]).is_err());
        assert!(Grouping::new(Dimension::Groups, labels(), vec![0, 0, 0]).is_ok());
    }

    #[test]
    fn reordering_groups_recomputes_boundaries() {
        let selection = resolve_group_selection(Some(&["G2", "G1"][..]), &groups()).unwrap();
        assert_eq!(selection.indices, vec![2, 3, 4, 0, 1]);
        assert_eq!(selection.grouping.boundaries(), &[0, 3, 5]);
        assert_eq!(selection.grouping.labels(), &["G2", "G1"]);
        assert_eq!(selection.picked, vec![1, 0]);
    }

    #[test]
    fn absent_request_is_identity() {
        let source = groups();
        let selection = resolve_group_selection::<&str>(None, &source).unwrap();
        assert_eq!(selection.indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(selection.grouping, source);
        assert_eq!(selection.picked, vec![0, 1]);
    }

    #[test]
    fn duplicate_requests_duplicate_rows() {
        let selection = resolve_group_selection(Some(&["G1", "G1"][..]), &groups()).unwrap();
        assert_eq!(selection.indices, vec![0, 1, 0, 1]);
        assert_eq!(selection.grouping.boundaries(), &[0, 2, 4]);
    }

    #[test]
    fn unknown_names_are_reported_per_dimension() {
        let err = resolve_group_selection(Some(&["G1", "G9"][..]), &groups()).unwrap_err();
        assert!(matches!(err, MatrixError::UnknownGroup(ref name) if name == "G9"));

        let samples = Grouping::new(
            Dimension::Samples,
            vec!["S1".to_string(), "S2".to_string()],
            vec![0, 3, 6],
        )
        .unwrap();
        let err = resolve_sample_selection(Some(&["S3"][..]), &samples).unwrap_err();
        assert!(matches!(err, MatrixError::UnknownSample(ref name) if name == "S3"));
    }

    #[test]
    fn sample_selection_builds_fresh_boundaries() {
        let samples = Grouping::new(
            Dimension::Samples,
            vec!["S1".to_string(), "S2".to_string()],
            vec![0, 2, 6],
        )
        .unwrap();
        let selection = resolve_sample_selection(Some(&["S2"][..]), &samples).unwrap();
        assert_eq!(selection.indices, vec![2, 3, 4, 5]);
        assert_eq!(selection.grouping.boundaries(), &[0, 4]);
    }

    #[test]
    fn retain_mask_keeps_empty_groups() {
        let recounted = groups().retain_mask(&[false, false, true, false, true]);
        assert_eq!(recounted.boundaries(), &[0, 0, 2]);
        assert_eq!(recounted.len(), 2);
    }

    #[test]
    fn append_offsets_and_skips_leading_zero() {
        let mut left = Grouping::new(
            Dimension::Samples,
            vec!["S1".to_string(), "S2".to_string()],
            vec![0, 3, 6],
        )
        .unwrap();
        let right = Grouping::new(Dimension::Samples, vec!["S3".to_string()], vec![0, 4]).unwrap();
        left.append(&right);
        assert_eq!(left.boundaries(), &[0, 3, 6, 10]);
        assert_eq!(left.labels(), &["S1", "S2", "S3"]);
    }

    #[test]
    fn extend_trailing_grows_last_group() {
        let mut single = Grouping::single(Dimension::Groups, "genes", 3);
        single.extend_trailing(2).unwrap();
        assert_eq!(single.boundaries(), &[0, 5]);

        let mut two = groups();
        two.extend_trailing(4).unwrap();
        assert_eq!(two.boundaries(), &[0, 2, 9]);
    }

    #[test]
    fn extend_trailing_needs_a_group() {
        let mut empty = Grouping::new(Dimension::Groups, vec![], vec![0]).unwrap();
        assert!(matches!(empty.extend_trailing(2), Err(MatrixError::EmptyInput(_))));
        assert!(empty.labels().is_empty());
        assert_eq!(empty.boundaries(), &[0]);
    }

    #[test]
    fn relabel_requires_matching_count() {
        assert!(groups().with_labels(vec!["a".to_string()]).is_err());
        let renamed = groups()
            .with_labels(vec!["a".to_string(), "b".to_string()])
            .unwrap();
        assert_eq!(renamed.labels(), &["a", "b"]);
        assert_eq!(renamed.boundaries(), &[0, 2, 5]);
    }
}
