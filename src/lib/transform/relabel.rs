use crate::core::error::Result;
use crate::matrix::MatrixHandle;
use log::debug;

/// Replace group and/or sample labels; the counts must match the existing ones.
pub fn relabel(
    handle: &MatrixHandle,
    group_labels: Option<Vec<String>>,
    sample_labels: Option<Vec<String>>,
) -> Result<MatrixHandle> {
    let mut parts = handle.clone().into_parts();
    if let Some(labels) = group_labels {
        debug!("Relabelling groups {:?} -> {:?}", parts.groups.labels(), labels);
        parts.groups = parts.groups.with_labels(labels)?;
    }
    if let Some(labels) = sample_labels {
        debug!("Relabelling samples {:?} -> {:?}", parts.samples.labels(), labels);
        parts.samples = parts.samples.with_labels(labels)?;
    }
    MatrixHandle::from_parts(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::MatrixError;
    use crate::matrix::fixtures;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn renames_without_touching_data() {
        let handle = fixtures::matrix(&[("G1", 2), ("G2", 1)], &[("S1", 2)]);
        let out = relabel(&handle, Some(strings(&["up", "down"])), Some(strings(&["ChIP"]))).unwrap();
        assert_eq!(out.group_labels(), &["up", "down"]);
        assert_eq!(out.sample_labels(), &["ChIP"]);
        assert_eq!(out.groups().boundaries(), handle.groups().boundaries());
        assert_eq!(out.values(), handle.values());
        assert_eq!(out.regions(), handle.regions());
    }

    #[test]
    fn label_count_must_match() {
        let handle = fixtures::matrix(&[("G1", 2), ("G2", 1)], &[("S1", 2)]);
        match relabel(&handle, Some(strings(&["only"])), None).unwrap_err() {
            MatrixError::LabelCountMismatch {
                kind,
                expected,
                actual,
            } => {
                assert_eq!(kind, "group");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(relabel(&handle, None, Some(strings(&["a", "b"]))).is_err());
    }

    #[test]
    fn nothing_requested_is_identity() {
        let handle = fixtures::matrix(&[("G1", 1)], &[("S1", 1)]);
        assert_eq!(relabel(&handle, None, None).unwrap(), handle);
    }
}
