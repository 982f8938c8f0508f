//! Row-group and sample selection (which doubles as reordering).

use crate::core::error::Result;
use crate::matrix::{resolve_group_selection, resolve_sample_selection, MatrixHandle};
use log::debug;
use ndarray::Axis;

/// Restrict and reorder a matrix to the requested groups and samples.
///
/// Rows are sliced before columns so that groups requested more than once are
/// duplicated together with their region records. An absent list keeps that
/// dimension as it is. Per-sample header parameters follow the sample
/// selection. Any unknown name aborts the whole operation.
pub fn subset<G, S>(
    handle: &MatrixHandle,
    groups: Option<&[G]>,
    samples: Option<&[S]>,
) -> Result<MatrixHandle>
where
    G: AsRef<str>,
    S: AsRef<str>,
{
    let rows = resolve_group_selection(groups, handle.groups())?;
    let cols = resolve_sample_selection(samples, handle.samples())?;

    let values = handle
        .values()
        .select(Axis(0), &rows.indices)
        .select(Axis(1), &cols.indices);
    let regions = rows
        .indices
        .iter()
        .map(|&i| handle.regions()[i].clone())
        .collect();
    let parameters = handle
        .parameters()
        .select_samples(&cols.picked, handle.samples().len());

    debug!(
        "Subset {} x {} -> {} x {}",
        handle.nrows(),
        handle.ncols(),
        rows.indices.len(),
        cols.indices.len()
    );

    MatrixHandle::new(values, regions, rows.grouping, cols.grouping, parameters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::MatrixError;
    use crate::matrix::fixtures;
    use proptest::prelude::*;
    use serde_json::json;

    const NONE: Option<&[&str]> = None;

    #[test]
    fn reorders_groups() {
        let handle = fixtures::matrix(&[("G1", 2), ("G2", 3)], &[("S1", 3), ("S2", 3)]);
        let out = subset(&handle, Some(&["G2", "G1"][..]), NONE).unwrap();

        let names: Vec<&str> = out.regions().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["r2", "r3", "r4", "r0", "r1"]);
        assert_eq!(out.groups().boundaries(), &[0, 3, 5]);
        assert_eq!(out.group_labels(), &["G2", "G1"]);
        assert_eq!(out.values()[[0, 0]], 200.0);
        assert_eq!(out.values()[[3, 5]], 5.0);
        assert_eq!(out.samples(), handle.samples());
    }

    #[test]
    fn selects_samples_with_fresh_boundaries() {
        let handle = fixtures::matrix(&[("G1", 2)], &[("S1", 2), ("S2", 4)]);
        let out = subset(&handle, NONE, Some(&["S2"][..])).unwrap();
        assert_eq!(out.ncols(), 4);
        assert_eq!(out.samples().boundaries(), &[0, 4]);
        assert_eq!(out.sample_labels(), &["S2"]);
        assert_eq!(out.values()[[1, 0]], 102.0);
        assert_eq!(out.parameters().get("bin size"), Some(&json!([4])));
        assert_eq!(out.group_labels(), handle.group_labels());
    }

    #[test]
    fn duplicated_group_duplicates_regions() {
        let handle = fixtures::matrix(&[("G1", 2), ("G2", 1)], &[("S1", 1)]);
        let out = subset(&handle, Some(&["G2", "G2"][..]), NONE).unwrap();
        assert_eq!(out.nrows(), 2);
        assert_eq!(out.regions()[0], out.regions()[1]);
        assert_eq!(out.groups().boundaries(), &[0, 1, 2]);
    }

    #[test]
    fn unknown_names_abort() {
        let handle = fixtures::matrix(&[("G1", 2)], &[("S1", 1)]);
        assert!(matches!(
            subset(&handle, Some(&["nope"][..]), NONE),
            Err(MatrixError::UnknownGroup(ref n)) if n == "nope"
        ));
        assert!(matches!(
            subset(&handle, NONE, Some(&["S1", "S9"][..])),
            Err(MatrixError::UnknownSample(ref n)) if n == "S9"
        ));
    }

    fn layout() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        (
            prop::collection::vec(0usize..5, 1..5),
            prop::collection::vec(1usize..4, 1..4),
        )
    }

    fn labelled(prefix: &str, sizes: &[usize]) -> Vec<(String, usize)> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, n)| (format!("{}{}", prefix, i), *n))
            .collect()
    }

    fn as_refs(owned: &[(String, usize)]) -> Vec<(&str, usize)> {
        owned.iter().map(|(l, n)| (l.as_str(), *n)).collect()
    }

    proptest! {
        #[test]
        fn selecting_everything_in_order_is_identity((group_sizes, sample_sizes) in layout()) {
            let groups = labelled("g", &group_sizes);
            let samples = labelled("s", &sample_sizes);
            let handle = fixtures::matrix(&as_refs(&groups), &as_refs(&samples));
            let group_names: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
            let sample_names: Vec<&str> = samples.iter().map(|(l, _)| l.as_str()).collect();

            let out = subset(&handle, Some(&group_names[..]), Some(&sample_names[..])).unwrap();
            prop_assert_eq!(out, handle);
        }

        #[test]
        fn row_count_is_sum_of_picked_groups(
            (group_sizes, sample_sizes) in layout(),
            picks in prop::collection::vec(0usize..16, 0..8),
        ) {
            let groups = labelled("g", &group_sizes);
            let samples = labelled("s", &sample_sizes);
            let handle = fixtures::matrix(&as_refs(&groups), &as_refs(&samples));
            let picks: Vec<usize> = picks.into_iter().map(|p| p % groups.len()).collect();
            let names: Vec<&str> = picks.iter().map(|&p| groups[p].0.as_str()).collect();

            let out = subset(&handle, Some(&names[..]), NONE).unwrap();
            let expected: usize = picks.iter().map(|&p| group_sizes[p]).sum();
            prop_assert_eq!(out.nrows(), expected);
            prop_assert_eq!(out.regions().len(), expected);
            prop_assert_eq!(out.groups().len(), picks.len());
            prop_assert_eq!(out.ncols(), handle.ncols());
        }

        #[test]
        fn column_count_is_sum_of_picked_samples(
            (group_sizes, sample_sizes) in layout(),
            picks in prop::collection::vec(0usize..16, 1..8),
        ) {
            let groups = labelled("g", &group_sizes);
            let samples = labelled("s", &sample_sizes);
            let handle = fixtures::matrix(&as_refs(&groups), &as_refs(&samples));
            let picks: Vec<usize> = picks.into_iter().map(|p| p % samples.len()).collect();
            let names: Vec<&str> = picks.iter().map(|&p| samples[p].0.as_str()).collect();

            let out = subset(&handle, NONE, Some(&names[..])).unwrap();
            let widths: Vec<usize> = picks.iter().map(|&p| sample_sizes[p]).collect();
            prop_assert_eq!(out.ncols(), widths.iter().sum::<usize>());
            prop_assert_eq!(out.sample_labels(), &names[..]);
            prop_assert_eq!(out.parameters().get("bin size"), Some(&json!(widths)));
            prop_assert_eq!(out.nrows(), handle.nrows());

            // every output sample block repeats the source block it was picked from
            for (pos, &src) in picks.iter().enumerate() {
                let from = handle.samples().range(src);
                let to = out.samples().range(pos);
                prop_assert_eq!(
                    out.values().slice(ndarray::s![.., to]),
                    handle.values().slice(ndarray::s![.., from])
                );
            }
        }
    }
}
