use anyhow::{bail, Context, Result};
use sigmat_lib::transform;
use std::path::PathBuf;
use structopt::StructOpt;

use crate::commands::common::{self, OutputArgs, OutputConfig};

/// CLI arguments for the `relabel` subcommand.
#[derive(Debug, Clone, StructOpt)]
#[structopt(author, name = "relabel")]
pub struct RelabelArgs {
    /// Input matrix file.
    #[structopt(long = "matrixFile", short = "m")]
    pub matrix_file: PathBuf,

    #[structopt(flatten)]
    pub output: OutputArgs,

    /// New group labels, one per existing group.
    #[structopt(long = "groupLabels", min_values = 1)]
    pub group_labels: Option<Vec<String>>,

    /// New sample labels, one per existing sample.
    #[structopt(long = "sampleLabels", min_values = 1)]
    pub sample_labels: Option<Vec<String>>,
}

/// Replace group and/or sample labels.
pub fn run_relabel(args: RelabelArgs) -> Result<()> {
    if args.group_labels.is_none() && args.sample_labels.is_none() {
        bail!("relabel needs --groupLabels and/or --sampleLabels");
    }
    let output = OutputConfig::from(args.output).prepare()?;
    let handle = common::load(&args.matrix_file)?;

    let result = transform::relabel(&handle, args.group_labels, args.sample_labels)
        .with_context(|| format!("Failed to relabel {}", args.matrix_file.display()))?;

    common::save(&result, &output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_label_lists() {
        let args = RelabelArgs::from_iter_safe(&[
            "relabel",
            "-m",
            "in.gz",
            "-o",
            "out.gz",
            "--groupLabels",
            "up",
            "down",
            "--sampleLabels",
            "ChIP",
        ])
        .unwrap();
        assert_eq!(args.group_labels, Some(vec!["up".to_string(), "down".to_string()]));
        assert_eq!(args.sample_labels, Some(vec!["ChIP".to_string()]));
    }

    #[test]
    fn bare_label_flags_are_rejected() {
        for flag in ["--groupLabels", "--sampleLabels"] {
            assert!(
                RelabelArgs::from_iter_safe(&["relabel", "-m", "in.gz", "-o", "out.gz", flag]).is_err(),
                "{} without labels should not parse",
                flag
            );
        }
    }
}
