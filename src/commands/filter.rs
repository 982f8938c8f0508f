use anyhow::{bail, Context, Result};
use log::info;
use sigmat_lib::matrix::Strand;
use sigmat_lib::transform;
use std::path::PathBuf;
use structopt::StructOpt;

use crate::commands::common::{self, OutputArgs, OutputConfig};

/// CLI arguments for the `filterStrand` subcommand.
#[derive(Debug, Clone, StructOpt)]
#[structopt(author, name = "filterStrand")]
pub struct FilterStrandArgs {
    /// Input matrix file.
    #[structopt(long = "matrixFile", short = "m")]
    pub matrix_file: PathBuf,

    #[structopt(flatten)]
    pub output: OutputArgs,

    /// Strand of the regions to keep.
    #[structopt(long, possible_values = &["+", "-", "."], allow_hyphen_values = true)]
    pub strand: Strand,
}

/// CLI arguments for the `filterValues` subcommand.
#[derive(Debug, Clone, StructOpt)]
#[structopt(author, name = "filterValues")]
pub struct FilterValuesArgs {
    /// Input matrix file.
    #[structopt(long = "matrixFile", short = "m")]
    pub matrix_file: PathBuf,

    #[structopt(flatten)]
    pub output: OutputArgs,

    /// Drop rows with any value below this.
    #[structopt(long, allow_hyphen_values = true)]
    pub min: Option<f64>,

    /// Drop rows with any value above this.
    #[structopt(long, allow_hyphen_values = true)]
    pub max: Option<f64>,
}

/// Keep only the regions on one strand.
pub fn run_filter_strand(args: FilterStrandArgs) -> Result<()> {
    let output = OutputConfig::from(args.output).prepare()?;
    let handle = common::load(&args.matrix_file)?;

    let result = transform::filter_strand(&handle, args.strand)
        .with_context(|| format!("Failed to filter {}", args.matrix_file.display()))?;
    info!(
        "Kept {} of {} regions on strand {}",
        result.nrows(),
        handle.nrows(),
        args.strand
    );

    common::save(&result, &output)
}

/// Keep only the regions whose values fall within `[min, max]`.
pub fn run_filter_values(args: FilterValuesArgs) -> Result<()> {
    if let (Some(min), Some(max)) = (args.min, args.max) {
        if min > max {
            bail!("--min ({}) is greater than --max ({})", min, max);
        }
    }
    let output = OutputConfig::from(args.output).prepare()?;
    let handle = common::load(&args.matrix_file)?;

    let result = transform::filter_values(&handle, args.min, args.max)
        .with_context(|| format!("Failed to filter {}", args.matrix_file.display()))?;
    info!(
        "Kept {} of {} regions within [{:?}, {:?}]",
        result.nrows(),
        handle.nrows(),
        args.min,
        args.max
    );

    common::save(&result, &output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_strand() {
        for (flag, strand) in [("+", Strand::Forward), ("-", Strand::Reverse), (".", Strand::Unknown)] {
            let args = FilterStrandArgs::from_iter_safe(&[
                "filterStrand", "-m", "in.gz", "-o", "out.gz", "--strand", flag,
            ])
            .unwrap();
            assert_eq!(args.strand, strand);
        }
    }

    #[test]
    fn rejects_unknown_strand() {
        assert!(FilterStrandArgs::from_iter_safe(&[
            "filterStrand", "-m", "in.gz", "-o", "out.gz", "--strand", "x",
        ])
        .is_err());
    }

    #[test]
    fn parses_negative_bounds() {
        let args = FilterValuesArgs::from_iter_safe(&[
            "filterValues", "-m", "in.gz", "-o", "out.gz", "--min", "-1.5", "--max", "10",
        ])
        .unwrap();
        assert_eq!(args.min, Some(-1.5));
        assert_eq!(args.max, Some(10.0));
    }
}
