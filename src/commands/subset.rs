use anyhow::{Context, Result};
use log::info;
use sigmat_lib::transform;
use std::path::PathBuf;
use structopt::StructOpt;

use crate::commands::common::{self, OutputArgs, OutputConfig};

/// CLI arguments for the `subset` subcommand.
#[derive(Debug, Clone, StructOpt)]
#[structopt(author, name = "subset")]
pub struct SubsetArgs {
    /// Input matrix file.
    #[structopt(long = "matrixFile", short = "m")]
    pub matrix_file: PathBuf,

    #[structopt(flatten)]
    pub output: OutputArgs,

    /// Groups to keep, in output order. Defaults to all groups.
    #[structopt(long, min_values = 1)]
    pub groups: Option<Vec<String>>,

    /// Samples to keep, in output order. Defaults to all samples.
    #[structopt(long, min_values = 1)]
    pub samples: Option<Vec<String>>,
}

/// Keep and reorder groups and/or samples.
pub fn run_subset(args: SubsetArgs) -> Result<()> {
    let output = OutputConfig::from(args.output).prepare()?;
    let handle = common::load(&args.matrix_file)?;

    info!(
        "Subsetting groups {:?}, samples {:?}",
        args.groups.as_deref().unwrap_or(handle.group_labels()),
        args.samples.as_deref().unwrap_or(handle.sample_labels())
    );
    let result = transform::subset(&handle, args.groups.as_deref(), args.samples.as_deref())
        .with_context(|| format!("Failed to subset {}", args.matrix_file.display()))?;

    common::save(&result, &output)
}
