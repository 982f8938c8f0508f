//! `rbind` and `cbind`: merge several matrix files into one.

use anyhow::{Context, Result};
use log::info;
use sigmat_lib::transform;
use std::path::PathBuf;
use structopt::StructOpt;

use crate::commands::common::{self, OutputArgs, OutputConfig};

/// CLI arguments shared by `rbind` and `cbind`.
#[derive(Debug, Clone, StructOpt)]
pub struct MergeArgs {
    /// Matrix files to merge, in order. The first one drives row order for `cbind`.
    #[structopt(long = "matrixFile", short = "m", required = true, min_values = 1)]
    pub matrix_files: Vec<PathBuf>,

    #[structopt(flatten)]
    pub output: OutputArgs,
}

fn describe(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Stack matrices on top of each other (same columns, new rows).
pub fn run_rbind(args: MergeArgs) -> Result<()> {
    let output = OutputConfig::from(args.output).prepare()?;
    let inputs = common::load_all(&args.matrix_files)?;

    info!("Row-binding {} matrices", inputs.len());
    let result = transform::rbind(inputs)
        .with_context(|| format!("Failed to rbind {}", describe(&args.matrix_files)))?;

    common::save(&result, &output)
}

/// Join matrices side by side, matching rows by region name.
pub fn run_cbind(args: MergeArgs) -> Result<()> {
    let output = OutputConfig::from(args.output).prepare()?;
    let inputs = common::load_all(&args.matrix_files)?;

    info!("Column-binding {} matrices", inputs.len());
    let result = transform::cbind(inputs)
        .with_context(|| format!("Failed to cbind {}", describe(&args.matrix_files)))?;

    common::save(&result, &output)
}
