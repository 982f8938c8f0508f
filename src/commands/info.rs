use anyhow::{Context, Result};
use grep_cli::stdout;
use log::info;
use sigmat_lib::transform::{self, MatrixInfo};
use sigmat_lib::utils;
use std::io::Write;
use std::path::PathBuf;
use structopt::StructOpt;
use termcolor::ColorChoice;

use crate::commands::common;

/// CLI arguments for the `info` subcommand.
#[derive(Debug, Clone, StructOpt)]
#[structopt(author, name = "info")]
pub struct InfoArgs {
    /// Matrix file produced by computeMatrix or by another sigmat command.
    #[structopt(long = "matrixFile", short = "m")]
    pub matrix_file: PathBuf,
}

/// CLI arguments for the `dataRange` subcommand.
#[derive(Debug, Clone, StructOpt)]
#[structopt(author, name = "dataRange")]
pub struct DataRangeArgs {
    /// Matrix file produced by computeMatrix or by another sigmat command.
    #[structopt(long = "matrixFile", short = "m")]
    pub matrix_file: PathBuf,
}

fn render_info<W: Write>(listing: &MatrixInfo, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "Groups:")?;
    for group in &listing.groups {
        writeln!(writer, "\t{}", group)?;
    }
    writeln!(writer, "Samples:")?;
    for sample in &listing.samples {
        writeln!(writer, "\t{}", sample)?;
    }
    Ok(())
}

/// Print the group and sample labels of a matrix.
pub fn run_info(args: InfoArgs) -> Result<()> {
    let handle = common::load(&args.matrix_file)?;
    let listing = transform::info(&handle);

    let mut out = stdout(ColorChoice::Never);
    render_info(&listing, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Print per-sample min / max / median / 10th / 90th percentile.
pub fn run_data_range(args: DataRangeArgs) -> Result<()> {
    let handle = common::load(&args.matrix_file)?;
    info!("Computing value ranges for {} samples", handle.samples().len());

    let mut writer = utils::get_table_writer(true);
    for range in transform::data_range(&handle) {
        writer
            .serialize(&range)
            .with_context(|| format!("Failed to report range of {}", range.sample))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_layout() {
        let listing = MatrixInfo {
            groups: vec!["genes".to_string(), "enhancers".to_string()],
            samples: vec!["H3K27ac".to_string()],
        };
        let mut buf = Vec::new();
        render_info(&listing, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Groups:\n\tgenes\n\tenhancers\nSamples:\n\tH3K27ac\n"
        );
    }

    #[test]
    fn parses_matrix_file() {
        let args = InfoArgs::from_iter_safe(&["info", "-m", "matrix.gz"]).unwrap();
        assert_eq!(args.matrix_file, PathBuf::from("matrix.gz"));
        let args = DataRangeArgs::from_iter_safe(&["dataRange", "--matrixFile", "m.gz"]).unwrap();
        assert_eq!(args.matrix_file, PathBuf::from("m.gz"));
        assert!(InfoArgs::from_iter_safe(&["info"]).is_err());
    }
}
