//! sigmat - structural operations on signal matrix files
//!
//! sigmat reads the gzip matrix files written by `computeMatrix` (one row per
//! region, one column per bin, rows split into groups and columns into samples)
//! and rearranges them without touching the signal values.
//!
//! # Tools
//!
//! - `info`: list group and sample labels
//! - `dataRange`: per-sample min / max / median / percentiles
//! - `subset`: keep and reorder groups and samples
//! - `filterStrand`: keep regions on one strand
//! - `filterValues`: keep regions whose values fall in a range
//! - `relabel`: rename groups or samples
//! - `rbind`: stack matrices with the same columns
//! - `cbind`: join matrices with the same regions
//!
//! # Usage
//!
//! ```bash
//! sigmat info -m matrix.gz
//! sigmat subset -m matrix.gz -o genes.gz --groups genes --samples H3K4me3 input
//! sigmat filterStrand -m matrix.gz -o plus.gz --strand +
//! sigmat rbind -m a.gz b.gz -o rows.gz
//! sigmat cbind -m a.gz b.gz -o columns.gz --threads 4
//! ```

extern crate sigmat_lib;
pub mod commands;
use anyhow::Result;
use env_logger::Env;
use log::*;
use sigmat_lib::utils;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case", author, about)]
/// Structural operations on signal matrix files
struct Args {
    #[structopt(subcommand)]
    subcommand: Subcommand,
}

#[derive(StructOpt)]
enum Subcommand {
    /// List the group and sample labels of a matrix
    #[structopt(name = "info")]
    Info(commands::InfoArgs),
    /// Report per-sample value ranges
    #[structopt(name = "dataRange")]
    DataRange(commands::DataRangeArgs),
    /// Keep and reorder groups and/or samples
    #[structopt(name = "subset")]
    Subset(commands::SubsetArgs),
    /// Keep regions on a single strand
    #[structopt(name = "filterStrand")]
    FilterStrand(commands::FilterStrandArgs),
    /// Keep regions whose values fall within a range
    #[structopt(name = "filterValues")]
    FilterValues(commands::FilterValuesArgs),
    /// Replace group and/or sample labels
    #[structopt(name = "relabel")]
    Relabel(commands::RelabelArgs),
    /// Concatenate matrices by rows
    #[structopt(name = "rbind")]
    Rbind(commands::MergeArgs),
    /// Concatenate matrices by columns, matching region names
    #[structopt(name = "cbind")]
    Cbind(commands::MergeArgs),
}

impl Subcommand {
    fn run(self) -> Result<()> {
        match self {
            Subcommand::Info(args) => commands::run_info(args)?,
            Subcommand::DataRange(args) => commands::run_data_range(args)?,
            Subcommand::Subset(args) => commands::run_subset(args)?,
            Subcommand::FilterStrand(args) => commands::run_filter_strand(args)?,
            Subcommand::FilterValues(args) => commands::run_filter_values(args)?,
            Subcommand::Relabel(args) => commands::run_relabel(args)?,
            Subcommand::Rbind(args) => commands::run_rbind(args)?,
            Subcommand::Cbind(args) => commands::run_cbind(args)?,
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(err) = Args::from_args().subcommand.run() {
        if utils::is_broken_pipe(&err) {
            std::process::exit(0);
        }
        error!("{:#}", err);
        std::process::exit(1);
    }
    Ok(())
}
