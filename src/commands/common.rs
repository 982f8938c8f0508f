use anyhow::{Context, Result};
use log::{debug, info, warn};
use once_cell::sync::OnceCell;
use rayon::ThreadPoolBuilder;
use sigmat_lib::matrix::{self, MatrixHandle, WriteOptions};
use sigmat_lib::utils;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

static GLOBAL_RAYON_THREADS: OnceCell<usize> = OnceCell::new();

/// Output options shared by every subcommand that writes a matrix.
#[derive(Debug, Clone, StructOpt)]
pub struct OutputArgs {
    /// Output matrix file (gzip). Use `-` for stdout.
    #[structopt(long = "outFileName", short = "o")]
    pub out_file_name: PathBuf,

    /// Worker threads for parsing and compression.
    #[structopt(long, short = "t", default_value = "1")]
    pub threads: usize,

    /// Gzip compression level (0-9).
    #[structopt(long = "compressionLevel", default_value = "6")]
    pub compression_level: u32,
}

/// Normalised output configuration derived from [`OutputArgs`].
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub options: WriteOptions,
}

impl From<OutputArgs> for OutputConfig {
    fn from(args: OutputArgs) -> OutputConfig {
        OutputConfig {
            path: args.out_file_name,
            options: WriteOptions {
                threads: args.threads,
                compression_level: args.compression_level.min(9),
            },
        }
    }
}

impl OutputConfig {
    /// Size the global pool and clamp the compression threads to what is available.
    pub fn prepare(mut self) -> Result<Self> {
        self.options.threads = configure_global_thread_pool(self.options.threads)?;
        Ok(self)
    }
}

/// Size the rayon pool used by the matrix loader.
///
/// Only the first call builds the pool; later calls report its size.
pub fn configure_global_thread_pool(threads: usize) -> Result<usize> {
    let requested = utils::determine_allowed_cpus(threads)?;
    let active = *GLOBAL_RAYON_THREADS.get_or_try_init(|| -> Result<usize> {
        if let Err(err) = ThreadPoolBuilder::new().num_threads(requested).build_global() {
            debug!("Keeping the existing rayon pool: {}", err);
            return Ok(rayon::current_num_threads());
        }
        Ok(requested)
    })?;

    if active != requested {
        warn!("Parsing with {} threads instead of {}", active, requested);
    }
    Ok(active)
}

/// Load one matrix, naming the file in any error.
pub fn load(path: &Path) -> Result<MatrixHandle> {
    matrix::read_matrix(path).with_context(|| format!("Failed to read matrix {}", path.display()))
}

/// Load every matrix in order.
pub fn load_all(paths: &[PathBuf]) -> Result<Vec<MatrixHandle>> {
    paths.iter().map(|path| load(path)).collect()
}

/// Write the finished matrix; only called once every transform has succeeded.
pub fn save(handle: &MatrixHandle, output: &OutputConfig) -> Result<()> {
    matrix::write_matrix(handle, &output.path, &output.options)
        .with_context(|| format!("Failed to write matrix {}", output.path.display()))?;
    info!("Wrote {}", output.path.display());
    Ok(())
}
