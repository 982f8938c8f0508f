//! sigmat: structural operations on genomic signal matrices
//!
//! A signal matrix has one row per genomic region and one column per signal bin.
//! Rows are partitioned into named groups (for example one per region file) and
//! columns into named samples (one per signal track). The library keeps the
//! values, the region records and both partitions consistent while matrices are
//! subset, reordered, filtered, relabelled and merged.
//!
//! # Modules
//!
//! - [`matrix`]: the [`matrix::MatrixHandle`] value type and the gzip container
//! - [`transform`]: subset, filters, rbind, cbind, relabel and read-only queries
//! - [`core`]: errors, I/O helpers and thread configuration
//! - [`utils`]: shortcuts to the most used helpers

pub mod core;
pub mod matrix;
pub mod transform;
pub mod utils;
