//! The signal matrix value type and its on-disk container.
//!
//! - [`region`]: per-row region records
//! - [`grouping`]: row-group / sample partitions and name resolution
//! - [`params`]: header parameters, including per-sample settings
//! - [`handle`]: [`MatrixHandle`], which keeps all of the above consistent
//! - [`format`]: loader and serializer for the gzip container

pub mod format;
pub mod grouping;
pub mod handle;
pub mod params;
pub mod region;

pub use format::{read_matrix, write_matrix, WriteOptions};
pub use grouping::{resolve_group_selection, resolve_sample_selection, Dimension, Grouping, Selection};
pub use handle::{MatrixHandle, MatrixParts};
pub use params::Parameters;
pub use region::{Region, Strand};
