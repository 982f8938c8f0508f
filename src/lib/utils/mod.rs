//! Utility re-exports.
//!
//! Shared helpers live under `crate::core`; this module keeps the short
//! `utils::*` paths used by the command-line front-end.

pub use crate::core::concurrency::determine_allowed_cpus;
pub use crate::core::errors::is_broken_pipe;
pub use crate::core::fs::make_parent_dirs;
pub use crate::core::io::{get_reader, get_table_writer, get_writer};
