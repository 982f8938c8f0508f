//! Structural transforms over [`MatrixHandle`](crate::matrix::MatrixHandle).
//!
//! Every function here takes whole handles and returns a new, consistent one;
//! none of them perform I/O.
//!
//! - [`select`]: group / sample selection and reordering
//! - [`filter`]: row filters (strand, value range) behind the [`RowFilter`] trait
//! - [`rbind`]: row concatenation
//! - [`cbind`]: column concatenation matched by region name
//! - [`relabel`]: label replacement
//! - [`query`]: read-only label listing and data ranges

pub mod cbind;
pub mod filter;
pub mod query;
pub mod rbind;
pub mod relabel;
pub mod select;

pub use cbind::cbind;
pub use filter::{filter_rows, filter_strand, filter_values, RowFilter, StrandFilter, ValueRangeFilter};
pub use query::{data_range, info, MatrixInfo, SampleRange};
pub use rbind::rbind;
pub use relabel::relabel;
pub use select::subset;
