pub mod common;
pub mod filter;
pub mod info;
pub mod merge;
pub mod relabel;
pub mod subset;

pub use filter::{run_filter_strand, run_filter_values, FilterStrandArgs, FilterValuesArgs};
pub use info::{run_data_range, run_info, DataRangeArgs, InfoArgs};
pub use merge::{run_cbind, run_rbind, MergeArgs};
pub use relabel::{run_relabel, RelabelArgs};
pub use subset::{run_subset, SubsetArgs};
