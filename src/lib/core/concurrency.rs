use crate::core::error::{MatrixError, Result};
use log::{error, warn};

/// Validate and normalize a requested CPU count.
///
/// Zero is rejected; asking for more threads than the machine reports is allowed
/// but logged, since the loader and the gzip writer are I/O bound anyway.
pub fn determine_allowed_cpus(desired: usize) -> Result<usize> {
    if desired == 0 {
        error!("Must select > 0 threads");
        return Err(MatrixError::InvalidInput(
            "Too few threads selected. Min 1".to_string(),
        ));
    }
    let available = num_cpus::get();
    if desired > available {
        warn!(
            "Specified {} threads but only {} CPUs are available",
            desired, available
        );
    }
    Ok(desired)
}
