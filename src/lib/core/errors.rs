use anyhow::Error;
use std::io;

/// Returns `true` if the error originated from a broken pipe.
///
/// Library errors wrap I/O failures in [`MatrixError::Io`](crate::core::error::MatrixError),
/// so both the bare and the wrapped form are recognised.
#[inline]
pub fn is_broken_pipe(err: &Error) -> bool {
    err.chain().any(|cause| {
        let io_err = match cause.downcast_ref::<io::Error>() {
            Some(io_err) => Some(io_err),
            None => match cause.downcast_ref::<crate::core::error::MatrixError>() {
                Some(crate::core::error::MatrixError::Io(io_err)) => Some(io_err),
                _ => None,
            },
        };
        io_err
            .map(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
            .unwrap_or(false)
    })
}
