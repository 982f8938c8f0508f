use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Create parent directories for a path when missing.
pub fn make_parent_dirs<P: AsRef<Path>>(path: P) -> io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// `true` when the path is the stdin/stdout placeholder `-`.
#[inline]
pub fn is_std_stream<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().as_os_str() == "-"
}

/// Peek at a buffered stream and report whether it starts with the gzip magic bytes.
///
/// Nothing is consumed from the reader.
pub fn has_gzip_magic<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    let buf = reader.fill_buf()?;
    Ok(buf.len() >= 2 && buf[..2] == GZIP_MAGIC)
}
