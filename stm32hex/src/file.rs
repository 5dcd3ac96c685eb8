//! File helpers used by the command-line tools: reading a whole input into memory
//! and opening an output for writing.

use crate::error::{HexError, HexErrorKind};
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::Path;

/// Read the entire file at `filepath`.
///
/// # Errors
/// Returns an error if the file cannot be read or is empty.
pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Vec<u8>, Box<dyn Error>> {
    let raw_bytes = std::fs::read(&filepath)?;

    if raw_bytes.is_empty() {
        return Err(Box::new(HexError::LoadError(HexErrorKind::EmptyFile)));
    }

    Ok(raw_bytes)
}

/// Create (or truncate) the file at `filepath` and wrap it in a `BufWriter`.
/// Missing parent directories are created.
///
/// # Errors
/// Returns an error if the directory or the file cannot be created.
pub fn create<P: AsRef<Path>>(filepath: P) -> Result<BufWriter<File>, Box<dyn Error>> {
    // Ensure the parent directory exists
    if let Some(parent) = filepath.as_ref().parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(filepath)?;

    Ok(BufWriter::new(file))
}
