//! File system utilities for output directory setup and size reporting.

use anyhow::{Result, bail};
use std::{fs, path::Path};

/// Kilobytes constant (1024 bytes)
pub const KB: u64 = 1024;

/// Megabytes constant (1024 * 1024 bytes)
pub const MB: u64 = KB * 1024;

/// Gigabytes constant (1024 * 1024 * 1024 bytes)
pub const GB: u64 = MB * 1024;

/// Converts bytes to kilobytes.
#[inline]
pub fn bytes_to_kb(bytes: u64) -> f64 {
    bytes as f64 / KB as f64
}

/// Converts bytes to megabytes.
#[inline]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / MB as f64
}

/// Converts bytes to gigabytes.
#[inline]
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / GB as f64
}

/// Formats a byte size into a human-readable string with appropriate unit.
///
/// # Examples
///
/// ```
/// use cutil::fs::pretty_bytes_size;
///
/// assert_eq!(pretty_bytes_size(1024), "1.00 KB");
/// assert_eq!(pretty_bytes_size(1500), "1.46 KB");
/// assert_eq!(pretty_bytes_size(1024 * 1024), "1.00 MB");
/// ```
pub fn pretty_bytes_size(bytes: u64) -> String {
    if bytes >= GB {
        format!("{:.2} GB", bytes_to_gb(bytes))
    } else if bytes >= MB {
        format!("{:.2} MB", bytes_to_mb(bytes))
    } else if bytes >= KB {
        format!("{:.2} KB", bytes_to_kb(bytes))
    } else {
        format!("{} B", bytes)
    }
}

/// Gets the size of a file in bytes.
///
/// Returns 0 if the file doesn't exist or its metadata can't be read.
pub fn file_size(path: impl AsRef<Path>) -> u64 {
    match fs::metadata(path.as_ref()) {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            log::warn!(
                "failed to get metadata of {}: {e}",
                path.as_ref().display()
            );
            0
        }
    }
}

/// Creates `path` and all of its parents.
///
/// A directory that already exists counts as success. A regular file in the
/// way is an error.
///
/// # Examples
///
/// ```no_run
/// use cutil::fs::ensure_dir;
///
/// ensure_dir("output")?;
/// ensure_dir("output")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if path.is_dir() {
        return Ok(());
    }

    if path.exists() {
        bail!("{} exists and is not a directory", path.display());
    }

    fs::create_dir_all(path)?;
    log::debug!("created directory {}", path.display());

    Ok(())
}

/// Checks if a file exists at the given path.
///
/// Directories are not files.
pub fn file_exist(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}
