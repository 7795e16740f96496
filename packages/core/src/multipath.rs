//! Splitting of path-list variables such as `XDG_DATA_DIRS`

use std::ffi::OsStr;
use std::path::PathBuf;

/// Split `value` on `separator`, keeping non-empty segments in source order
pub(crate) fn split_path_list(value: &OsStr, separator: char) -> Vec<PathBuf> {
    let paths = segments(value, separator);
    tracing::trace!(entries = paths.len(), "split path list");
    paths
}

#[cfg(unix)]
fn segments(value: &OsStr, separator: char) -> Vec<PathBuf> {
    use std::os::unix::ffi::OsStrExt;

    debug_assert!(separator.is_ascii());
    let separator = separator as u8;
    value
        .as_bytes()
        .split(|&b| b == separator)
        .filter(|segment| !segment.is_empty())
        .map(|segment| PathBuf::from(OsStr::from_bytes(segment)))
        .collect()
}

#[cfg(not(unix))]
fn segments(value: &OsStr, separator: char) -> Vec<PathBuf> {
    value
        .to_string_lossy()
        .split(separator)
        .filter(|segment| !segment.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Keep only the highest-priority entry unless `multipath` is set
pub(crate) fn select(mut paths: Vec<PathBuf>, multipath: bool) -> Vec<PathBuf> {
    if !multipath {
        paths.truncate(1);
    }
    paths
}
