//! Identity suffix composition
//!
//! Suffix order is fixed: `[appauthor] appname [Cache] [version]`. The author
//! and `Cache` segments only exist on Windows, and nothing is appended when no
//! app name is given.

use std::path::{self, PathBuf};

use crate::identity::AppIdentity;
use crate::platform::PlatformFamily;

/// Opinionated cache segment inserted before the version on Windows
pub(crate) const CACHE_SEGMENT: &str = "Cache";

/// Opinionated log segment appended after the full cache path on Unix
pub(crate) const LOG_SEGMENT: &str = "log";

/// Segments to append below a base directory
pub(crate) fn identity_segments<'a>(
    identity: &'a AppIdentity,
    family: PlatformFamily,
    cache_opinion: bool,
) -> Vec<&'a str> {
    let Some(appname) = identity.appname() else {
        return Vec::new();
    };
    let windows = family == PlatformFamily::Windows;

    let mut segments = Vec::with_capacity(4);
    if windows && let Some(author) = identity.appauthor() {
        segments.push(author);
    }
    segments.push(appname);
    if windows && cache_opinion {
        segments.push(CACHE_SEGMENT);
    }
    if let Some(version) = identity.version() {
        segments.push(version);
    }
    segments
}

/// Concatenate `segments` below `base`, one separator each
///
/// Segments are appended verbatim. Unlike [`PathBuf::join`], an absolute or
/// rooted segment never replaces the base.
pub(crate) fn append(base: PathBuf, segments: &[&str]) -> PathBuf {
    let mut path = base.into_os_string();
    for segment in segments {
        let needs_separator = path
            .as_encoded_bytes()
            .last()
            .is_some_and(|&b| !path::is_separator(b as char));
        if needs_separator {
            path.push(path::MAIN_SEPARATOR_STR);
        }
        path.push(segment);
    }
    PathBuf::from(path)
}
