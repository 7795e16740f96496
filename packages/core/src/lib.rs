//! appdirs-core - Per-platform application directories
//!
//! Answers "where do I put my stuff" for data, configuration, cache, state
//! and logs, following the XDG Base Directory spec on Unix, the `~/Library`
//! layout on macOS and the AppData known folders on Windows.
//!
//! ```
//! use appdirs_core::{AppIdentity, user_config_dir};
//!
//! let identity = AppIdentity::new("MyApp").with_author("Acme");
//! let config = user_config_dir(&identity, false).expect("config dir");
//! assert!(config.ends_with("MyApp"));
//! ```
//!
//! Directories are only computed; nothing is created or checked on disk.

pub mod app_dirs;
pub mod category;
pub mod error;
pub mod identity;
pub mod platform;
pub mod resolver;

mod compose;
mod multipath;

use std::path::PathBuf;

pub use app_dirs::{AppDirs, ResolvedDirs, ResolvedEntry};
pub use category::Category;
pub use error::{DirsError, Result};
pub use identity::AppIdentity;
#[cfg(any(test, feature = "test-support"))]
pub use platform::FixedPlatform;
pub use platform::{KnownFolder, Platform, PlatformFamily, SystemPlatform};
pub use resolver::DirectoryResolver;

/// User data directory on the running host
pub fn user_data_dir(identity: &AppIdentity, roaming: bool) -> Result<PathBuf> {
    DirectoryResolver::system().user_data_dir(identity, roaming)
}

/// Shared data directories on the running host
pub fn site_data_dir(identity: &AppIdentity, multipath: bool) -> Result<Vec<PathBuf>> {
    DirectoryResolver::system().site_data_dir(identity, multipath)
}

/// User configuration directory on the running host
pub fn user_config_dir(identity: &AppIdentity, roaming: bool) -> Result<PathBuf> {
    DirectoryResolver::system().user_config_dir(identity, roaming)
}

/// Shared configuration directories on the running host
pub fn site_config_dir(identity: &AppIdentity, multipath: bool) -> Result<Vec<PathBuf>> {
    DirectoryResolver::system().site_config_dir(identity, multipath)
}

/// User cache directory on the running host
pub fn user_cache_dir(identity: &AppIdentity, opinion: bool) -> Result<PathBuf> {
    DirectoryResolver::system().user_cache_dir(identity, opinion)
}

/// User state directory on the running host
pub fn user_state_dir(identity: &AppIdentity, roaming: bool) -> Result<PathBuf> {
    DirectoryResolver::system().user_state_dir(identity, roaming)
}

/// User log directory on the running host
pub fn user_log_dir(identity: &AppIdentity, opinion: bool) -> Result<PathBuf> {
    DirectoryResolver::system().user_log_dir(identity, opinion)
}
