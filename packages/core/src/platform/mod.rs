//! Platform capability abstraction
//!
//! Everything the resolver needs from the host sits behind [`Platform`]:
//! environment lookup, the password-database home directory, Windows known
//! folders and the last OS error. [`SystemPlatform`] talks to the real host;
//! `FixedPlatform` (tests or the `test-support` feature) can pose as any
//! platform family so Windows and macOS rules are testable anywhere.

mod fixed;
mod system;
#[cfg(windows)]
mod windows;

use std::ffi::OsString;
use std::path::PathBuf;

#[cfg(any(test, feature = "test-support"))]
pub use fixed::FixedPlatform;
pub use system::SystemPlatform;

/// The directory conventions a platform follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
    /// Known folders and the AppData hierarchy
    Windows,
    /// The `~/Library` layout
    MacOs,
    /// XDG Base Directory environment variables
    Unix,
}

impl PlatformFamily {
    /// Family of the platform this crate was compiled for
    pub const fn current() -> Self {
        if cfg!(windows) {
            PlatformFamily::Windows
        } else if cfg!(target_os = "macos") {
            PlatformFamily::MacOs
        } else {
            PlatformFamily::Unix
        }
    }

    /// Separator between entries of a path-list variable
    pub const fn path_list_separator(self) -> char {
        match self {
            PlatformFamily::Windows => ';',
            PlatformFamily::MacOs | PlatformFamily::Unix => ':',
        }
    }
}

/// Windows known folders the resolver queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownFolder {
    /// `FOLDERID_RoamingAppData` / `CSIDL_APPDATA`
    RoamingAppData,
    /// `FOLDERID_LocalAppData` / `CSIDL_LOCAL_APPDATA`
    LocalAppData,
    /// `FOLDERID_ProgramData` / `CSIDL_COMMON_APPDATA`
    ProgramData,
}

/// Read-only host queries used for base-path discovery
///
/// Implementations must be reentrant; the resolver calls them from any thread
/// without coordination.
pub trait Platform: Send + Sync {
    /// Directory conventions to apply
    fn family(&self) -> PlatformFamily;

    /// Raw environment variable lookup
    fn var(&self, name: &str) -> Option<OsString>;

    /// Home directory of the current user from the password database
    fn passwd_home(&self) -> Option<PathBuf>;

    /// Location of a Windows known folder
    fn known_folder(&self, folder: KnownFolder) -> Option<PathBuf>;

    /// Last OS error code (errno or `GetLastError`), `0` when none is pending
    fn last_os_error(&self) -> i32;

    fn path_list_separator(&self) -> char {
        self.family().path_list_separator()
    }
}
