#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "test-support"))]
use std::ffi::OsString;
#[cfg(any(test, feature = "test-support"))]
use std::path::PathBuf;

#[cfg(any(test, feature = "test-support"))]
use super::{KnownFolder, Platform, PlatformFamily};

/// In-memory platform for tests
///
/// Starts with an empty environment, no password-database entry, no known
/// folders and a last OS error of `0`.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone)]
pub struct FixedPlatform {
    family: PlatformFamily,
    vars: HashMap<String, OsString>,
    passwd_home: Option<PathBuf>,
    known_folders: HashMap<KnownFolder, PathBuf>,
    last_os_error: i32,
}

#[cfg(any(test, feature = "test-support"))]
impl FixedPlatform {
    pub fn new(family: PlatformFamily) -> Self {
        Self {
            family,
            vars: HashMap::new(),
            passwd_home: None,
            known_folders: HashMap::new(),
            last_os_error: 0,
        }
    }

    pub fn unix() -> Self {
        Self::new(PlatformFamily::Unix)
    }

    pub fn macos() -> Self {
        Self::new(PlatformFamily::MacOs)
    }

    pub fn windows() -> Self {
        Self::new(PlatformFamily::Windows)
    }

    pub fn set_var(&mut self, name: &str, value: impl Into<OsString>) -> &mut Self {
        self.vars.insert(name.to_string(), value.into());
        self
    }

    pub fn remove_var(&mut self, name: &str) -> &mut Self {
        self.vars.remove(name);
        self
    }

    pub fn set_passwd_home(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.passwd_home = Some(path.into());
        self
    }

    pub fn set_known_folder(&mut self, folder: KnownFolder, path: impl Into<PathBuf>) -> &mut Self {
        self.known_folders.insert(folder, path.into());
        self
    }

    pub fn set_last_os_error(&mut self, code: i32) -> &mut Self {
        self.last_os_error = code;
        self
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Default for FixedPlatform {
    fn default() -> Self {
        Self::unix()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Platform for FixedPlatform {
    fn family(&self) -> PlatformFamily {
        self.family
    }

    fn var(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).cloned()
    }

    fn passwd_home(&self) -> Option<PathBuf> {
        self.passwd_home.clone()
    }

    fn known_folder(&self, folder: KnownFolder) -> Option<PathBuf> {
        self.known_folders.get(&folder).cloned()
    }

    fn last_os_error(&self) -> i32 {
        self.last_os_error
    }
}
