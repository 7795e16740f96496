use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use super::{KnownFolder, Platform, PlatformFamily};

/// Zero-sized type that queries the running host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemPlatform;

impl Platform for SystemPlatform {
    #[inline]
    fn family(&self) -> PlatformFamily {
        PlatformFamily::current()
    }

    #[inline]
    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }

    fn passwd_home(&self) -> Option<PathBuf> {
        // Only reached once HOME is unset or empty, where `directories`
        // falls through to the password database entry.
        #[cfg(unix)]
        {
            let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
            tracing::trace!(found = home.is_some(), "password database home lookup");
            home
        }
        #[cfg(not(unix))]
        {
            None
        }
    }

    fn known_folder(&self, folder: KnownFolder) -> Option<PathBuf> {
        #[cfg(windows)]
        {
            super::windows::known_folder(folder)
        }
        #[cfg(not(windows))]
        {
            tracing::trace!(?folder, "known folders are only available on Windows");
            None
        }
    }

    #[inline]
    fn last_os_error(&self) -> i32 {
        io::Error::last_os_error().raw_os_error().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_is_current() {
        assert_eq!(SystemPlatform.family(), PlatformFamily::current());
    }

    #[test]
    fn var_delegates_to_std_env() {
        let std_result = std::env::var_os("PATH");
        assert_eq!(SystemPlatform.var("PATH"), std_result);
        assert!(SystemPlatform.var("APPDIRS_NONEXISTENT_VAR_12345").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn passwd_home_is_absolute_when_present() {
        if let Some(home) = SystemPlatform.passwd_home() {
            assert!(home.is_absolute());
        }
    }

    #[cfg(unix)]
    #[test]
    fn passwd_home_agrees_with_non_empty_home() {
        if let Some(home) = std::env::var_os("HOME").filter(|h| !h.is_empty()) {
            assert_eq!(SystemPlatform.passwd_home(), Some(PathBuf::from(home)));
        }
    }

    #[cfg(windows)]
    #[test]
    fn known_folders_resolve() {
        for folder in [
            KnownFolder::RoamingAppData,
            KnownFolder::LocalAppData,
            KnownFolder::ProgramData,
        ] {
            let path = SystemPlatform.known_folder(folder);
            assert!(path.is_some(), "{folder:?} should resolve");
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn known_folders_are_absent_off_windows() {
        assert!(SystemPlatform.known_folder(KnownFolder::ProgramData).is_none());
    }
}
