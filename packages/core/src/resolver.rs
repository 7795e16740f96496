//! Per-category directory resolution
//!
//! [`DirectoryResolver`] discovers the platform base path for a category,
//! then appends the identity suffix. Windows reads known folders, macOS uses
//! the `~/Library` layout, and everything else follows the XDG Base
//! Directory variables with their documented defaults.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::category::Category;
use crate::compose::{self, LOG_SEGMENT};
use crate::error::{DirsError, Result};
use crate::identity::AppIdentity;
use crate::multipath;
use crate::platform::{KnownFolder, Platform, PlatformFamily, SystemPlatform};

const XDG_DATA_HOME: &str = "XDG_DATA_HOME";
const XDG_DATA_DIRS: &str = "XDG_DATA_DIRS";
const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
const XDG_CONFIG_DIRS: &str = "XDG_CONFIG_DIRS";
const XDG_CACHE_HOME: &str = "XDG_CACHE_HOME";
const XDG_STATE_HOME: &str = "XDG_STATE_HOME";

const DEFAULT_DATA_DIRS: &[&str] = &["/usr/local/share", "/usr/share"];
const DEFAULT_CONFIG_DIRS: &[&str] = &["/etc/xdg"];

const MACOS_SITE_DATA: &str = "/Library/Application Support";
const MACOS_SITE_CONFIG: &str = "/Library/Preferences";

/// Literal home used when neither `HOME` nor the password database answer
const HOME_FALLBACK: &str = "~";

/// Resolves application directories against a [`Platform`]
///
/// Every operation is a pure function of its arguments and the platform's
/// read-only queries, so one resolver can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct DirectoryResolver<P: Platform = SystemPlatform> {
    platform: P,
}

impl DirectoryResolver<SystemPlatform> {
    /// Resolver bound to the running host
    pub fn system() -> Self {
        Self::new(SystemPlatform)
    }
}

impl<P: Platform> DirectoryResolver<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// User-specific data directory
    ///
    /// - Windows: `RoamingAppData` when `roaming`, else `LocalAppData`, then `[appauthor]\appname\[version]`
    /// - macOS: `~/Library/Application Support/appname/[version]`
    /// - Unix: `$XDG_DATA_HOME` or `~/.local/share`, then `appname/[version]`
    pub fn user_data_dir(&self, identity: &AppIdentity, roaming: bool) -> Result<PathBuf> {
        let category = Category::UserData;
        let base = match self.family() {
            PlatformFamily::Windows => {
                let folder = if roaming {
                    KnownFolder::RoamingAppData
                } else {
                    KnownFolder::LocalAppData
                };
                self.known_folder(category, folder)?
            }
            PlatformFamily::MacOs => self.home_join(&["Library", "Application Support"]),
            PlatformFamily::Unix => self.xdg_home(XDG_DATA_HOME, &[".local", "share"]),
        };
        Ok(self.compose(category, base, identity, false))
    }

    /// Shared data directories, most specific first
    ///
    /// - Windows: `ProgramData`
    /// - macOS: `/Library/Application Support`
    /// - Unix: each entry of `$XDG_DATA_DIRS`, or `/usr/local/share` and `/usr/share`
    ///
    /// Without `multipath` only the first entry is returned.
    pub fn site_data_dir(&self, identity: &AppIdentity, multipath: bool) -> Result<Vec<PathBuf>> {
        let category = Category::SiteData;
        let bases = match self.family() {
            PlatformFamily::Windows => vec![self.known_folder(category, KnownFolder::ProgramData)?],
            PlatformFamily::MacOs => vec![PathBuf::from(MACOS_SITE_DATA)],
            PlatformFamily::Unix => self.xdg_dirs(XDG_DATA_DIRS, DEFAULT_DATA_DIRS),
        };
        self.compose_all(category, bases, identity, multipath)
    }

    /// User-specific configuration directory
    ///
    /// Identical to [`user_data_dir`](Self::user_data_dir) on Windows. Elsewhere
    /// it is `~/Library/Preferences` on macOS or `$XDG_CONFIG_HOME` / `~/.config`.
    pub fn user_config_dir(&self, identity: &AppIdentity, roaming: bool) -> Result<PathBuf> {
        let category = Category::UserConfig;
        let base = match self.family() {
            PlatformFamily::Windows => return self.user_data_dir(identity, roaming),
            PlatformFamily::MacOs => self.home_join(&["Library", "Preferences"]),
            PlatformFamily::Unix => self.xdg_home(XDG_CONFIG_HOME, &[".config"]),
        };
        Ok(self.compose(category, base, &identity.without_author(), false))
    }

    /// Shared configuration directories, most specific first
    ///
    /// Identical to [`site_data_dir`](Self::site_data_dir) on Windows. macOS uses
    /// `/Library/Preferences`; Unix splits `$XDG_CONFIG_DIRS` or falls back to `/etc/xdg`.
    pub fn site_config_dir(
        &self,
        identity: &AppIdentity,
        multipath: bool,
    ) -> Result<Vec<PathBuf>> {
        let category = Category::SiteConfig;
        let bases = match self.family() {
            PlatformFamily::Windows => return self.site_data_dir(identity, multipath),
            PlatformFamily::MacOs => vec![PathBuf::from(MACOS_SITE_CONFIG)],
            PlatformFamily::Unix => self.xdg_dirs(XDG_CONFIG_DIRS, DEFAULT_CONFIG_DIRS),
        };
        self.compose_all(category, bases, &identity.without_author(), multipath)
    }

    /// User-specific cache directory
    ///
    /// With `opinion` on Windows, `Cache` is inserted after the app name and
    /// before the version, keeping caches apart from data under `LocalAppData`.
    pub fn user_cache_dir(&self, identity: &AppIdentity, opinion: bool) -> Result<PathBuf> {
        let category = Category::UserCache;
        let base = match self.family() {
            PlatformFamily::Windows => self.known_folder(category, KnownFolder::LocalAppData)?,
            PlatformFamily::MacOs => self.home_join(&["Library", "Caches"]),
            PlatformFamily::Unix => self.xdg_home(XDG_CACHE_HOME, &[".cache"]),
        };
        Ok(self.compose(category, base, identity, opinion))
    }

    /// User-specific state directory
    ///
    /// Windows and macOS have no separate state location and return
    /// [`user_data_dir`](Self::user_data_dir). Unix uses `$XDG_STATE_HOME` or `~/.local/state`.
    pub fn user_state_dir(&self, identity: &AppIdentity, roaming: bool) -> Result<PathBuf> {
        let category = Category::UserState;
        let base = match self.family() {
            PlatformFamily::Windows | PlatformFamily::MacOs => {
                return self.user_data_dir(identity, roaming);
            }
            PlatformFamily::Unix => self.xdg_home(XDG_STATE_HOME, &[".local", "state"]),
        };
        Ok(self.compose(category, base, &identity.without_author(), false))
    }

    /// User-specific log directory
    ///
    /// - Windows: the non-roaming [`user_data_dir`](Self::user_data_dir); `opinion` is ignored
    /// - macOS: `~/Library/Logs/appname/[version]`; `opinion` is ignored
    /// - Unix: [`user_cache_dir`](Self::user_cache_dir), plus a trailing `log` when `opinion` is set
    pub fn user_log_dir(&self, identity: &AppIdentity, opinion: bool) -> Result<PathBuf> {
        match self.family() {
            PlatformFamily::Windows => self.user_data_dir(identity, false),
            PlatformFamily::MacOs => {
                let base = self.home_join(&["Library", "Logs"]);
                Ok(self.compose(Category::UserLog, base, identity, false))
            }
            PlatformFamily::Unix => {
                let cache = self.user_cache_dir(identity, true)?;
                let path = if opinion { cache.join(LOG_SEGMENT) } else { cache };
                tracing::debug!(category = %Category::UserLog, path = %path.display(), "resolved");
                Ok(path)
            }
        }
    }

    /// Resolve any category to its path list
    ///
    /// Single-path categories yield exactly one entry. `flag` is the
    /// category's switch: roaming for data/config/state, multipath for site
    /// categories, opinion for cache/log.
    pub fn resolve(
        &self,
        category: Category,
        identity: &AppIdentity,
        flag: bool,
    ) -> Result<Vec<PathBuf>> {
        match category {
            Category::UserData => self.user_data_dir(identity, flag).map(|p| vec![p]),
            Category::SiteData => self.site_data_dir(identity, flag),
            Category::UserConfig => self.user_config_dir(identity, flag).map(|p| vec![p]),
            Category::SiteConfig => self.site_config_dir(identity, flag),
            Category::UserCache => self.user_cache_dir(identity, flag).map(|p| vec![p]),
            Category::UserState => self.user_state_dir(identity, flag).map(|p| vec![p]),
            Category::UserLog => self.user_log_dir(identity, flag).map(|p| vec![p]),
        }
    }

    fn family(&self) -> PlatformFamily {
        self.platform.family()
    }

    fn non_empty_var(&self, name: &str) -> Option<OsString> {
        let value = self.platform.var(name).filter(|v| !v.is_empty());
        tracing::trace!(name, set = value.is_some(), "environment lookup");
        value
    }

    /// `HOME`, then the password database, then a literal `~`
    fn home_dir(&self) -> PathBuf {
        if let Some(home) = self.non_empty_var("HOME") {
            return PathBuf::from(home);
        }
        if let Some(home) = self.platform.passwd_home() {
            tracing::debug!(home = %home.display(), "HOME unset, using password database entry");
            return home;
        }
        tracing::warn!("HOME unset and no password database entry, using literal {HOME_FALLBACK}");
        PathBuf::from(HOME_FALLBACK)
    }

    fn home_join(&self, segments: &[&str]) -> PathBuf {
        compose::append(self.home_dir(), segments)
    }

    /// An XDG `*_HOME` variable, or `~/<default>` when unset or empty
    fn xdg_home(&self, var: &str, default: &[&str]) -> PathBuf {
        self.non_empty_var(var)
            .map(PathBuf::from)
            .unwrap_or_else(|| self.home_join(default))
    }

    /// An XDG `*_DIRS` list, or the fixed defaults when it has no entries
    fn xdg_dirs(&self, var: &str, defaults: &[&str]) -> Vec<PathBuf> {
        let separator = self.platform.path_list_separator();
        let split = self
            .non_empty_var(var)
            .map(|value| multipath::split_path_list(&value, separator))
            .unwrap_or_default();

        if split.is_empty() {
            defaults.iter().map(PathBuf::from).collect()
        } else {
            split
        }
    }

    fn known_folder(&self, category: Category, folder: KnownFolder) -> Result<PathBuf> {
        match self
            .platform
            .known_folder(folder)
            .filter(|p| !p.as_os_str().is_empty())
        {
            Some(path) => Ok(path),
            None => {
                let err = self.unresolved(category);
                tracing::warn!(?folder, error = %err, "known folder lookup failed");
                Err(err)
            }
        }
    }

    fn unresolved(&self, category: Category) -> DirsError {
        DirsError::Unresolved {
            category,
            code: self.platform.last_os_error(),
        }
    }

    fn compose(
        &self,
        category: Category,
        base: PathBuf,
        identity: &AppIdentity,
        cache_opinion: bool,
    ) -> PathBuf {
        let segments = compose::identity_segments(identity, self.family(), cache_opinion);
        let path = compose::append(base, &segments);
        tracing::debug!(category = %category, path = %path.display(), "resolved");
        path
    }

    fn compose_all(
        &self,
        category: Category,
        bases: Vec<PathBuf>,
        identity: &AppIdentity,
        multipath: bool,
    ) -> Result<Vec<PathBuf>> {
        let bases = multipath::select(bases, multipath);
        if bases.is_empty() {
            return Err(self.unresolved(category));
        }
        Ok(bases
            .into_iter()
            .map(|base| self.compose(category, base, identity, false))
            .collect())
    }
}
