//! Convenience bundle of an identity, its flags and a resolver

use std::path::PathBuf;

use serde::Serialize;

use crate::category::Category;
use crate::error::Result;
use crate::identity::AppIdentity;
use crate::platform::{Platform, SystemPlatform};
use crate::resolver::DirectoryResolver;

/// An application's directories, resolved on demand
///
/// Holds the switches each category needs so callers only describe their
/// application once:
/// - `roaming`: Windows roaming profile for data, config and state
/// - `multipath`: full search list for site directories
/// - `opinion`: `Cache` / `log` suffixes for cache and log directories
#[derive(Debug, Clone)]
pub struct AppDirs<P: Platform = SystemPlatform> {
    pub identity: AppIdentity,
    pub roaming: bool,
    pub multipath: bool,
    pub opinion: bool,
    resolver: DirectoryResolver<P>,
}

impl AppDirs<SystemPlatform> {
    /// Directories for `identity` on the running host
    pub fn new(identity: AppIdentity) -> Self {
        Self::with_resolver(identity, DirectoryResolver::system())
    }
}

impl<P: Platform> AppDirs<P> {
    pub fn with_resolver(identity: AppIdentity, resolver: DirectoryResolver<P>) -> Self {
        Self {
            identity,
            roaming: false,
            multipath: false,
            opinion: true,
            resolver,
        }
    }

    pub fn with_roaming(mut self, roaming: bool) -> Self {
        self.roaming = roaming;
        self
    }

    pub fn with_multipath(mut self, multipath: bool) -> Self {
        self.multipath = multipath;
        self
    }

    pub fn with_opinion(mut self, opinion: bool) -> Self {
        self.opinion = opinion;
        self
    }

    pub fn user_data_dir(&self) -> Result<PathBuf> {
        self.resolver.user_data_dir(&self.identity, self.roaming)
    }

    pub fn site_data_dir(&self) -> Result<Vec<PathBuf>> {
        self.resolver.site_data_dir(&self.identity, self.multipath)
    }

    pub fn user_config_dir(&self) -> Result<PathBuf> {
        self.resolver.user_config_dir(&self.identity, self.roaming)
    }

    pub fn site_config_dir(&self) -> Result<Vec<PathBuf>> {
        self.resolver.site_config_dir(&self.identity, self.multipath)
    }

    pub fn user_cache_dir(&self) -> Result<PathBuf> {
        self.resolver.user_cache_dir(&self.identity, self.opinion)
    }

    pub fn user_state_dir(&self) -> Result<PathBuf> {
        self.resolver.user_state_dir(&self.identity, self.roaming)
    }

    pub fn user_log_dir(&self) -> Result<PathBuf> {
        self.resolver.user_log_dir(&self.identity, self.opinion)
    }

    /// Resolve one category with the matching flag
    pub fn resolve(&self, category: Category) -> Result<Vec<PathBuf>> {
        self.resolver
            .resolve(category, &self.identity, self.flag_for(category))
    }

    /// Resolve every category, keeping per-category failures
    pub fn resolve_all(&self) -> ResolvedDirs {
        let entries = Category::ALL
            .into_iter()
            .map(|category| match self.resolve(category) {
                Ok(paths) => ResolvedEntry {
                    category,
                    paths,
                    error: None,
                },
                Err(err) => ResolvedEntry {
                    category,
                    paths: Vec::new(),
                    error: Some(err.to_string()),
                },
            })
            .collect();

        ResolvedDirs {
            identity: self.identity.clone(),
            entries,
        }
    }

    fn flag_for(&self, category: Category) -> bool {
        match category {
            Category::UserData | Category::UserConfig | Category::UserState => self.roaming,
            Category::SiteData | Category::SiteConfig => self.multipath,
            Category::UserCache | Category::UserLog => self.opinion,
        }
    }
}

/// Snapshot of every category for one identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDirs {
    pub identity: AppIdentity,
    pub entries: Vec<ResolvedEntry>,
}

impl ResolvedDirs {
    pub fn get(&self, category: Category) -> Option<&ResolvedEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.error.is_some())
    }
}

/// One category's paths, or the reason it could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub category: Category,
    pub paths: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedPlatform, KnownFolder};

    fn unix_dirs() -> AppDirs<FixedPlatform> {
        let mut platform = FixedPlatform::unix();
        platform
            .set_var("HOME", "/home/alice")
            .set_var("XDG_DATA_DIRS", "/a:/b");
        AppDirs::with_resolver(
            AppIdentity::new("App").with_version("1.0"),
            DirectoryResolver::new(platform),
        )
    }

    #[test]
    fn defaults_enable_opinion_only() {
        let dirs = unix_dirs();
        assert!(!dirs.roaming);
        assert!(!dirs.multipath);
        assert!(dirs.opinion);
    }

    #[test]
    fn accessors_pass_their_flags() {
        let dirs = unix_dirs();
        assert_eq!(
            dirs.user_log_dir().unwrap(),
            PathBuf::from("/home/alice/.cache/App/1.0/log")
        );
        assert_eq!(
            dirs.site_data_dir().unwrap(),
            vec![PathBuf::from("/a/App/1.0")]
        );

        let dirs = dirs.with_multipath(true).with_opinion(false);
        assert_eq!(dirs.site_data_dir().unwrap().len(), 2);
        assert_eq!(
            dirs.user_log_dir().unwrap(),
            PathBuf::from("/home/alice/.cache/App/1.0")
        );
    }

    #[test]
    fn resolve_matches_accessors() {
        let dirs = unix_dirs().with_roaming(true);
        assert_eq!(
            dirs.resolve(Category::UserConfig).unwrap(),
            vec![dirs.user_config_dir().unwrap()]
        );
        assert_eq!(
            dirs.resolve(Category::SiteConfig).unwrap(),
            dirs.site_config_dir().unwrap()
        );
        assert_eq!(
            dirs.resolve(Category::UserState).unwrap(),
            vec![dirs.user_state_dir().unwrap()]
        );
        assert_eq!(
            dirs.resolve(Category::UserData).unwrap(),
            vec![dirs.user_data_dir().unwrap()]
        );
        assert_eq!(
            dirs.resolve(Category::UserCache).unwrap(),
            vec![dirs.user_cache_dir().unwrap()]
        );
    }

    #[test]
    fn resolve_all_covers_every_category() {
        let resolved = unix_dirs().resolve_all();
        assert_eq!(resolved.entries.len(), Category::ALL.len());
        assert!(!resolved.has_errors());
        assert_eq!(
            resolved.get(Category::UserData).unwrap().paths,
            vec![PathBuf::from("/home/alice/.local/share/App/1.0")]
        );
    }

    #[test]
    fn resolve_all_keeps_failures_per_category() {
        let mut platform = FixedPlatform::windows();
        platform
            .set_known_folder(KnownFolder::LocalAppData, r"C:\Users\alice\AppData\Local")
            .set_last_os_error(2);
        let dirs = AppDirs::with_resolver(AppIdentity::new("App"), DirectoryResolver::new(platform));

        let resolved = dirs.resolve_all();
        assert!(resolved.has_errors());
        assert!(resolved.get(Category::SiteData).unwrap().error.is_some());
        assert!(resolved.get(Category::UserCache).unwrap().error.is_none());
        assert!(resolved.get(Category::UserLog).unwrap().error.is_none());
    }

    #[test]
    fn resolved_dirs_serialize_to_json() {
        let json = serde_json::to_value(unix_dirs().resolve_all()).unwrap();
        assert_eq!(json["identity"]["appname"], "App");
        assert_eq!(json["entries"][0]["category"], "user-data");
        assert_eq!(
            json["entries"][0]["paths"][0],
            "/home/alice/.local/share/App/1.0"
        );
        assert!(json["entries"][0].get("error").is_none());
    }
}
