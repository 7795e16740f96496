//! The seven directory categories

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DirsError;

/// A kind of application directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    UserData,
    SiteData,
    UserConfig,
    SiteConfig,
    UserCache,
    UserState,
    UserLog,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 7] = [
        Category::UserData,
        Category::SiteData,
        Category::UserConfig,
        Category::SiteConfig,
        Category::UserCache,
        Category::UserState,
        Category::UserLog,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::UserData => "user-data",
            Category::SiteData => "site-data",
            Category::UserConfig => "user-config",
            Category::SiteConfig => "site-config",
            Category::UserCache => "user-cache",
            Category::UserState => "user-state",
            Category::UserLog => "user-log",
        }
    }

    /// Site categories resolve to an ordered search list rather than one path
    pub fn is_multipath(self) -> bool {
        matches!(self, Category::SiteData | Category::SiteConfig)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DirsError;

    /// Accepts `user-data`, `user_data` or `user_data_dir` spellings, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let name = normalized.strip_suffix("-dir").unwrap_or(&normalized);
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| DirsError::UnknownCategory(s.to_string()))
    }
}
