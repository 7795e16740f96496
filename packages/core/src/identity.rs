//! Application identity used to build directory suffixes

use serde::Serialize;

/// The `(appname, appauthor, version)` triple appended below a base directory
///
/// `appauthor` only contributes a segment on Windows, and neither it nor
/// `version` contribute anything unless `appname` is set. The author never
/// falls back to the app name; callers wanting that convention pass it
/// explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppIdentity {
    appname: Option<String>,
    appauthor: Option<String>,
    version: Option<String>,
}

impl AppIdentity {
    /// Identity for a named application
    pub fn new(appname: impl Into<String>) -> Self {
        Self {
            appname: Some(appname.into()),
            ..Default::default()
        }
    }

    /// Identity with no application name; operations return bare base paths
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build from optional parts, as supplied by CLI flags or FFI callers
    pub fn from_parts(
        appname: Option<String>,
        appauthor: Option<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            appname,
            appauthor,
            version,
        }
    }

    pub fn with_author(mut self, appauthor: impl Into<String>) -> Self {
        self.appauthor = Some(appauthor.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn appname(&self) -> Option<&str> {
        self.appname.as_deref()
    }

    pub fn appauthor(&self) -> Option<&str> {
        self.appauthor.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Same identity with the author removed
    pub(crate) fn without_author(&self) -> Self {
        Self {
            appauthor: None,
            ..self.clone()
        }
    }
}
