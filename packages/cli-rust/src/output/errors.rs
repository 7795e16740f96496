//! Error display for CLI commands

use appdirs_core::{Category, DirsError, PlatformFamily};
use console::style;

/// Print a styled error with a hint on how to fix the environment
pub fn show_error(err: &anyhow::Error) {
    eprintln!("{} {}", style("Error:").red().bold(), err);

    if let Some(tip) = err.downcast_ref::<DirsError>().and_then(tip_for) {
        eprintln!();
        eprintln!("  {} {}", style("Tip:").cyan(), tip);
    }
}

/// Suggest a fix for a resolution failure
fn tip_for(err: &DirsError) -> Option<String> {
    match err {
        DirsError::Unresolved { category, .. } => Some(match PlatformFamily::current() {
            PlatformFamily::Windows => format!(
                "The {category} directory comes from a Windows known folder. Check that the user profile is loaded."
            ),
            PlatformFamily::MacOs | PlatformFamily::Unix => {
                format!("Ensure HOME or the {} variable is set.", xdg_var(*category))
            }
        }),
        DirsError::UnknownCategory(_) => Some(format!(
            "Valid categories: {}",
            Category::ALL
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

fn xdg_var(category: Category) -> &'static str {
    match category {
        Category::UserData => "XDG_DATA_HOME",
        Category::SiteData => "XDG_DATA_DIRS",
        Category::UserConfig => "XDG_CONFIG_HOME",
        Category::SiteConfig => "XDG_CONFIG_DIRS",
        Category::UserCache | Category::UserLog => "XDG_CACHE_HOME",
        Category::UserState => "XDG_STATE_HOME",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_tip_lists_categories() {
        let tip = tip_for(&DirsError::UnknownCategory("temp".to_string())).unwrap();
        assert!(tip.contains("user-data"));
        assert!(tip.contains("user-log"));
    }

    #[test]
    fn unresolved_tip_mentions_category_or_variable() {
        let tip = tip_for(&DirsError::Unresolved {
            category: Category::UserCache,
            code: 2,
        })
        .unwrap();

        #[cfg(windows)]
        assert!(tip.contains("user-cache"));

        #[cfg(not(windows))]
        assert!(tip.contains("XDG_CACHE_HOME"));
    }

    #[test]
    fn log_shares_the_cache_variable() {
        assert_eq!(xdg_var(Category::UserLog), xdg_var(Category::UserCache));
    }
}
