//! Show subcommand
//!
//! Displays every directory category in table or JSON format.

use anyhow::Result;
use appdirs_core::{AppDirs, Category, ResolvedDirs};
use clap::Args;
use comfy_table::{Cell, Color, Table};

/// Arguments for `appdirs show`
#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Only show these categories (e.g. user-data, site-config)
    #[arg(long = "only", value_name = "CATEGORY", value_delimiter = ',')]
    pub only: Vec<Category>,
}

/// Show resolved directories for every requested category
///
/// Categories that fail to resolve are listed with their error instead of
/// aborting the whole listing.
pub fn cmd_show(args: &ShowArgs, dirs: &AppDirs, json: bool, quiet: bool) -> Result<()> {
    let mut resolved = dirs.resolve_all();
    if !args.only.is_empty() {
        resolved.entries.retain(|e| args.only.contains(&e.category));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    println!("{}", render_table(&resolved));

    if !quiet {
        println!();
        println!("Identity: {}", describe_identity(&resolved));
    }

    Ok(())
}

/// Build the category/path table
pub(crate) fn render_table(resolved: &ResolvedDirs) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Path"]);

    for entry in &resolved.entries {
        let value = match &entry.error {
            Some(err) => Cell::new(err).fg(Color::Red),
            None => Cell::new(join_paths(&entry.paths)),
        };
        table.add_row(vec![Cell::new(category_label(entry.category)), value]);
    }

    table
}

fn category_label(category: Category) -> String {
    if category.is_multipath() {
        format!("{category} (list)")
    } else {
        category.to_string()
    }
}

fn join_paths(paths: &[std::path::PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the identity triple for display
fn describe_identity(resolved: &ResolvedDirs) -> String {
    let identity = &resolved.identity;
    let Some(appname) = identity.appname() else {
        return "(no appname, showing base directories)".to_string();
    };

    let mut parts = vec![format!("appname={appname}")];
    if let Some(author) = identity.appauthor() {
        parts.push(format!("appauthor={author}"));
    }
    if let Some(version) = identity.version() {
        parts.push(format!("version={version}"));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use appdirs_core::{AppIdentity, ResolvedEntry};

    use super::*;

    fn resolved(identity: AppIdentity) -> ResolvedDirs {
        ResolvedDirs {
            identity,
            entries: vec![
                ResolvedEntry {
                    category: Category::UserData,
                    paths: vec![PathBuf::from("/home/alice/.local/share/App")],
                    error: None,
                },
                ResolvedEntry {
                    category: Category::SiteData,
                    paths: vec![
                        PathBuf::from("/usr/local/share/App"),
                        PathBuf::from("/usr/share/App"),
                    ],
                    error: None,
                },
                ResolvedEntry {
                    category: Category::UserCache,
                    paths: Vec::new(),
                    error: Some("Could not resolve the user-cache directory".to_string()),
                },
            ],
        }
    }

    #[test]
    fn table_lists_each_category() {
        let rendered = render_table(&resolved(AppIdentity::new("App"))).to_string();
        assert!(rendered.contains("user-data"));
        assert!(rendered.contains("site-data (list)"));
        assert!(rendered.contains("/home/alice/.local/share/App"));
        assert!(rendered.contains("/usr/share/App"));
        assert!(rendered.contains("Could not resolve"));
    }

    #[test]
    fn describe_identity_lists_present_parts() {
        let r = resolved(AppIdentity::new("App").with_version("1.0"));
        assert_eq!(describe_identity(&r), "appname=App, version=1.0");
    }

    #[test]
    fn describe_identity_without_appname() {
        let r = resolved(AppIdentity::anonymous().with_author("Auth"));
        assert!(describe_identity(&r).contains("no appname"));
    }

    #[test]
    fn join_paths_one_per_line() {
        let joined = join_paths(&[PathBuf::from("/a"), PathBuf::from("/b")]);
        assert_eq!(joined, "/a\n/b");
    }
}
