//! Get subcommand
//!
//! Prints the path(s) of one category, one per line.

use std::path::PathBuf;

use anyhow::Result;
use appdirs_core::{AppDirs, Category};
use clap::Args;

/// Arguments for `appdirs get`
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Directory category (user-data, site-data, user-config, site-config, user-cache, user-state, user-log)
    pub category: Category,
}

/// Print one category's path(s)
///
/// Resolution failures are returned so the caller can exit non-zero.
pub fn cmd_get(args: &GetArgs, dirs: &AppDirs, json: bool) -> Result<()> {
    let paths = dirs.resolve(args.category)?;
    println!("{}", render_paths(&paths, json)?);
    Ok(())
}

pub(crate) fn render_paths(paths: &[PathBuf], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(paths)?);
    }
    Ok(paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_is_one_path_per_line() {
        let paths = vec![PathBuf::from("/a/App"), PathBuf::from("/b/App")];
        assert_eq!(render_paths(&paths, false).unwrap(), "/a/App\n/b/App");
    }

    #[test]
    fn json_output_is_an_array() {
        let paths = vec![PathBuf::from("/a/App")];
        let rendered = render_paths(&paths, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value, serde_json::json!(["/a/App"]));
    }
}
