//! appdirs CLI - Print per-platform application directories
//!
//! This module contains the CLI implementation used by the `appdirs` binary.

mod commands;
mod output;

use anyhow::Result;
use appdirs_core::{AppDirs, AppIdentity};
use clap::{Args, Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

/// Show where an application should keep its data, config, cache, state and logs
#[derive(Parser)]
#[command(name = "appdirs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Show per-platform application directories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    app: AppArgs,

    /// Output as JSON instead of table format
    #[arg(long, global = true)]
    json: bool,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

/// Application identity and resolution switches
#[derive(Args, Debug, Default)]
struct AppArgs {
    /// Application name appended below each base directory
    #[arg(long, global = true)]
    appname: Option<String>,

    /// Application author (only used on Windows)
    #[arg(long, global = true)]
    appauthor: Option<String>,

    /// Application version appended after the name
    #[arg(long = "app-version", global = true, value_name = "VERSION")]
    app_version: Option<String>,

    /// Use the Windows roaming profile for data, config and state
    #[arg(long, global = true)]
    roaming: bool,

    /// Return the full search list for site directories
    #[arg(long, global = true)]
    multipath: bool,

    /// Skip the opinionated "Cache" and "log" subdirectories
    #[arg(long, global = true)]
    no_opinion: bool,
}

impl AppArgs {
    fn identity(&self) -> AppIdentity {
        AppIdentity::from_parts(
            self.appname.clone(),
            self.appauthor.clone(),
            self.app_version.clone(),
        )
    }

    fn app_dirs(&self) -> AppDirs {
        AppDirs::new(self.identity())
            .with_roaming(self.roaming)
            .with_multipath(self.multipath)
            .with_opinion(!self.no_opinion)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show every directory category
    Show(commands::ShowArgs),
    /// Print the path(s) of a single category
    Get(commands::GetArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let dirs = cli.app.app_dirs();

    if cli.verbose > 0 {
        eprintln!(
            "{} Platform: {:?}",
            style("[info]").cyan(),
            appdirs_core::PlatformFamily::current()
        );
    }

    let outcome = match cli.command {
        Some(Commands::Get(args)) => commands::cmd_get(&args, &dirs, cli.json),
        Some(Commands::Show(args)) => commands::cmd_show(&args, &dirs, cli.json, cli.quiet),
        None => commands::cmd_show(&commands::ShowArgs::default(), &dirs, cli.json, cli.quiet),
    };

    if let Err(err) = outcome {
        output::show_error(&err);
        std::process::exit(1);
    }
    Ok(())
}

/// Route `tracing` output to stderr
///
/// `RUST_LOG` wins when set; otherwise `-v` enables debug and `-vv` trace.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identity_flags_before_and_after_subcommand() {
        let cli = Cli::try_parse_from([
            "appdirs",
            "--appname",
            "App",
            "get",
            "user-cache",
            "--appauthor",
            "Auth",
            "--app-version",
            "1.0",
        ])
        .unwrap();

        assert_eq!(
            cli.app.identity(),
            AppIdentity::new("App").with_author("Auth").with_version("1.0")
        );
        assert!(matches!(cli.command, Some(Commands::Get(_))));
    }

    #[test]
    fn no_subcommand_defaults_to_show() {
        let cli = Cli::try_parse_from(["appdirs"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.app.identity(), AppIdentity::anonymous());
    }

    #[test]
    fn switches_map_onto_app_dirs() {
        let cli = Cli::try_parse_from([
            "appdirs",
            "--roaming",
            "--multipath",
            "--no-opinion",
            "show",
        ])
        .unwrap();
        let dirs = cli.app.app_dirs();
        assert!(dirs.roaming);
        assert!(dirs.multipath);
        assert!(!dirs.opinion);
    }

    #[test]
    fn opinion_is_on_by_default() {
        let dirs = AppArgs::default().app_dirs();
        assert!(dirs.opinion);
        assert!(!dirs.roaming);
        assert!(!dirs.multipath);
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(Cli::try_parse_from(["appdirs", "get", "downloads"]).is_err());
    }

    #[test]
    fn verbose_counts_occurrences() {
        let cli = Cli::try_parse_from(["appdirs", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
