//! appdirs CLI - Print per-platform application directories

fn main() -> anyhow::Result<()> {
    appdirs_cli::run()
}
