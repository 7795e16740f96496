//! CLI command implementations

mod get;
mod show;

pub use get::{GetArgs, cmd_get};
pub use show::{ShowArgs, cmd_show};
