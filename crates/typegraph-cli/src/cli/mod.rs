//! Command-line interface definition for Typegraph.
//!
//! # Command Structure
//!
//! - `typegraph resolve` - compute the closure of root types and emit JSON
//! - `typegraph list` - list the type names a catalog defines

mod commands;
pub mod enums;
#[cfg(test)]
mod tests;

use clap::Parser;

pub use commands::{Command, ListArgs, ResolveArgs};
pub use enums::*;

/// Typegraph - transitive closure of type shapes
#[derive(Parser, Debug)]
#[command(
    name = "typegraph",
    version,
    about = "Resolve the transitive closure of type shapes from catalogs",
    long_about = "Typegraph loads type catalogs (JSON or TOML) describing the public shape of\n\
                  types, starts from a set of root names and follows every type mentioned by\n\
                  methods, fields and constructors until the set is closed. The result is a\n\
                  JSON document listing each reachable type exactly once."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Logs every resolved type with the number of new names it contributed.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Hides the spinner and status lines. The JSON document is still
    /// written.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
