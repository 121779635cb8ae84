use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::enums::PrimitivesArg;

/// Available Typegraph subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the closure of one or more root types
    ///
    /// Loads the catalogs, resolves the roots and every type they reach, and
    /// writes the closure document as JSON to stdout or --output.
    Resolve(ResolveArgs),

    /// List type names defined by catalogs
    ///
    /// Prints one name per line, optionally filtered by glob patterns.
    List(ListArgs),
}

/// Arguments for the resolve command
///
/// Every option except --config may also come from typegraph.toml or from
/// TYPEGRAPH_* environment variables. Values given here win.
#[derive(Args, Debug, Default)]
pub struct ResolveArgs {
    /// Root type names
    ///
    /// Examples:
    ///   typegraph resolve demo.Box --catalog types.json
    ///   typegraph resolve demo.Box demo.Node --catalog a.json --catalog b.toml
    #[arg(value_name = "ROOT")]
    pub roots: Vec<String>,

    /// Catalog file to load (.json or .toml), repeatable
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    pub catalogs: Vec<PathBuf>,

    /// Glob selecting catalog types as additional roots, repeatable
    ///
    /// Matches are appended after the explicit roots, in catalog order.
    ///
    /// Example: --pattern 'demo.model.*'
    #[arg(short = 'p', long = "pattern", value_name = "GLOB")]
    pub patterns: Vec<String>,

    /// Names resolved by an earlier run; they are left out of the output
    #[arg(long = "pre-resolved", value_name = "NAME", value_delimiter = ',')]
    pub pre_resolved: Vec<String>,

    /// Write the document to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// How value types such as int are treated when following references
    ///
    /// - box: follow the boxed type (int becomes java.lang.Integer)
    /// - drop: never follow value types
    #[arg(long, value_enum, value_name = "POLICY")]
    pub primitives: Option<PrimitivesArg>,

    /// Stop with an error after resolving this many types
    #[arg(long, value_name = "N")]
    pub max_types: Option<usize>,

    /// Pretty-print the JSON document
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (TOML or JSON) used instead of ./typegraph.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the list command
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Glob patterns selecting which names to print; all names when empty
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Catalog file to load (.json or .toml), repeatable
    #[arg(short = 'c', long = "catalog", value_name = "FILE", required = true)]
    pub catalogs: Vec<PathBuf>,
}
