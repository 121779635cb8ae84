//! Typegraph CLI - resolve the transitive closure of type shapes.
//!
//! Parses arguments, initializes logging and colors, then dispatches to the
//! selected command.

use clap::Parser;
use miette::Result;
use typegraph_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args, args.quiet),
        cli::Command::List(list_args) => commands::list_execute(list_args),
    };

    result.map_err(error::cli_error_to_miette)
}
