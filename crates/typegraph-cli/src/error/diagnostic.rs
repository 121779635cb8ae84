//! Miette diagnostic conversion for CLI errors.

use miette::Report;
use typegraph_core::{CatalogError, ClosureError, ResolveError};

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Closure(e) => closure_error_to_miette(e),
        CliError::Catalog(e) => catalog_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ClosureError to miette Report
pub fn closure_error_to_miette(err: ClosureError) -> Report {
    match err {
        ClosureError::UnknownType { name } => miette::miette!(
            "Unknown type: {}\n\nHint: Add '{}' to one of the --catalog files or list it with --pre-resolved",
            name,
            name
        ),
        ClosureError::Resolver {
            name,
            source: ResolveError::LimitExceeded { limit },
        } => miette::miette!(
            "Stopped at '{}' after resolving {} types\n\nHint: Raise --max-types or narrow the roots",
            name,
            limit
        ),
        other => miette::miette!("{}", other),
    }
}

/// Convert CatalogError to miette Report
pub fn catalog_error_to_miette(err: CatalogError) -> Report {
    match err {
        CatalogError::UnsupportedFormat(ext) => miette::miette!(
            "Unsupported catalog format: {}\n\nHint: Catalogs must end in .json or .toml",
            ext
        ),
        CatalogError::DuplicateType(name) => miette::miette!(
            "Type '{}' is defined more than once\n\nHint: Each type may appear in only one catalog",
            name
        ),
        other => miette::miette!("{}", other),
    }
}
