//! List command implementation.

use std::io::{self, Write};

use tracing::debug;
use typegraph_core::{PrimitivePolicy, Registry};

use crate::cli::ListArgs;
use crate::error::Result;

/// Execute the list command: one catalog name per line on stdout.
pub fn execute(args: ListArgs) -> Result<()> {
    let names = names(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for name in &names {
        writeln!(out, "{}", name)?;
    }
    out.flush()?;

    debug!(count = names.len(), "listed types");
    Ok(())
}

/// Catalog names selected by `args`, in catalog order.
pub fn names(args: &ListArgs) -> Result<Vec<String>> {
    let registry = Registry::load_all(&args.catalogs, PrimitivePolicy::default())?;
    if args.patterns.is_empty() {
        Ok(registry.names().map(str::to_string).collect())
    } else {
        Ok(registry.matching(&args.patterns)?)
    }
}
