//! Resolve command implementation.
//!
//! Implements `typegraph resolve`: load catalogs, expand patterns into
//! roots, run the closure and write the document.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};
use typegraph_core::{
    ClosureBuilder, ClosureDocument, ClosureError, Limited, Observer, Registry, TypeDescription,
    TypeResolver,
};

use crate::cli::ResolveArgs;
use crate::config::ClosureConfig;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Execute the resolve command.
///
/// 1. Load and validate configuration (CLI > Env > File > Defaults)
/// 2. Load and merge the catalogs
/// 3. Expand patterns into additional roots
/// 4. Run the closure with a spinner
/// 5. Write the document to the output file or stdout
pub fn execute(args: ResolveArgs, quiet: bool) -> Result<()> {
    let start_time = Instant::now();

    let config = ClosureConfig::load(&args)?;
    config.validate()?;

    let document = run(&config, quiet)?;
    write_document(&document, &config, quiet)?;

    let elapsed = start_time.elapsed();
    info!(types = document.len(), elapsed_ms = elapsed.as_millis() as u64, "resolve finished");
    if !quiet {
        ui::success(&format!(
            "Resolved {} in {}",
            ui::pluralize(document.len(), "type"),
            ui::format_duration(elapsed)
        ));
    }

    Ok(())
}

/// Loads the catalogs named by `config` and computes the closure.
pub fn run(config: &ClosureConfig, quiet: bool) -> Result<ClosureDocument> {
    let registry = Registry::load_all(&config.catalogs, config.primitives)?;
    info!(
        catalogs = config.catalogs.len(),
        types = registry.len(),
        "catalogs loaded"
    );

    let roots = collect_roots(config, &registry)?;
    if roots.is_empty() {
        return Err(CliError::InvalidArgument(
            "No root types: the patterns matched nothing in the catalogs".to_string(),
        ));
    }
    debug!(roots = roots.len(), pre_resolved = config.pre_resolved.len(), "starting closure");

    let spinner = if quiet {
        ui::Spinner::hidden()
    } else {
        ui::Spinner::new(&format!("Resolving {}...", ui::pluralize(roots.len(), "root")))
    };

    let result = match config.max_types {
        Some(limit) => closure(&Limited::new(&registry, limit), config, &roots, &spinner),
        None => closure(&registry, config, &roots, &spinner),
    };

    match result {
        Ok(document) => {
            spinner.finish(&format!(
                "Resolved {} from {}",
                ui::pluralize(document.len(), "type"),
                ui::pluralize(roots.len(), "root")
            ));
            Ok(document)
        }
        Err(err) => {
            spinner.fail("Closure failed");
            Err(err.into())
        }
    }
}

fn closure<R: TypeResolver + ?Sized>(
    resolver: &R,
    config: &ClosureConfig,
    roots: &[String],
    spinner: &ui::Spinner,
) -> std::result::Result<ClosureDocument, ClosureError> {
    let mut count = 0usize;
    ClosureBuilder::new(resolver)
        .pre_resolved(config.pre_resolved.iter().cloned())
        .observer(Observer::structured(|ty: &TypeDescription| {
            count += 1;
            spinner.resolved(count, ty.identity());
        }))
        .build(roots)
}

/// Explicit roots followed by pattern matches not already listed.
fn collect_roots(config: &ClosureConfig, registry: &Registry) -> Result<Vec<String>> {
    let mut roots = config.roots.clone();
    for pattern in &config.patterns {
        let matches = registry.matching(std::slice::from_ref(pattern))?;
        if matches.is_empty() {
            warn!(pattern = %pattern, "pattern matched no catalog types");
        }
        for name in matches {
            if !roots.contains(&name) {
                roots.push(name);
            }
        }
    }
    Ok(roots)
}

fn write_document(document: &ClosureDocument, config: &ClosureConfig, quiet: bool) -> Result<()> {
    match &config.output {
        Some(path) => {
            write_to_file(document, path, config.pretty)?;
            if !quiet {
                let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
                ui::info(&format!("Wrote {} ({})", path.display(), ui::format_size(size)));
            }
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            document.write_json(&mut out, config.pretty)?;
            writeln!(out)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn write_to_file(document: &ClosureDocument, path: &Path, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path(parent)?;
    }
    let file = File::create(path).with_path(path)?;
    let mut writer = BufWriter::new(file);
    document
        .write_json(&mut writer, pretty)
        .context(format!("Failed to write {}", path.display()))?;
    writeln!(writer)?;
    writer.flush()?;
    debug!(output = %path.display(), "document written");
    Ok(())
}
