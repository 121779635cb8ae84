//! Configuration for a closure run with multi-source loading.
//!
//! Merges settings from CLI args, environment variables and a config file.
//! Priority: CLI > Environment > File > Defaults
//!
//! ```toml
//! # typegraph.toml
//! catalogs = ["types/core.json", "types/extra.toml"]
//! roots = ["demo.Box"]
//! patterns = ["demo.model.*"]
//! preResolved = ["demo.Item"]
//! primitives = "drop"
//! maxTypes = 10000
//! pretty = true
//! ```

mod loading;
mod validation;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use typegraph_core::PrimitivePolicy;

pub use loading::{CONFIG_FILE, ENV_PREFIX};

/// Settings for `typegraph resolve`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClosureConfig {
    /// Catalog files to load, merged in order
    #[serde(default)]
    pub catalogs: Vec<PathBuf>,

    /// Explicit root type names
    #[serde(default)]
    pub roots: Vec<String>,

    /// Glob patterns selecting additional roots from the catalogs
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Names resolved by an earlier run
    #[serde(default)]
    pub pre_resolved: Vec<String>,

    /// Output file; stdout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Value-type treatment (box or drop)
    #[serde(default)]
    pub primitives: PrimitivePolicy,

    /// Resolution budget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_types: Option<usize>,

    /// Pretty-print the document
    #[serde(default)]
    pub pretty: bool,
}
