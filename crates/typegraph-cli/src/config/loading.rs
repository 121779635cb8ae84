use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};
use serde::Serialize;
use typegraph_core::PrimitivePolicy;

use crate::cli::ResolveArgs;
use crate::config::ClosureConfig;
use crate::error::{ConfigError, Result};

/// Config file picked up from the working directory.
pub const CONFIG_FILE: &str = "typegraph.toml";

/// Prefix of environment variables, e.g. `TYPEGRAPH_MAX_TYPES=500`.
pub const ENV_PREFIX: &str = "TYPEGRAPH_";

const ENV_KEYS: &[&str] = &[
    "catalogs",
    "roots",
    "patterns",
    "pre_resolved",
    "output",
    "primitives",
    "max_types",
    "pretty",
];

/// Values given on the command line. Unset options are left out so lower
/// layers show through.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct CliOverrides {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    catalogs: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    roots: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    patterns: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pre_resolved: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primitives: Option<PrimitivePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_types: Option<usize>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pretty: bool,
}

impl From<&ResolveArgs> for CliOverrides {
    fn from(args: &ResolveArgs) -> Self {
        Self {
            catalogs: args.catalogs.clone(),
            roots: args.roots.clone(),
            patterns: args.patterns.clone(),
            pre_resolved: args.pre_resolved.clone(),
            output: args.output.clone(),
            primitives: args.primitives.map(Into::into),
            max_types: args.max_types,
            pretty: args.pretty,
        }
    }
}

/// `MAX_TYPES` or `max_types` to `maxTypes`.
fn env_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for ch in key.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.push(ch.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(ch.to_ascii_lowercase());
        }
    }
    out
}

impl ClosureConfig {
    /// Load configuration relative to the working directory.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(args: &ResolveArgs) -> Result<Self> {
        Self::load_in(args, Path::new("."))
    }

    /// Like [`ClosureConfig::load`], looking for `typegraph.toml` in `dir`.
    pub fn load_in(args: &ResolveArgs, dir: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match &args.config {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.clone()).into());
            }
            Some(path) => Some(path.clone()),
            None => {
                let default_path = dir.join(CONFIG_FILE);
                default_path.exists().then_some(default_path)
            }
        };

        if let Some(path) = config_file {
            tracing::debug!(config = %path.display(), "loading config file");
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => figment.merge(Json::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
        }

        // TYPEGRAPH_CATALOGS, TYPEGRAPH_MAX_TYPES, ...
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .only(ENV_KEYS)
                .map(|key| env_key(key.as_str()).into())
                .lowercase(false),
        );

        figment = figment.merge(Serialized::defaults(CliOverrides::from(args)));

        figment.extract().map_err(|e| {
            let field = if e.path.is_empty() {
                "configuration".to_string()
            } else {
                e.path.join(".")
            };
            ConfigError::InvalidValue {
                field,
                value: e.kind.to_string(),
                hint: "Check typegraph.toml, TYPEGRAPH_* variables and argument types".to_string(),
            }
            .into()
        })
    }
}
