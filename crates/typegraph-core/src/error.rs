use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a [`TypeResolver`](crate::resolver::TypeResolver).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The resolver has no description for the requested name.
    #[error("unknown type '{0}'")]
    UnknownType(String),

    /// A bounded resolver ran out of budget.
    #[error("resolution limit of {limit} types exceeded")]
    LimitExceeded {
        /// Maximum number of resolutions the resolver allows.
        limit: usize,
    },

    /// Resolver-specific failure, passed through untouched.
    #[error("{0}")]
    Other(String),
}

/// Failure of a closure traversal. No partial document accompanies it.
#[derive(Debug, Error)]
pub enum ClosureError {
    /// A reachable name could not be resolved.
    #[error("unknown type '{name}'")]
    UnknownType {
        /// Name that failed to resolve.
        name: String,
    },

    /// Any other resolver failure.
    #[error("failed to resolve '{name}': {source}")]
    Resolver {
        /// Name being resolved when the failure happened.
        name: String,
        /// Underlying resolver error.
        #[source]
        source: ResolveError,
    },

    /// Serializing a description for a text observer failed.
    #[error("failed to serialize type description: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ClosureError {
    /// Attributes a resolver error to the name it was raised for.
    pub fn from_resolve(name: &str, error: ResolveError) -> Self {
        match error {
            ResolveError::UnknownType(name) => Self::UnknownType { name },
            source => Self::Resolver {
                name: name.to_string(),
                source,
            },
        }
    }

    /// Name that could not be resolved, if this is an unknown-type failure.
    pub fn unknown_type(&self) -> Option<&str> {
        match self {
            Self::UnknownType { name } => Some(name),
            _ => None,
        }
    }
}

/// Failure while loading or querying a type catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    #[error("failed to read catalog '{path}': {error}")]
    Io {
        /// Catalog path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// The catalog content did not match the expected shape.
    #[error("failed to parse catalog '{path}': {message}")]
    Parse {
        /// Catalog path, or a placeholder for in-memory sources.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The file extension names no supported catalog format.
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// A type name was defined twice.
    #[error("type '{0}' is defined more than once")]
    DuplicateType(String),

    /// A root pattern is not a valid glob.
    #[error("invalid pattern '{pattern}': {message}")]
    Pattern {
        /// Offending pattern.
        pattern: String,
        /// Glob compiler message.
        message: String,
    },
}

/// Result alias for closure traversals.
pub type Result<T, E = ClosureError> = std::result::Result<T, E>;
