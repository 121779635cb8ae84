//! The resolver capability and its in-memory implementations.
//!
//! The closure traversal never inspects types itself: it asks a
//! [`TypeResolver`] for the description of each name. [`Registry`] answers
//! from a table of [`TypeShape`]s (see [`crate::catalog`] for loading one
//! from disk) and [`Limited`] caps how many answers any resolver may give.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use globset::{Glob, GlobSetBuilder};
use indexmap::IndexMap;

use crate::error::{CatalogError, ResolveError};
use crate::model::{TypeDescription, TypeShape};
use crate::normalize::PrimitivePolicy;

/// Turns a fully-qualified type name into its description.
///
/// Implementations must answer consistently for the duration of one
/// traversal. They may block; the traversal imposes no timeout.
pub trait TypeResolver {
    fn resolve(&self, name: &str) -> Result<TypeDescription, ResolveError>;
}

impl<R: TypeResolver + ?Sized> TypeResolver for &R {
    fn resolve(&self, name: &str) -> Result<TypeDescription, ResolveError> {
        (**self).resolve(name)
    }
}

impl<R: TypeResolver + ?Sized> TypeResolver for Box<R> {
    fn resolve(&self, name: &str) -> Result<TypeDescription, ResolveError> {
        (**self).resolve(name)
    }
}

impl<R: TypeResolver + ?Sized> TypeResolver for Arc<R> {
    fn resolve(&self, name: &str) -> Result<TypeDescription, ResolveError> {
        (**self).resolve(name)
    }
}

/// In-memory resolver keyed by fully-qualified name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    shapes: IndexMap<String, TypeShape>,
    policy: PrimitivePolicy,
}

impl Registry {
    /// Creates an empty registry using the default primitive policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry that seals descriptions under `policy`.
    pub fn with_policy(policy: PrimitivePolicy) -> Self {
        Self {
            shapes: IndexMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> PrimitivePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: PrimitivePolicy) {
        self.policy = policy;
    }

    /// Registers a shape. Names must be unique.
    pub fn insert(&mut self, shape: TypeShape) -> Result<(), CatalogError> {
        if self.shapes.contains_key(&shape.name) {
            return Err(CatalogError::DuplicateType(shape.name));
        }
        self.shapes.insert(shape.name.clone(), shape);
        Ok(())
    }

    /// Moves every shape of `other` into this registry, keeping this
    /// registry's policy. Fails on the first name both define.
    pub fn merge(&mut self, other: Registry) -> Result<(), CatalogError> {
        for shape in other.shapes.into_values() {
            self.insert(shape)?;
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    pub fn shape(&self, name: &str) -> Option<&TypeShape> {
        self.shapes.get(name)
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Registered names matching any of the glob `patterns`, in insertion
    /// order.
    pub fn matching<S: AsRef<str>>(&self, patterns: &[S]) -> Result<Vec<String>, CatalogError> {
        let patterns: Vec<&str> = patterns.iter().map(|p| p.as_ref()).collect();

        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            let glob = Glob::new(pattern).map_err(|e| CatalogError::Pattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|e| CatalogError::Pattern {
            pattern: patterns.join(", "),
            message: e.to_string(),
        })?;

        Ok(self
            .names()
            .filter(|name| set.is_match(name))
            .map(str::to_string)
            .collect())
    }
}

impl TypeResolver for Registry {
    fn resolve(&self, name: &str) -> Result<TypeDescription, ResolveError> {
        let shape = self
            .shapes
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::UnknownType(name.to_string()))?;
        Ok(TypeDescription::from_shape(shape, self.policy))
    }
}

/// Wraps a resolver and refuses to answer more than `limit` requests.
#[derive(Debug)]
pub struct Limited<R> {
    inner: R,
    limit: usize,
    used: AtomicUsize,
}

impl<R> Limited<R> {
    pub fn new(inner: R, limit: usize) -> Self {
        Self {
            inner,
            limit,
            used: AtomicUsize::new(0),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of requests answered or attempted so far.
    pub fn used(&self) -> usize {
        self.used.load(Ordering::Relaxed).min(self.limit)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: TypeResolver> TypeResolver for Limited<R> {
    fn resolve(&self, name: &str) -> Result<TypeDescription, ResolveError> {
        let attempt = self.used.fetch_add(1, Ordering::Relaxed);
        if attempt >= self.limit {
            return Err(ResolveError::LimitExceeded { limit: self.limit });
        }
        self.inner.resolve(name)
    }
}
