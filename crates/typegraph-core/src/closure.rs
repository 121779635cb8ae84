//! Breadth-first closure traversal.
//!
//! Starting from the root names, every resolved description contributes its
//! referenced names to a FIFO queue. A name is marked as seen the moment it
//! is queued, so no name is ever queued twice, and each identity appears at
//! most once in the resulting document.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::{debug, info, trace};

use crate::document::ClosureDocument;
use crate::error::{ClosureError, Result};
use crate::model::TypeDescription;
use crate::resolver::TypeResolver;

/// Receives each description right after it is resolved, in discovery order.
pub enum Observer<'a> {
    /// Compact JSON text of each description.
    Text(Box<dyn FnMut(&str) + 'a>),
    /// The description itself.
    Structured(Box<dyn FnMut(&TypeDescription) + 'a>),
}

impl<'a> Observer<'a> {
    pub fn text(callback: impl FnMut(&str) + 'a) -> Self {
        Self::Text(Box::new(callback))
    }

    pub fn structured(callback: impl FnMut(&TypeDescription) + 'a) -> Self {
        Self::Structured(Box::new(callback))
    }

    fn notify(&mut self, description: &TypeDescription) -> Result<()> {
        match self {
            Self::Text(callback) => {
                let json = serde_json::to_string(description)?;
                callback(&json);
            }
            Self::Structured(callback) => callback(description),
        }
        Ok(())
    }
}

impl std::fmt::Debug for Observer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(_) => f.write_str("Observer::Text"),
            Self::Structured(_) => f.write_str("Observer::Structured"),
        }
    }
}

/// Computes the transitive closure of a set of root type names.
///
/// ```
/// use typegraph_core::{ClosureBuilder, FieldDescriptor, Registry, TypeKind, TypeShape};
///
/// let mut registry = Registry::new();
/// registry.insert(
///     TypeShape::new("demo.Box", TypeKind::Concrete)
///         .field(FieldDescriptor::new("contents", "demo.Item")),
/// )?;
/// registry.insert(TypeShape::new("demo.Item", TypeKind::Concrete))?;
///
/// let document = ClosureBuilder::new(&registry).build(["demo.Box"])?;
/// assert_eq!(document.identities().collect::<Vec<_>>(), ["demo.Box", "demo.Item"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ClosureBuilder<'a, R: ?Sized> {
    resolver: &'a R,
    pre_resolved: Vec<String>,
    observer: Option<Observer<'a>>,
}

impl<'a, R: TypeResolver + ?Sized> ClosureBuilder<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Self {
            resolver,
            pre_resolved: Vec::new(),
            observer: None,
        }
    }

    /// Names already resolved elsewhere. They never enter the output and
    /// are never queued, but roots are resolved even when listed here.
    pub fn pre_resolved<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pre_resolved.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn observer(mut self, observer: Observer<'a>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Runs the traversal. The first resolution failure aborts it and no
    /// document is produced.
    pub fn build<I, S>(self, roots: I) -> Result<ClosureDocument>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Self {
            resolver,
            pre_resolved,
            mut observer,
        } = self;

        let roots: Vec<String> = roots.into_iter().map(Into::into).collect();

        let mut seen: FxHashSet<String> = pre_resolved.into_iter().collect();
        seen.extend(roots.iter().cloned());
        let mut queue: VecDeque<String> = roots.iter().cloned().collect();
        let mut emitted: FxHashSet<String> = FxHashSet::default();
        let mut types: Vec<TypeDescription> = Vec::new();

        while let Some(name) = queue.pop_front() {
            // Repeated roots are queued once per occurrence.
            if emitted.contains(&name) {
                trace!(name = %name, "skipping repeated root");
                continue;
            }

            let description = resolver
                .resolve(&name)
                .map_err(|e| ClosureError::from_resolve(&name, e))?;

            if !emitted.insert(description.identity().to_string()) {
                debug!(
                    name = %name,
                    identity = description.identity(),
                    "identity already resolved"
                );
                continue;
            }
            emitted.insert(name.clone());
            seen.insert(name);

            if let Some(observer) = observer.as_mut() {
                observer.notify(&description)?;
            }

            let mut discovered = 0usize;
            for referenced in description.referenced_names() {
                if seen.insert(referenced.clone()) {
                    queue.push_back(referenced.clone());
                    discovered += 1;
                }
            }

            debug!(
                identity = description.identity(),
                discovered,
                queued = queue.len(),
                "resolved type"
            );
            types.push(description);
        }

        info!(roots = roots.len(), types = types.len(), "type closure complete");
        Ok(ClosureDocument::new(roots, types))
    }
}

/// Closure of `roots` with no pre-resolved names and no observer.
pub fn resolve_closure<R, I, S>(resolver: &R, roots: I) -> Result<ClosureDocument>
where
    R: TypeResolver + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ClosureBuilder::new(resolver).build(roots)
}
