//! # typegraph-core
//!
//! Extracts the public shape of named types and computes the closed set of
//! every type reachable through those shapes.
//!
//! ## Overview
//!
//! ```text
//!   roots ──▶ ClosureBuilder ──resolve(name)──▶ TypeResolver
//!                  │    ▲                          │
//!                  │    └──── TypeDescription ◀────┘
//!                  │          (referenced names)
//!                  ▼
//!           ClosureDocument { roots, types }
//! ```
//!
//! - [`model`] - type shapes, member signatures and sealed descriptions
//! - [`normalize`] - value-type boxing, exclusions and reference derivation
//! - [`resolver`] - the resolver capability, an in-memory [`Registry`] and
//!   the [`Limited`] budget wrapper
//! - [`catalog`] - JSON/TOML metadata files loaded into a registry
//! - [`closure`] - the breadth-first traversal
//! - [`document`] - the serializable result
//!
//! ## Quick Start
//!
//! ```rust
//! use typegraph_core::{PrimitivePolicy, Registry, resolve_closure};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Registry::from_json_str(
//!     r#"{ "types": [
//!         { "name": "demo.Node", "fields": [{ "name": "next", "type": "demo.Node" }] }
//!     ] }"#,
//!     PrimitivePolicy::Boxed,
//! )?;
//!
//! let document = resolve_closure(&registry, ["demo.Node"])?;
//! assert_eq!(document.len(), 1);
//! println!("{}", document.to_pretty_json()?);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod closure;
pub mod document;
pub mod error;
pub mod model;
pub mod normalize;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogFormat};
pub use closure::{ClosureBuilder, Observer, resolve_closure};
pub use document::ClosureDocument;
pub use error::{CatalogError, ClosureError, ResolveError, Result};
pub use model::{
    ConstructorSignature, FieldDescriptor, MethodSignature, Modifier, TypeDescription, TypeKind,
    TypeShape, Visibility,
};
pub use normalize::PrimitivePolicy;
pub use resolver::{Limited, Registry, TypeResolver};
