//! Type-name normalization and referenced-name derivation.
//!
//! Raw signature names go through four steps before they count as a
//! reference: array markers are stripped, value types are boxed or dropped
//! depending on the [`PrimitivePolicy`], the universal base type and the
//! no-value markers are filtered, and the owning type itself is removed.
//! The survivors are de-duplicated in first-occurrence order.

use phf::phf_map;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Value type names and their canonical reference form.
static BOXED: phf::Map<&'static str, &'static str> = phf_map! {
    "boolean" => "java.lang.Boolean",
    "byte" => "java.lang.Byte",
    "char" => "java.lang.Character",
    "short" => "java.lang.Short",
    "int" => "java.lang.Integer",
    "long" => "java.lang.Long",
    "float" => "java.lang.Float",
    "double" => "java.lang.Double",
};

/// Names that are never worth resolving: the universal base type and the
/// no-value return markers.
pub const EXCLUDED: &[&str] = &["java.lang.Object", "void", "java.lang.Void"];

/// How value types in signatures are treated when deriving references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitivePolicy {
    /// Replace value types by their boxed reference type and keep them.
    #[default]
    #[serde(rename = "box")]
    Boxed,
    /// Discard value types entirely.
    #[serde(rename = "drop")]
    Dropped,
}

impl PrimitivePolicy {
    /// Maps one raw signature name to the reference it contributes, if any.
    ///
    /// Self-references are not filtered here; see [`referenced_names`].
    pub fn reference(self, raw: &str) -> Option<String> {
        let element = strip_array_markers(raw);
        let name = match (self, BOXED.get(element.as_str())) {
            (PrimitivePolicy::Boxed, Some(boxed)) => (*boxed).to_string(),
            (PrimitivePolicy::Dropped, Some(_)) => return None,
            (_, None) => element,
        };

        (!name.is_empty() && !is_excluded(&name)).then_some(name)
    }
}

/// Removes every `[` and `]` from a type name (`int[][]` becomes `int`).
pub fn strip_array_markers(name: &str) -> String {
    name.chars().filter(|c| !matches!(c, '[' | ']')).collect()
}

/// Canonical reference form of `name`; unchanged when it is not a value type.
pub fn boxed(name: &str) -> &str {
    BOXED.get(name).copied().unwrap_or(name)
}

pub fn is_primitive(name: &str) -> bool {
    BOXED.contains_key(name)
}

pub fn is_excluded(name: &str) -> bool {
    EXCLUDED.contains(&name)
}

/// Derives the referenced names of type `identity` from its raw signature
/// names, given in scan order.
pub fn referenced_names<'a, I>(identity: &str, raw_names: I, policy: PrimitivePolicy) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = FxHashSet::default();
    let mut names = Vec::new();

    for raw in raw_names {
        let Some(name) = policy.reference(raw) else {
            continue;
        };
        if name == identity || seen.contains(&name) {
            continue;
        }
        seen.insert(name.clone());
        names.push(name);
    }

    names
}
