use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::model::TypeDescription;

/// Result of one closure traversal: the roots exactly as requested and
/// every discovered type in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosureDocument {
    roots: Vec<String>,
    types: Vec<TypeDescription>,
}

impl ClosureDocument {
    pub fn new(roots: Vec<String>, types: Vec<TypeDescription>) -> Self {
        Self { roots, types }
    }

    /// Root names, duplicates included.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn types(&self) -> &[TypeDescription] {
        &self.types
    }

    pub fn get(&self, identity: &str) -> Option<&TypeDescription> {
        self.types.iter().find(|ty| ty.identity() == identity)
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.get(identity).is_some()
    }

    /// Identities in discovery order. Feed these to
    /// [`ClosureBuilder::pre_resolved`](crate::ClosureBuilder::pre_resolved)
    /// to continue a closure in a later run.
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(TypeDescription::identity)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<TypeDescription>) {
        (self.roots, self.types)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Streams the document as JSON into `writer`.
    pub fn write_json<W: Write>(&self, writer: W, pretty: bool) -> serde_json::Result<()> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)
        } else {
            serde_json::to_writer(writer, self)
        }
    }

    /// Reads a document back. Stored referenced names are kept as they are.
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }
}
