//! Type catalogs: metadata files describing the public shape of types.
//!
//! A catalog is a JSON or TOML document listing types with their methods,
//! fields and constructors. Members carry an optional `visibility`; only
//! public members end up in the [`Registry`] built from a catalog.
//!
//! ```json
//! {
//!   "types": [
//!     {
//!       "name": "demo.Box",
//!       "kind": "concrete",
//!       "fields": [{ "name": "contents", "type": "demo.Item" }],
//!       "methods": [
//!         { "name": "get", "returnType": "demo.Item", "modifiers": ["FINAL"] },
//!         { "name": "reset", "returnType": "void", "visibility": "private" }
//!       ],
//!       "constructors": [{ "parameters": ["demo.Item"] }]
//!     },
//!     { "name": "demo.Item" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;
use crate::model::{
    ConstructorSignature, FieldDescriptor, MethodSignature, Modifier, TypeKind, TypeShape,
    Visibility,
};
use crate::normalize::PrimitivePolicy;
use crate::resolver::Registry;

/// Supported on-disk catalog encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(other) => Err(CatalogError::UnsupportedFormat(other.to_string())),
            None => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Deserialized catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    pub types: Vec<CatalogType>,
}

/// One catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogType {
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub methods: Vec<CatalogMethod>,
    #[serde(default)]
    pub fields: Vec<CatalogField>,
    #[serde(default)]
    pub constructors: Vec<CatalogConstructor>,
}

/// Method entry. Unknown keys are rejected, as for every catalog struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CatalogMethod {
    pub name: String,
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub visibility: Visibility,
}

/// Modifiers a field may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldModifier {
    Static,
    Final,
}

impl From<FieldModifier> for Modifier {
    fn from(modifier: FieldModifier) -> Self {
        match modifier {
            FieldModifier::Static => Modifier::Static,
            FieldModifier::Final => Modifier::Final,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub modifiers: Vec<FieldModifier>,
    #[serde(default)]
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConstructor {
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
}

impl From<CatalogMethod> for MethodSignature {
    fn from(method: CatalogMethod) -> Self {
        MethodSignature {
            name: method.name,
            modifiers: method.modifiers,
            parameters: method.parameters,
            return_type: method.return_type,
        }
    }
}

impl From<CatalogField> for FieldDescriptor {
    fn from(field: CatalogField) -> Self {
        FieldDescriptor {
            name: field.name,
            type_name: field.type_name,
            modifiers: field.modifiers.into_iter().map(Modifier::from).collect(),
        }
    }
}

impl From<CatalogConstructor> for ConstructorSignature {
    fn from(constructor: CatalogConstructor) -> Self {
        ConstructorSignature::new(constructor.parameters)
    }
}

impl CatalogType {
    /// Public shape of this entry.
    pub fn into_shape(self) -> TypeShape {
        TypeShape {
            name: self.name,
            kind: self.kind,
            methods: self
                .methods
                .into_iter()
                .filter(|m| m.visibility.is_public())
                .map(MethodSignature::from)
                .collect(),
            fields: self
                .fields
                .into_iter()
                .filter(|f| f.visibility.is_public())
                .map(FieldDescriptor::from)
                .collect(),
            constructors: self
                .constructors
                .into_iter()
                .filter(|c| c.visibility.is_public())
                .map(ConstructorSignature::from)
                .collect(),
        }
    }
}

impl Catalog {
    /// Parses catalog text in the given format. `origin` is only used in
    /// error messages.
    pub fn parse(source: &str, format: CatalogFormat, origin: &Path) -> Result<Self, CatalogError> {
        let parse_error = |message: String| CatalogError::Parse {
            path: origin.to_path_buf(),
            message,
        };

        match format {
            CatalogFormat::Json => {
                serde_json::from_str(source).map_err(|e| parse_error(e.to_string()))
            }
            CatalogFormat::Toml => toml::from_str(source).map_err(|e| parse_error(e.to_string())),
        }
    }

    /// Reads and parses a catalog file.
    pub fn read(path: &Path) -> Result<Self, CatalogError> {
        let format = CatalogFormat::from_path(path)?;
        let source = fs::read_to_string(path).map_err(|error| CatalogError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        Self::parse(&source, format, path)
    }

    /// Builds a registry from the public shapes of this catalog.
    pub fn into_registry(self, policy: PrimitivePolicy) -> Result<Registry, CatalogError> {
        let mut registry = Registry::with_policy(policy);
        for entry in self.types {
            registry.insert(entry.into_shape())?;
        }
        Ok(registry)
    }
}

impl Registry {
    /// Loads one catalog file.
    pub fn load(path: impl AsRef<Path>, policy: PrimitivePolicy) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let registry = Catalog::read(path)?.into_registry(policy)?;
        debug!(catalog = %path.display(), types = registry.len(), "loaded catalog");
        Ok(registry)
    }

    /// Loads and merges several catalog files. A name may be defined by
    /// only one of them.
    pub fn load_all<I, P>(paths: I, policy: PrimitivePolicy) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut registry = Registry::with_policy(policy);
        for path in paths {
            registry.merge(Self::load(path, policy)?)?;
        }
        Ok(registry)
    }

    /// Parses a JSON catalog held in memory.
    pub fn from_json_str(source: &str, policy: PrimitivePolicy) -> Result<Self, CatalogError> {
        Catalog::parse(source, CatalogFormat::Json, &PathBuf::from("<memory>"))?
            .into_registry(policy)
    }

    /// Parses a TOML catalog held in memory.
    pub fn from_toml_str(source: &str, policy: PrimitivePolicy) -> Result<Self, CatalogError> {
        Catalog::parse(source, CatalogFormat::Toml, &PathBuf::from("<memory>"))?
            .into_registry(policy)
    }
}
