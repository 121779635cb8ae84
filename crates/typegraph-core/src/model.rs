//! Data model for type shapes and the descriptions built from them.
//!
//! A resolver reads a [`TypeShape`]: the public surface of one named type as
//! a flat list of methods, fields and constructors. Sealing a shape with a
//! [`PrimitivePolicy`] produces a [`TypeDescription`], which groups overloads
//! by name, de-duplicates fields and caches the names the type references.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::normalize::{self, PrimitivePolicy};

/// Classification of a described type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Concrete,
    Interface,
    Abstract,
}

impl TypeKind {
    pub fn is_interface(self) -> bool {
        self == TypeKind::Interface
    }

    pub fn is_abstract_or_interface(self) -> bool {
        matches!(self, TypeKind::Interface | TypeKind::Abstract)
    }
}

/// Member modifier. Serialized as `STATIC`, `FINAL` and `DEFAULT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modifier {
    Static,
    Final,
    Default,
}

/// Sorts and de-duplicates a modifier list so it behaves as a set.
fn modifier_set(mut modifiers: Vec<Modifier>) -> Vec<Modifier> {
    modifiers.sort();
    modifiers.dedup();
    modifiers
}

/// Visibility of a member as reported by a metadata source.
///
/// Only [`Visibility::Public`] members make it into a [`TypeShape`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

/// One method overload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodSignature {
    /// Method name, shared by every overload.
    pub name: String,
    /// Modifier set; sorted and de-duplicated once sealed.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Parameter type names in declaration order.
    #[serde(default)]
    pub parameters: Vec<String>,
    /// Return type name, `void` for none.
    pub return_type: String,
}

impl MethodSignature {
    /// Creates a method without modifiers or parameters.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            parameters: Vec::new(),
            return_type: return_type.into(),
        }
    }

    /// Appends a parameter type.
    pub fn with_parameter(mut self, type_name: impl Into<String>) -> Self {
        self.parameters.push(type_name.into());
        self
    }

    /// Adds a modifier.
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Whether the modifier set contains `modifier`.
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

/// A public field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Declared type name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Modifier set, limited to `STATIC` and `FINAL` when loaded from a catalog.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl FieldDescriptor {
    /// Creates a field without modifiers.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            modifiers: Vec::new(),
        }
    }

    /// Adds a modifier.
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }
}

/// A public constructor, identified only by its parameter types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorSignature {
    /// Parameter type names in declaration order.
    #[serde(default)]
    pub parameters: Vec<String>,
}

impl ConstructorSignature {
    pub fn new<I, S>(parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }
}

/// Public surface of one type exactly as a resolver reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeShape {
    /// Fully-qualified name.
    pub name: String,
    /// Concrete, interface or abstract.
    pub kind: TypeKind,
    /// Every public method in resolver order. Overloads share a name.
    pub methods: Vec<MethodSignature>,
    /// Public fields. May contain the same name more than once.
    pub fields: Vec<FieldDescriptor>,
    /// Public constructors.
    pub constructors: Vec<ConstructorSignature>,
}

impl TypeShape {
    /// Creates an empty shape.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            methods: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
        }
    }

    pub fn method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn constructor(mut self, constructor: ConstructorSignature) -> Self {
        self.constructors.push(constructor);
        self
    }
}

/// Immutable description of one type inside a closure.
///
/// The referenced names are derived once, when the description is sealed
/// from its shape, and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescription {
    identity: String,
    display_name: String,
    kind: TypeKind,
    members: IndexMap<String, Vec<MethodSignature>>,
    fields: Vec<FieldDescriptor>,
    constructors: Vec<ConstructorSignature>,
    referenced_names: Vec<String>,
}

impl TypeDescription {
    /// Seals a shape into a description, deriving its referenced names
    /// under `policy`.
    pub fn from_shape(shape: TypeShape, policy: PrimitivePolicy) -> Self {
        let TypeShape {
            name,
            kind,
            methods,
            fields,
            constructors,
        } = shape;

        let mut members: IndexMap<String, Vec<MethodSignature>> = IndexMap::new();
        for mut method in methods {
            method.modifiers = modifier_set(method.modifiers);
            members.entry(method.name.clone()).or_default().push(method);
        }

        // Last duplicate wins but keeps the slot of the first occurrence.
        let mut by_name: IndexMap<String, FieldDescriptor> = IndexMap::new();
        for mut field in fields {
            field.modifiers = modifier_set(field.modifiers);
            by_name.insert(field.name.clone(), field);
        }

        let mut description = Self {
            display_name: display_name(&name).to_string(),
            identity: name,
            kind,
            members,
            fields: by_name.into_values().collect(),
            constructors,
            referenced_names: Vec::new(),
        };

        description.referenced_names = normalize::referenced_names(
            &description.identity,
            description.signature_types(),
            policy,
        );
        description
    }

    /// Fully-qualified name, unique within a closure.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Simple name: the identity after its last `.`.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn members(&self) -> &IndexMap<String, Vec<MethodSignature>> {
        &self.members
    }

    /// Overloads registered under `name`, empty when there are none.
    pub fn overloads(&self, name: &str) -> &[MethodSignature] {
        self.members.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn constructors(&self) -> &[ConstructorSignature] {
        &self.constructors
    }

    /// Names this type depends on, without itself or duplicates.
    pub fn referenced_names(&self) -> &[String] {
        &self.referenced_names
    }

    /// Every raw type name mentioned by the signatures, in scan order:
    /// each overload's parameters then its return type, then field types,
    /// then constructor parameters.
    pub fn signature_types(&self) -> impl Iterator<Item = &str> {
        let methods = self.members.values().flatten().flat_map(|method| {
            method
                .parameters
                .iter()
                .chain(std::iter::once(&method.return_type))
        });
        let fields = self.fields.iter().map(|field| &field.type_name);
        let constructors = self
            .constructors
            .iter()
            .flat_map(|constructor| constructor.parameters.iter());

        methods.chain(fields).chain(constructors).map(String::as_str)
    }
}

/// Local name of a fully-qualified identity.
pub fn display_name(identity: &str) -> &str {
    identity
        .rsplit_once('.')
        .map(|(_, local)| local)
        .unwrap_or(identity)
}
