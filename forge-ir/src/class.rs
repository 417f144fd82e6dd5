//! Top-level class specification.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    member::{MethodSpec, PropertySpec},
    serde_helpers::deserialize_named,
};

/// Kind of construct being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Trait,
}

impl ClassKind {
    /// Get the keyword used in the signature line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Trait => "trait",
        }
    }

    /// Interfaces only declare method signatures.
    pub fn is_interface(&self) -> bool {
        matches!(self, ClassKind::Interface)
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declarative description of one generated class, interface or trait.
///
/// # Example
///
/// ```
/// use classforge_ir::{ClassSpec, PropertySpec};
///
/// let spec = ClassSpec::class("User")
///     .namespace("App\\Models")
///     .extends("Model")
///     .property(PropertySpec::new("table").visibility("protected").default("users"));
///
/// assert_eq!(spec.properties.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassSpec {
    /// Construct kind (`type` in serialized form).
    #[serde(rename = "type", default)]
    pub kind: ClassKind,
    /// Class name.
    pub name: String,
    /// Namespace declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// File-level documentation lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
    /// Documentation lines rendered directly above the signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_comments: Option<Vec<String>>,
    /// Imported names mapped to an optional local alias.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub uses: IndexMap<String, Option<String>>,
    /// Parent names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<Vec<String>>,
    /// Implemented interface names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implements: Option<Vec<String>>,
    /// Properties in declaration order.
    #[serde(
        default,
        deserialize_with = "deserialize_named",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub properties: Vec<PropertySpec>,
    /// Methods in declaration order.
    #[serde(
        default,
        deserialize_with = "deserialize_named",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub methods: Vec<MethodSpec>,
}

impl ClassSpec {
    /// Create a spec of the given kind.
    pub fn new(kind: ClassKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a class spec.
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(ClassKind::Class, name)
    }

    /// Create an interface spec.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(ClassKind::Interface, name)
    }

    /// Create a trait spec.
    pub fn trait_(name: impl Into<String>) -> Self {
        Self::new(ClassKind::Trait, name)
    }

    /// Set the namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add a file-level comment line.
    pub fn comment(mut self, line: impl Into<String>) -> Self {
        self.comments.get_or_insert_with(Vec::new).push(line.into());
        self
    }

    /// Add a class-level comment line.
    pub fn class_comment(mut self, line: impl Into<String>) -> Self {
        self.class_comments
            .get_or_insert_with(Vec::new)
            .push(line.into());
        self
    }

    /// Import a name without alias.
    pub fn uses(mut self, name: impl Into<String>) -> Self {
        self.uses.insert(name.into(), None);
        self
    }

    /// Import a name under a local alias.
    pub fn uses_as(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.uses.insert(name.into(), Some(alias.into()));
        self
    }

    /// Add a parent name.
    pub fn extends(mut self, name: impl Into<String>) -> Self {
        self.extends.get_or_insert_with(Vec::new).push(name.into());
        self
    }

    /// Add an implemented interface name.
    pub fn implements(mut self, name: impl Into<String>) -> Self {
        self.implements
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }

    /// Add a property.
    pub fn property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    /// Add multiple properties.
    pub fn properties(mut self, properties: impl IntoIterator<Item = PropertySpec>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Add a method.
    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// Add multiple methods.
    pub fn methods(mut self, methods: impl IntoIterator<Item = MethodSpec>) -> Self {
        self.methods.extend(methods);
        self
    }

    /// Look up the alias registered for an imported name.
    ///
    /// Empty aliases count as absent.
    pub fn alias_of(&self, name: &str) -> Option<&str> {
        self.uses
            .get(name)
            .and_then(|alias| alias.as_deref())
            .filter(|alias| !alias.is_empty())
    }
}
