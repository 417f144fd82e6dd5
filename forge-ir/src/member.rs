//! Property, method and argument specifications.

use serde::{Deserialize, Serialize};

use crate::{
    literal::Literal,
    serde_helpers::{Named, deserialize_named, deserialize_present},
};

/// Modifier tokens shared by properties, methods and arguments.
///
/// Tokens are yielded in the fixed order visibility, `static`, type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers<'a> {
    pub visibility: Option<&'a str>,
    pub is_static: bool,
    pub token: Option<&'a str>,
}

impl<'a> Modifiers<'a> {
    /// Collect the non-empty modifier tokens in emission order.
    pub fn tokens(&self) -> Vec<&'a str> {
        let mut tokens = Vec::with_capacity(3);
        if let Some(vis) = self.visibility.filter(|v| !v.is_empty()) {
            tokens.push(vis);
        }
        if self.is_static {
            tokens.push("static");
        }
        if let Some(token) = self.token.filter(|t| !t.is_empty()) {
            tokens.push(token);
        }
        tokens
    }
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// A class property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertySpec {
    /// Property name, without the `$` sigil.
    #[serde(default)]
    pub name: String,
    /// Visibility keyword (e.g. `public`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// Whether the property is static.
    #[serde(rename = "static", default, skip_serializing_if = "is_false")]
    pub is_static: bool,
    /// Type token (e.g. `?int`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Default value.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Literal>,
}

impl PropertySpec {
    /// Create a property with no modifiers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: impl Into<String>) -> Self {
        self.visibility = Some(vis.into());
        self
    }

    /// Mark as static.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Set the type token.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Set the default value.
    pub fn default(mut self, value: impl Into<Literal>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Visibility, `static` and type, in declaration order.
    pub fn modifiers(&self) -> Modifiers<'_> {
        Modifiers {
            visibility: self.visibility.as_deref(),
            is_static: self.is_static,
            token: self.ty.as_deref(),
        }
    }
}

impl Named for PropertySpec {
    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// A method argument.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArgumentSpec {
    /// Argument name, without the `$` sigil.
    #[serde(default)]
    pub name: String,
    /// Constructor promotion visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// Type token.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Default value, always rendered on a single line.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Literal>,
}

impl ArgumentSpec {
    /// Create an untyped argument.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the promotion visibility.
    pub fn visibility(mut self, vis: impl Into<String>) -> Self {
        self.visibility = Some(vis.into());
        self
    }

    /// Set the type token.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Set the default value.
    pub fn default(mut self, value: impl Into<Literal>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Promotion visibility and type. Arguments are never static.
    pub fn modifiers(&self) -> Modifiers<'_> {
        Modifiers {
            visibility: self.visibility.as_deref(),
            is_static: false,
            token: self.ty.as_deref(),
        }
    }
}

impl Named for ArgumentSpec {
    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// A method declaration, with an optional raw body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MethodSpec {
    /// Method name.
    #[serde(default)]
    pub name: String,
    /// Visibility keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// Whether the method is static.
    #[serde(rename = "static", default, skip_serializing_if = "is_false")]
    pub is_static: bool,
    /// Extra modifier such as `abstract` or `final`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
    /// Arguments in declaration order.
    #[serde(
        default,
        deserialize_with = "deserialize_named",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub arguments: Vec<ArgumentSpec>,
    /// Return type.
    #[serde(rename = "return", default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    /// Documentation lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Vec<String>>,
    /// Raw body text. Ignored for interfaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl MethodSpec {
    /// Create a method with no modifiers and no body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: impl Into<String>) -> Self {
        self.visibility = Some(vis.into());
        self
    }

    /// Make this method public.
    pub fn public(self) -> Self {
        self.visibility("public")
    }

    /// Mark as static.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Set the extra modifier (e.g. `abstract`).
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    /// Add an argument.
    pub fn argument(mut self, arg: ArgumentSpec) -> Self {
        self.arguments.push(arg);
        self
    }

    /// Add multiple arguments.
    pub fn arguments(mut self, args: impl IntoIterator<Item = ArgumentSpec>) -> Self {
        self.arguments.extend(args);
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    /// Add a documentation line.
    pub fn comment(mut self, line: impl Into<String>) -> Self {
        self.comment.get_or_insert_with(Vec::new).push(line.into());
        self
    }

    /// Set the raw body text.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Visibility, `static` and the extra modifier such as `final`.
    pub fn modifiers(&self) -> Modifiers<'_> {
        Modifiers {
            visibility: self.visibility.as_deref(),
            is_static: self.is_static,
            token: self.modifier.as_deref(),
        }
    }
}

impl Named for MethodSpec {
    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
