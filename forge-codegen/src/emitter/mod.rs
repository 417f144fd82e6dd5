//! Class emitter.
//!
//! Renders a [`ClassSpec`] into the text of one PHP source file. Sections
//! are emitted in a fixed order, each only when the spec provides it:
//!
//! 1. `<?php` banner
//! 2. file-level doc block
//! 3. namespace declaration
//! 4. `use` imports
//! 5. class-level doc block and signature with inheritance clauses
//! 6. properties, then methods, each followed by a blank line
//!
//! The spec is validated first and every embedded literal is rendered before
//! the text is returned, so a failing call never yields partial output.
//!
//! # Example
//!
//! ```
//! use classforge_codegen::emitter::build;
//! use classforge_ir::{ClassSpec, PropertySpec};
//!
//! let spec = ClassSpec::class("Foo")
//!     .property(PropertySpec::new("bar").visibility("public").default(1));
//!
//! assert_eq!(
//!     build(&spec).unwrap(),
//!     "<?php\n\nclass Foo\n{\n    public $bar = 1;\n}"
//! );
//! ```

mod body;
mod members;
mod signature;

use classforge_ir::ClassSpec;
use tracing::{debug, trace};

use self::{
    members::{method_fragments, property_line},
    signature::Signature,
};
use crate::{
    Result,
    builder::{CodeBuilder, Indent},
    validate,
};

/// First line of every emitted file.
pub const BANNER: &str = "<?php";

/// Options controlling class emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitOptions {
    /// Render `extends` / `implements` names through their `uses` alias.
    pub resolve_aliases: bool,
}

impl EmitOptions {
    /// Enable alias substitution in inheritance clauses.
    pub fn resolve_aliases(mut self, enabled: bool) -> Self {
        self.resolve_aliases = enabled;
        self
    }
}

/// Stateless class emitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassEmitter {
    options: EmitOptions,
}

impl ClassEmitter {
    /// Create an emitter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an emitter with the given options.
    pub fn with_options(options: EmitOptions) -> Self {
        Self { options }
    }

    /// Get the emitter options.
    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Render `spec` into the text of a PHP source file.
    pub fn build(&self, spec: &ClassSpec) -> Result<String> {
        validate::validate(spec)?;

        debug!(
            kind = %spec.kind,
            name = %spec.name,
            properties = spec.properties.len(),
            methods = spec.methods.len(),
            "emitting class"
        );

        let mut code = CodeBuilder::new(Indent::PHP);
        code.push_line(BANNER);

        if let Some(comments) = &spec.comments {
            code.push_blank().push_doc_block(comments);
        }

        if let Some(namespace) = &spec.namespace {
            code.push_blank()
                .push_line(&format!("namespace {namespace};"));
        }

        if !spec.uses.is_empty() {
            code.push_blank();
            for name in spec.uses.keys() {
                match spec.alias_of(name) {
                    Some(alias) => code.push_line(&format!("use {name} as {alias};")),
                    None => code.push_line(&format!("use {name};")),
                };
            }
        }

        code.push_blank();
        if let Some(comments) = &spec.class_comments {
            code.push_doc_block(comments);
        }

        code.emit(&Signature::new(spec, self.options.resolve_aliases));
        code.push_line("{");
        code.push_indent();

        for property in &spec.properties {
            trace!(property = %property.name, "emitting property");
            code.push_line(&property_line(property)?).push_blank();
        }

        let declaration_only = spec.kind.is_interface();
        for method in &spec.methods {
            trace!(method = %method.name, "emitting method");
            if declaration_only && method.content.is_some() {
                trace!(method = %method.name, "ignoring body of interface method");
            }
            for fragment in method_fragments(method, declaration_only)? {
                code.apply_fragment(fragment);
            }
            code.push_blank();
        }

        code.push_dedent();
        code.trim_trailing_newlines().push_raw("\n}");

        Ok(code.build())
    }
}

/// Render `spec` with default options.
pub fn build(spec: &ClassSpec) -> Result<String> {
    ClassEmitter::new().build(spec)
}
