//! Class signature line with inheritance clauses.

use classforge_ir::{ClassKind, ClassSpec};

use crate::builder::{CodeFragment, Renderable};

/// `<kind> <name>` followed by `extends` / `implements` clauses.
///
/// A clause with a single name stays on the current line. A clause with
/// several names starts a new line one indent level deeper, with all names
/// comma-joined on that line.
pub(crate) struct Signature<'a> {
    kind: ClassKind,
    name: &'a str,
    clauses: Vec<(&'static str, Vec<&'a str>)>,
}

impl<'a> Signature<'a> {
    /// Build the signature for `spec`.
    ///
    /// With `resolve_aliases`, inheritance names that were imported under an
    /// alias are rendered as that alias.
    pub(crate) fn new(spec: &'a ClassSpec, resolve_aliases: bool) -> Self {
        let resolve = |names: &'a [String]| -> Vec<&'a str> {
            names
                .iter()
                .map(|name| {
                    resolve_aliases
                        .then(|| spec.alias_of(name))
                        .flatten()
                        .unwrap_or(name)
                })
                .collect()
        };

        let mut clauses = Vec::new();
        if let Some(extends) = &spec.extends {
            clauses.push(("extends", resolve(extends)));
        }
        if let Some(implements) = &spec.implements {
            clauses.push(("implements", resolve(implements)));
        }
        Self {
            kind: spec.kind,
            name: &spec.name,
            clauses,
        }
    }
}

impl Renderable for Signature<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut head = format!("{} {}", self.kind, self.name);
        let mut continued: Vec<String> = Vec::new();

        for (keyword, names) in &self.clauses {
            let clause = format!("{keyword} {}", names.join(", "));
            if names.len() > 1 {
                continued.push(clause);
            } else {
                let current = continued.last_mut().unwrap_or(&mut head);
                current.push(' ');
                current.push_str(&clause);
            }
        }

        let mut fragments = vec![CodeFragment::line(head)];
        if !continued.is_empty() {
            fragments.push(CodeFragment::indent(
                continued.into_iter().map(CodeFragment::Line).collect(),
            ));
        }
        fragments
    }
}
