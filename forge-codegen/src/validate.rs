//! Structural checks run before any text is emitted.

use std::collections::HashMap;

use classforge_ir::ClassSpec;

use crate::{Error, Result};

/// A structural rule over a class spec.
pub trait Rule: Send + Sync {
    /// The name of this rule.
    fn name(&self) -> &'static str;

    /// Check the spec and record one message per violation.
    fn check(&self, spec: &ClassSpec, problems: &mut Vec<String>);
}

/// Rejects an empty class name.
pub struct ClassNameRule;

impl Rule for ClassNameRule {
    fn name(&self) -> &'static str {
        "class-name"
    }

    fn check(&self, spec: &ClassSpec, problems: &mut Vec<String>) {
        if spec.name.trim().is_empty() {
            problems.push("class name is empty".to_string());
        }
    }
}

/// Rejects a namespace that is present but empty.
pub struct NamespaceRule;

impl Rule for NamespaceRule {
    fn name(&self) -> &'static str {
        "namespace"
    }

    fn check(&self, spec: &ClassSpec, problems: &mut Vec<String>) {
        if spec
            .namespace
            .as_deref()
            .is_some_and(|ns| ns.trim().is_empty())
        {
            problems.push("namespace is present but empty".to_string());
        }
    }
}

/// Rejects properties, methods and arguments without a name.
pub struct MemberNameRule;

impl Rule for MemberNameRule {
    fn name(&self) -> &'static str {
        "member-name"
    }

    fn check(&self, spec: &ClassSpec, problems: &mut Vec<String>) {
        for (index, property) in spec.properties.iter().enumerate() {
            if property.name.trim().is_empty() {
                problems.push(format!("property #{} has no name", index + 1));
            }
        }

        for (index, method) in spec.methods.iter().enumerate() {
            if method.name.trim().is_empty() {
                problems.push(format!("method #{} has no name", index + 1));
            }
            for (arg_index, arg) in method.arguments.iter().enumerate() {
                if arg.name.trim().is_empty() {
                    problems.push(format!(
                        "argument #{} in method '{}' has no name",
                        arg_index + 1,
                        method.name
                    ));
                }
            }
        }
    }
}

/// Rejects `extends` / `implements` lists that are present but empty.
pub struct InheritanceRule;

impl Rule for InheritanceRule {
    fn name(&self) -> &'static str {
        "inheritance"
    }

    fn check(&self, spec: &ClassSpec, problems: &mut Vec<String>) {
        for (clause, names) in [("extends", &spec.extends), ("implements", &spec.implements)] {
            if names.as_ref().is_some_and(Vec::is_empty) {
                problems.push(format!("'{clause}' is present but empty"));
            }
        }
    }
}

/// Rejects member names that collide within the same scope.
///
/// Method names are compared case-insensitively, property and argument
/// names exactly.
pub struct DuplicateMemberRule;

impl Rule for DuplicateMemberRule {
    fn name(&self) -> &'static str {
        "duplicate-member"
    }

    fn check(&self, spec: &ClassSpec, problems: &mut Vec<String>) {
        find_duplicates(
            spec.properties.iter().map(|p| p.name.clone()),
            |name| format!("duplicate property '${name}'"),
            problems,
        );

        find_duplicates(
            spec.methods.iter().map(|m| m.name.to_lowercase()),
            |name| format!("duplicate method '{name}'"),
            problems,
        );

        for method in &spec.methods {
            find_duplicates(
                method.arguments.iter().map(|a| a.name.clone()),
                |name| format!("duplicate argument '${name}' in method '{}'", method.name),
                problems,
            );
        }
    }
}

fn find_duplicates(
    names: impl Iterator<Item = String>,
    message: impl Fn(&str) -> String,
    problems: &mut Vec<String>,
) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for name in names {
        let count = seen.entry(name.clone()).or_insert(0);
        *count += 1;
        if *count == 2 {
            problems.push(message(&name));
        }
    }
}

/// The rules applied by [`validate`].
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ClassNameRule),
        Box::new(NamespaceRule),
        Box::new(InheritanceRule),
        Box::new(MemberNameRule),
        Box::new(DuplicateMemberRule),
    ]
}

/// Run every default rule and fail with all violations at once.
pub fn validate(spec: &ClassSpec) -> Result<()> {
    let mut problems = Vec::new();
    for rule in default_rules() {
        rule.check(spec, &mut problems);
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(Error::malformed(problems.join("; ")))
    }
}
