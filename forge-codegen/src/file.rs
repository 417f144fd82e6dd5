//! Bridge between emitted classes and the file writer.

use std::path::{Path, PathBuf};

use classforge_core::{FileRules, GeneratedFile};
use classforge_ir::ClassSpec;

use crate::{Result, emitter::ClassEmitter};

/// A rendered class, ready to be written below a source root.
///
/// The text is produced once by [`ClassFile::new`], so a spec that fails to
/// render never reaches the file system.
#[derive(Debug, Clone)]
pub struct ClassFile {
    relative: PathBuf,
    content: String,
    rules: FileRules,
}

impl ClassFile {
    /// Render `spec` with the given emitter.
    pub fn new(emitter: &ClassEmitter, spec: &ClassSpec) -> Result<Self> {
        Ok(Self {
            relative: relative_path(spec),
            content: emitter.build(spec)?,
            rules: FileRules::default(),
        })
    }

    /// Replace the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Path relative to the source root.
    pub fn relative_path(&self) -> &Path {
        &self.relative
    }

    /// Rendered file text.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// `Vendor\Package\Name` becomes `Vendor/Package/Name.php`.
fn relative_path(spec: &ClassSpec) -> PathBuf {
    let mut path = PathBuf::new();
    if let Some(namespace) = &spec.namespace {
        for segment in namespace.split('\\').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
    }
    path.push(format!("{}.php", spec.name));
    path
}

impl GeneratedFile for ClassFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.relative)
    }

    fn rules(&self) -> FileRules {
        self.rules
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
