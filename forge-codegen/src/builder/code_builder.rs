//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Line buffer that tracks the current indentation level.
///
/// Empty lines are written without indentation, so blank lines inside an
/// indented block never carry trailing whitespace.
///
/// # Example
///
/// ```
/// use classforge_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::php();
/// builder
///     .push_line("function main()")
///     .push_line("{")
///     .push_indent()
///     .push_line("echo 'hi';")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "function main()\n{\n    echo 'hi';\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn php() -> Self {
        Self::new(Indent::PHP)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `/** ... */` documentation block at the current indentation.
    pub fn push_doc_block<S: AsRef<str>>(&mut self, lines: &[S]) -> &mut Self {
        self.push_line("/**");
        for line in lines {
            let line = line.as_ref();
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {line}"));
            }
        }
        self.push_line(" */")
    }

    /// Remove every trailing newline from the buffer.
    pub fn trim_trailing_newlines(&mut self) -> &mut Self {
        let len = self.buffer.trim_end_matches('\n').len();
        self.buffer.truncate(len);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::DocBlock(lines) => {
                self.push_doc_block(&lines);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::php()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lines() {
        let mut builder = CodeBuilder::php();
        builder
            .push_line("$x = 1;")
            .push_blank()
            .push_line("$y = 2;");
        assert_eq!(builder.build(), "$x = 1;\n\n$y = 2;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::php();
        builder
            .push_line("{")
            .push_indent()
            .push_line("return 1;")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "{\n    return 1;\n}\n");
    }

    #[test]
    fn test_empty_line_has_no_indent() {
        let mut builder = CodeBuilder::php();
        builder
            .push_indent()
            .push_indent()
            .push_line("a();")
            .push_line("")
            .push_line("b();");
        assert_eq!(builder.build(), "        a();\n\n        b();\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::php();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_doc_block() {
        let mut builder = CodeBuilder::php();
        builder
            .push_indent()
            .push_doc_block(&["Summary", "", "@return int"]);
        assert_eq!(
            builder.build(),
            "    /**\n     * Summary\n     *\n     * @return int\n     */\n"
        );
    }

    #[test]
    fn test_trim_trailing_newlines() {
        let mut builder = CodeBuilder::php();
        builder.push_line("{").push_blank().push_blank();
        builder.trim_trailing_newlines().push_raw("\n}");
        assert_eq!(builder.build(), "{\n}");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BodyNode;
        impl Renderable for BodyNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "{".to_string(),
                    body: vec![CodeFragment::Line("return $this->id;".to_string())],
                    close: Some("}".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::php();
        builder.push_indent().emit(&BodyNode);
        assert_eq!(
            builder.build(),
            "    {\n        return $this->id;\n    }\n"
        );
    }

    #[test]
    fn test_emit_doc_fragment() {
        let mut builder = CodeBuilder::php();
        builder
            .emit(&CodeFragment::doc_block(["A class"]))
            .push_line("class Foo");
        assert_eq!(builder.build(), "/**\n * A class\n */\nclass Foo\n");
    }
}
