//! Literal serializer.
//!
//! Turns a [`Literal`] tree into PHP literal source text. Lists render on a
//! single line when every element is a scalar, maps render one pair per
//! line, and both collapse onto one line when inline rendering is forced.
//!
//! # Example
//!
//! ```
//! use classforge_codegen::literal::to_source;
//! use classforge_ir::Literal;
//!
//! let flat = Literal::list(["a", "b"]);
//! assert_eq!(to_source(&flat, 0, false).unwrap(), "['a', 'b']");
//!
//! let nested = Literal::list([Literal::list(["a"])]);
//! assert_eq!(to_source(&nested, 0, false).unwrap(), "[\n    ['a']\n]");
//! ```

mod capture;

use classforge_ir::Literal;
use indexmap::IndexMap;
use serde::Serialize;

pub use capture::capture;

use crate::{Error, Result};

/// Formatting options for literal rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Column of the line the literal starts on.
    pub indent: usize,
    /// Extra columns per nesting level.
    pub step: usize,
    /// Force single-line output for every container.
    pub inline: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 0,
            step: 4,
            inline: false,
        }
    }
}

impl RenderOptions {
    /// Set the base indentation in columns.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the columns added per nesting level.
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Get the current indentation string.
    pub fn indent_str(&self) -> String {
        " ".repeat(self.indent)
    }

    /// Get options for a nested level.
    pub fn nested(&self) -> Self {
        Self {
            indent: self.indent + self.step,
            ..*self
        }
    }
}

/// Render a literal starting at column `indent`.
///
/// `inline` forces every container onto a single line.
pub fn to_source(value: &Literal, indent: usize, inline: bool) -> Result<String> {
    let opts = RenderOptions {
        indent,
        inline,
        ..Default::default()
    };
    render(value, &opts)
}

/// Capture any serializable value and render it as a literal.
pub fn to_source_of<T>(value: &T, indent: usize, inline: bool) -> Result<String>
where
    T: Serialize + ?Sized,
{
    to_source(&capture(value)?, indent, inline)
}

/// Render a literal with explicit options.
pub fn render(value: &Literal, opts: &RenderOptions) -> Result<String> {
    let mut out = String::new();
    write_literal(&mut out, value, opts)?;
    Ok(out)
}

fn write_literal(out: &mut String, value: &Literal, opts: &RenderOptions) -> Result<()> {
    match value {
        Literal::Null => out.push_str("null"),
        Literal::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
        Literal::Int(v) => out.push_str(&v.to_string()),
        Literal::Float(v) => out.push_str(&format_float(*v)?),
        Literal::String(v) => write_quoted(out, v),
        Literal::List(items) if items.is_empty() => out.push_str("[]"),
        Literal::Map(entries) if entries.is_empty() => out.push_str("[]"),
        Literal::List(items) => write_list(out, items, opts)?,
        Literal::Map(entries) => write_map(out, entries, opts)?,
    }
    Ok(())
}

/// Shortest round-trip form that keeps the value a float.
fn format_float(v: f64) -> Result<String> {
    if !v.is_finite() {
        return Err(Error::invalid_kind(format!("non-finite float {v}")));
    }
    Ok(format!("{v:?}"))
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('\'');
    out.push_str(s);
    out.push('\'');
}

fn write_list(out: &mut String, items: &[Literal], opts: &RenderOptions) -> Result<()> {
    let nested = opts.nested();
    let inline = opts.inline || items.iter().all(|item| !item.is_container());

    out.push('[');
    if inline {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_literal(out, item, &nested)?;
        }
    } else {
        let pad = nested.indent_str();
        for (i, item) in items.iter().enumerate() {
            out.push_str(if i > 0 { ",\n" } else { "\n" });
            out.push_str(&pad);
            write_literal(out, item, &nested)?;
        }
        out.push('\n');
        out.push_str(&opts.indent_str());
    }
    out.push(']');
    Ok(())
}

fn write_map(
    out: &mut String,
    entries: &IndexMap<String, Literal>,
    opts: &RenderOptions,
) -> Result<()> {
    let nested = opts.nested();

    out.push('[');
    if opts.inline {
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_quoted(out, key);
            out.push_str(" => ");
            write_literal(out, value, &nested)?;
        }
    } else {
        let pad = nested.indent_str();
        for (i, (key, value)) in entries.iter().enumerate() {
            out.push_str(if i > 0 { ",\n" } else { "\n" });
            out.push_str(&pad);
            write_quoted(out, key);
            out.push_str(" => ");
            write_literal(out, value, &nested)?;
        }
        out.push('\n');
        out.push_str(&opts.indent_str());
    }
    out.push(']');
    Ok(())
}
