//! Property and method rendering.

use classforge_ir::{ArgumentSpec, Modifiers, MethodSpec, PropertySpec};

use super::body::dedent;
use crate::{
    Result,
    builder::CodeFragment,
    literal::{self, RenderOptions},
};

/// Column at which class members start.
const MEMBER_INDENT: usize = 4;

/// Space-joined modifiers followed by a separating space, or nothing.
fn prefix(modifiers: Modifiers<'_>) -> String {
    let tokens = modifiers.tokens();
    if tokens.is_empty() {
        String::new()
    } else {
        format!("{} ", tokens.join(" "))
    }
}

/// Render a property declaration, e.g. `public static $cache = [];`.
///
/// Defaults are rendered relative to the member indent, so multi-line
/// containers close at the property's own column.
pub(crate) fn property_line(property: &PropertySpec) -> Result<String> {
    let mut line = prefix(property.modifiers());
    line.push('$');
    line.push_str(&property.name);

    if let Some(default) = &property.default {
        let opts = RenderOptions::default().with_indent(MEMBER_INDENT);
        line.push_str(" = ");
        line.push_str(&literal::render(default, &opts)?);
    }

    line.push(';');
    Ok(line)
}

/// Render a single argument. Defaults never span multiple lines.
fn argument(arg: &ArgumentSpec) -> Result<String> {
    let mut out = prefix(arg.modifiers());
    out.push('$');
    out.push_str(&arg.name);

    if let Some(default) = &arg.default {
        out.push_str(" = ");
        out.push_str(&literal::to_source(default, 0, true)?);
    }
    Ok(out)
}

/// Render `modifiers function name(args): return`.
pub(crate) fn method_signature(method: &MethodSpec) -> Result<String> {
    let args = method
        .arguments
        .iter()
        .map(argument)
        .collect::<Result<Vec<_>>>()?;

    let mut sig = prefix(method.modifiers());
    sig.push_str("function ");
    sig.push_str(&method.name);
    sig.push('(');
    sig.push_str(&args.join(", "));
    sig.push(')');

    if let Some(returns) = &method.returns {
        sig.push_str(": ");
        sig.push_str(returns);
    }
    Ok(sig)
}

/// Render a full method: doc block, signature and, unless `declaration_only`,
/// a braced body with the re-indented content.
pub(crate) fn method_fragments(
    method: &MethodSpec,
    declaration_only: bool,
) -> Result<Vec<CodeFragment>> {
    let mut fragments = Vec::new();

    if let Some(comment) = &method.comment {
        fragments.push(CodeFragment::doc_block(comment.iter().cloned()));
    }

    let signature = method_signature(method)?;
    if declaration_only {
        fragments.push(CodeFragment::line(format!("{signature};")));
        return Ok(fragments);
    }

    let body = method
        .content
        .as_deref()
        .map(dedent)
        .unwrap_or_default()
        .into_iter()
        .map(CodeFragment::Line)
        .collect();

    fragments.push(CodeFragment::line(signature));
    fragments.push(CodeFragment::block("{", body, Some("}".to_string())));
    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use classforge_ir::Literal;

    use super::*;
    use crate::{Error, builder::CodeBuilder};

    fn render_method(method: &MethodSpec, declaration_only: bool) -> String {
        let mut builder = CodeBuilder::php();
        builder.push_indent();
        for fragment in method_fragments(method, declaration_only).unwrap() {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_property_minimal() {
        assert_eq!(property_line(&PropertySpec::new("id")).unwrap(), "$id;");
    }

    #[test]
    fn test_property_with_modifiers_and_default() {
        let prop = PropertySpec::new("bar").visibility("public").default(1);
        assert_eq!(property_line(&prop).unwrap(), "public $bar = 1;");

        let prop = PropertySpec::new("cache")
            .visibility("protected")
            .static_()
            .ty("?array")
            .default(Literal::Null);
        assert_eq!(
            property_line(&prop).unwrap(),
            "protected static ?array $cache = null;"
        );
    }

    #[test]
    fn test_property_multiline_default() {
        let prop = PropertySpec::new("casts")
            .visibility("protected")
            .default(Literal::map([("id", "int"), ("active", "bool")]));
        assert_eq!(
            property_line(&prop).unwrap(),
            "protected $casts = [\n        'id' => 'int',\n        'active' => 'bool'\n    ];"
        );
    }

    #[test]
    fn test_property_invalid_default() {
        let prop = PropertySpec::new("ratio").default(f64::NAN);
        assert!(matches!(
            property_line(&prop),
            Err(Error::InvalidLiteralKind { .. })
        ));
    }

    #[test]
    fn test_argument_defaults_are_inline() {
        let method = MethodSpec::new("configure").argument(
            ArgumentSpec::new("options")
                .ty("array")
                .default(Literal::map([("a", Literal::list([Literal::list([1])]))])),
        );
        assert_eq!(
            method_signature(&method).unwrap(),
            "function configure(array $options = ['a' => [[1]]])"
        );
    }

    #[test]
    fn test_signature_with_promotion_and_return() {
        let method = MethodSpec::new("__construct")
            .public()
            .argument(ArgumentSpec::new("name").visibility("private").ty("string"))
            .argument(ArgumentSpec::new("age").ty("int").default(0));
        assert_eq!(
            method_signature(&method).unwrap(),
            "public function __construct(private string $name, int $age = 0)"
        );

        let method = MethodSpec::new("make")
            .public()
            .static_()
            .modifier("final")
            .returns("static");
        assert_eq!(
            method_signature(&method).unwrap(),
            "public static final function make(): static"
        );
    }

    #[test]
    fn test_method_with_body() {
        let method = MethodSpec::new("total")
            .public()
            .returns("int")
            .comment("Sum of all items")
            .content("\n            $sum = 0;\n\n            return $sum;\n        ");
        assert_eq!(
            render_method(&method, false),
            "    /**\n     * Sum of all items\n     */\n    public function total(): int\n    {\n        $sum = 0;\n\n        return $sum;\n    }\n"
        );
    }

    #[test]
    fn test_method_without_content_has_empty_body() {
        let method = MethodSpec::new("boot");
        assert_eq!(render_method(&method, false), "    function boot()\n    {\n    }\n");
    }

    #[test]
    fn test_declaration_only_ignores_content() {
        let method = MethodSpec::new("find")
            .public()
            .argument(ArgumentSpec::new("id").ty("int"))
            .content("return null;");
        assert_eq!(
            render_method(&method, true),
            "    public function find(int $id);\n"
        );
    }
}
