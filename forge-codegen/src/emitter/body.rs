//! Re-indentation of raw method bodies.

/// Normalize a raw method body into unindented lines.
///
/// The smallest leading-whitespace width over all non-blank lines is
/// stripped from every line. Blank lines become empty, and leading or
/// trailing blank lines are dropped. The caller re-applies the body indent.
pub(crate) fn dedent(content: &str) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();

    let width = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| leading_width(line))
        .min()
        .unwrap_or(0);

    let stripped: Vec<String> = lines
        .iter()
        .map(|line| {
            if is_blank(line) {
                String::new()
            } else {
                line.chars().skip(width).collect()
            }
        })
        .collect();

    let start = stripped.iter().position(|l| !l.is_empty());
    let end = stripped.iter().rposition(|l| !l.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => stripped[start..=end].to_vec(),
        _ => Vec::new(),
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn leading_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
