use crate::parser::ParseNode;
use crate::runtime::Value;

/// Converts a generic parse tree into a value tree.
///
/// Numeric leaves become numbers — parsed here, not in the lexer, so a
/// literal that overflows `i64` becomes an `Invalid Number` error value
/// instead of a parse failure. Symbol leaves become symbols. Everything else
/// is a container: Q-expression-tagged nodes read as Q-expressions, the rest
/// (S-expressions and the root wrapper) as S-expressions, with bracket
/// punctuation and regex-anchor nodes skipped rather than read.
pub fn read(node: &ParseNode) -> Value {
    if node.tag.contains("number") {
        return read_number(node);
    }
    if node.tag.contains("symbol") {
        return Value::sym(node.contents.clone());
    }

    let mut cells = Vec::new();
    for child in &node.children {
        if matches!(child.contents.as_str(), "(" | ")" | "{" | "}") {
            continue;
        }
        if child.tag.contains("regex") {
            continue;
        }
        cells.push(read(child));
    }

    if node.tag.contains("qexpr") {
        Value::Qexpr(cells)
    } else {
        Value::Sexpr(cells)
    }
}

fn read_number(node: &ParseNode) -> Value {
    match node.contents.parse::<i64>() {
        Ok(n) => Value::Num(n),
        Err(_) => Value::err("Invalid Number"),
    }
}
