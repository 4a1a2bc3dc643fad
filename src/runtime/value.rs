use std::fmt;
use std::sync::Arc;

use crate::builtins::Builtin;

/// Runtime value representation
///
/// Every datum the language touches is one of these six variants. Containers
/// exclusively own their children; sharing a subtree between two places is
/// only possible through a deep copy (`Clone`), never through shared
/// ownership. Dropping a value recursively releases everything it owns.
///
/// Errors are values too: they travel back up the evaluator through the same
/// return path as results, and render as `Error: <message>`.
#[derive(Clone)]
pub enum Value {
    /// Signed 64-bit integer; self-evaluating
    Num(i64),
    /// Error carrying a human-readable message; self-evaluating
    Err(String),
    /// Symbol name, resolved against the environment during evaluation
    Sym(String),
    /// Callable native operation; self-evaluating
    Fun(Arc<dyn Builtin>),
    /// Evaluable expression: children are evaluated, then the first child is
    /// applied as a function to the rest
    Sexpr(Vec<Value>),
    /// Quoted expression: children are literal data, never auto-evaluated
    Qexpr(Vec<Value>),
}

impl Value {
    /// Creates an error value from a message
    pub fn err(message: impl Into<String>) -> Self {
        Value::Err(message.into())
    }

    /// Creates a symbol value from a name
    pub fn sym(name: impl Into<String>) -> Self {
        Value::Sym(name.into())
    }

    /// Returns the variant name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Num(_) => "number",
            Value::Err(_) => "error",
            Value::Sym(_) => "symbol",
            Value::Fun(_) => "function",
            Value::Sexpr(_) => "s-expression",
            Value::Qexpr(_) => "q-expression",
        }
    }

    /// Returns true for the error variant
    pub fn is_err(&self) -> bool {
        matches!(self, Value::Err(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Num(n) => write!(f, "{}", n),
            Value::Err(message) => write!(f, "Error: {}", message),
            Value::Sym(name) => write!(f, "{}", name),
            Value::Fun(builtin) => write!(f, "<function {}>", builtin.name()),
            Value::Sexpr(cells) => write_cells(f, cells, '(', ')'),
            Value::Qexpr(cells) => write_cells(f, cells, '{', '}'),
        }
    }
}

fn write_cells(f: &mut fmt::Formatter, cells: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", cell)?;
    }
    write!(f, "{}", close)
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Num(n) => f.debug_tuple("Num").field(n).finish(),
            Value::Err(message) => f.debug_tuple("Err").field(message).finish(),
            Value::Sym(name) => f.debug_tuple("Sym").field(name).finish(),
            Value::Fun(builtin) => f.debug_tuple("Fun").field(&builtin.name()).finish(),
            Value::Sexpr(cells) => f.debug_tuple("Sexpr").field(cells).finish(),
            Value::Qexpr(cells) => f.debug_tuple("Qexpr").field(cells).finish(),
        }
    }
}

// Functions are compared by identity (pointer equality); the language has no
// equality operator of its own, this exists for tests and embedders.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Num(a), Value::Num(b)) => a == b,
            (Value::Err(a), Value::Err(b)) => a == b,
            (Value::Sym(a), Value::Sym(b)) => a == b,
            (Value::Fun(a), Value::Fun(b)) => Arc::ptr_eq(a, b),
            (Value::Sexpr(a), Value::Sexpr(b)) => a == b,
            (Value::Qexpr(a), Value::Qexpr(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Num(42).type_name(), "number");
        assert_eq!(Value::err("boom").type_name(), "error");
        assert_eq!(Value::sym("x").type_name(), "symbol");
        assert_eq!(Value::Sexpr(Vec::new()).type_name(), "s-expression");
        assert_eq!(Value::Qexpr(Vec::new()).type_name(), "q-expression");
    }

    #[test]
    fn test_render_number_and_symbol() {
        assert_eq!(Value::Num(-7).to_string(), "-7");
        assert_eq!(Value::sym("head").to_string(), "head");
    }

    #[test]
    fn test_render_error() {
        assert_eq!(Value::err("Unbound Symbol!").to_string(), "Error: Unbound Symbol!");
    }

    #[test]
    fn test_render_containers() {
        let qexpr = Value::Qexpr(vec![Value::Num(1), Value::Num(2), Value::Num(3)]);
        assert_eq!(qexpr.to_string(), "{1 2 3}");

        let sexpr = Value::Sexpr(vec![Value::sym("+"), Value::Num(1), qexpr]);
        assert_eq!(sexpr.to_string(), "(+ 1 {1 2 3})");

        assert_eq!(Value::Sexpr(Vec::new()).to_string(), "()");
        assert_eq!(Value::Qexpr(Vec::new()).to_string(), "{}");
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let original = Value::Qexpr(vec![Value::Num(1), Value::Qexpr(vec![Value::Num(2)])]);
        let mut copy = original.clone();

        if let Value::Qexpr(cells) = &mut copy {
            cells.push(Value::Num(99));
            if let Value::Qexpr(inner) = &mut cells[1] {
                inner.clear();
            }
        }

        // Mutating the copy (at both depths) leaves the original untouched
        assert_eq!(
            original,
            Value::Qexpr(vec![Value::Num(1), Value::Qexpr(vec![Value::Num(2)])])
        );
        assert_ne!(original, copy);
    }
}
