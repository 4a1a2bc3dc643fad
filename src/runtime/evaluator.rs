use crate::parser::ParseNode;
use crate::runtime::{read, Environment, Value};

/// Reduces a value to its final form against an environment.
///
/// Dispatch is by variant: symbols are replaced by their binding (or an
/// `Unbound Symbol!` error value), S-expressions are reduced by
/// [`eval_sexpr`], and everything else — numbers, errors, functions, and
/// Q-expressions — is a self-evaluating terminal form returned unchanged.
///
/// Evaluation is synchronous and runs to completion; bad input never aborts
/// the process, it comes back as an error value.
pub fn eval(env: &mut Environment, value: Value) -> Value {
    match value {
        Value::Sym(name) => env.get(&name),
        Value::Sexpr(cells) => eval_sexpr(env, cells),
        other => other,
    }
}

/// Reduces an S-expression's children, then applies the first to the rest.
///
/// Children are evaluated strictly left to right and fully eagerly — every
/// child exactly once, whether or not the applied function needs it. Only the
/// error scan afterwards short-circuits: the first error child (left to
/// right) is returned alone and the remaining children, later errors
/// included, are discarded.
fn eval_sexpr(env: &mut Environment, cells: Vec<Value>) -> Value {
    let mut evaluated = Vec::with_capacity(cells.len());
    for cell in cells {
        evaluated.push(eval(env, cell));
    }

    // First error wins; the rest of the container is released
    if let Some(pos) = evaluated.iter().position(Value::is_err) {
        return evaluated.swap_remove(pos);
    }

    // () is a self-evaluating value
    if evaluated.is_empty() {
        return Value::Sexpr(evaluated);
    }

    // A singleton collapses to its only child
    if evaluated.len() == 1 {
        return evaluated.remove(0);
    }

    let head = evaluated.remove(0);
    match head {
        Value::Fun(builtin) => {
            tracing::debug!(builtin = builtin.name(), args = evaluated.len(), "applying builtin");
            builtin.call(env, evaluated)
        }
        _ => Value::err("First element is not a function!"),
    }
}

/// Convenience wrapper owning an environment pre-populated with all builtins
///
/// ```
/// use lispel::{Evaluator, Value};
///
/// let mut evaluator = Evaluator::new();
/// let expr = Value::Sexpr(vec![Value::sym("+"), Value::Num(2), Value::Num(3)]);
/// assert_eq!(evaluator.eval(expr), Value::Num(5));
/// ```
pub struct Evaluator {
    /// The global environment (public so embedders can seed extra bindings)
    pub env: Environment,
}

impl Evaluator {
    /// Creates an evaluator over a fresh environment holding every builtin
    pub fn new() -> Self {
        let mut env = Environment::new();
        crate::builtins::register_all(&mut env);
        Evaluator { env }
    }

    /// Creates an evaluator over a caller-provided environment
    pub fn with_env(env: Environment) -> Self {
        Evaluator { env }
    }

    /// Evaluates a single value
    pub fn eval(&mut self, value: Value) -> Value {
        eval(&mut self.env, value)
    }

    /// Reads a parse tree into a value and evaluates it
    pub fn run(&mut self, tree: &ParseNode) -> Value {
        let value = read(tree);
        self.eval(value)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
