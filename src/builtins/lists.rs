//! List builtins: `list`, `head`, `tail`, `eval`, `join`
//!
//! These all work by moving the owned child vector between container
//! variants. Re-tagging an S-expression as a Q-expression (`list`), or back
//! (`eval`), moves the `Vec` without copying a single child.

use crate::builtins::{argument_error, Builtin};
use crate::runtime::{eval, Environment, Value};

/// Register all list builtins
pub fn register(env: &mut Environment) {
    env.register(List);
    env.register(Head);
    env.register(Tail);
    env.register(Eval);
    env.register(Join);
}

/// Unwraps the single Q-expression argument shared by `head`, `tail`, and
/// `eval`, or produces the matching argument error
fn single_qexpr(name: &str, mut args: Vec<Value>) -> Result<Vec<Value>, Value> {
    if args.len() != 1 {
        return Err(argument_error(name, "too many arguments"));
    }
    match args.remove(0) {
        Value::Qexpr(cells) => Ok(cells),
        _ => Err(argument_error(name, "incorrect type")),
    }
}

/// `list` — collect the arguments into a Q-expression
pub struct List;

impl Builtin for List {
    fn name(&self) -> &str {
        "list"
    }

    fn description(&self) -> &str {
        "Re-tag the argument list as a Q-expression"
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Value {
        Value::Qexpr(args)
    }
}

/// `head` — Q-expression holding only the first child
pub struct Head;

impl Builtin for Head {
    fn name(&self) -> &str {
        "head"
    }

    fn description(&self) -> &str {
        "Keep only the first element of a Q-expression"
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Value {
        let mut cells = match single_qexpr("head", args) {
            Ok(cells) => cells,
            Err(error) => return error,
        };
        if cells.is_empty() {
            return argument_error("head", "{}");
        }
        cells.truncate(1);
        Value::Qexpr(cells)
    }
}

/// `tail` — Q-expression with the first child removed
pub struct Tail;

impl Builtin for Tail {
    fn name(&self) -> &str {
        "tail"
    }

    fn description(&self) -> &str {
        "Drop the first element of a Q-expression"
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Value {
        let mut cells = match single_qexpr("tail", args) {
            Ok(cells) => cells,
            Err(error) => return error,
        };
        if cells.is_empty() {
            return argument_error("tail", "{}");
        }
        cells.remove(0);
        Value::Qexpr(cells)
    }
}

/// `eval` — re-tag a Q-expression as an S-expression and evaluate it
pub struct Eval;

impl Builtin for Eval {
    fn name(&self) -> &str {
        "eval"
    }

    fn description(&self) -> &str {
        "Evaluate a Q-expression as code"
    }

    fn call(&self, env: &mut Environment, args: Vec<Value>) -> Value {
        let cells = match single_qexpr("eval", args) {
            Ok(cells) => cells,
            Err(error) => return error,
        };
        eval(env, Value::Sexpr(cells))
    }
}

/// `join` — concatenate Q-expressions left to right
pub struct Join;

impl Builtin for Join {
    fn name(&self) -> &str {
        "join"
    }

    fn description(&self) -> &str {
        "Concatenate Q-expressions into one"
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Value {
        let mut lists = Vec::with_capacity(args.len());
        for arg in args {
            match arg {
                Value::Qexpr(cells) => lists.push(cells),
                _ => return argument_error("join", "incorrect type"),
            }
        }

        let mut rest = lists.into_iter();
        let mut joined = rest.next().unwrap_or_default();
        for cells in rest {
            joined.extend(cells);
        }
        Value::Qexpr(joined)
    }
}
