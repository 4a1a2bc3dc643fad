//! Arithmetic builtins: `+`, `-`, `*`, `/`
//!
//! ## Integer overflow behaviour
//!
//! Numbers are fixed-width `i64` and arithmetic wraps on overflow
//! (`wrapping_add` and friends), matching native two's-complement
//! wraparound. This includes `(- 9223372036854775807 -1)` and the unary
//! negation of `i64::MIN`. Division by zero never wraps or panics: it aborts
//! the fold and yields the `Division by zero!` error value.

use crate::builtins::Builtin;
use crate::runtime::{Environment, Value};

/// Register all arithmetic builtins
pub fn register(env: &mut Environment) {
    env.register(Add);
    env.register(Sub);
    env.register(Mul);
    env.register(Div);
}

#[derive(Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

/// Folds the argument list left to right from the first argument's value.
///
/// Every argument must be a number; any other variant drops the whole list
/// and produces the non-number error. A `-` with exactly one argument
/// negates it instead of folding.
fn fold(op: Op, args: Vec<Value>) -> Value {
    let mut numbers = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Num(n) => numbers.push(n),
            _ => return Value::err("Cannot operate on non-number"),
        }
    }

    let mut rest = numbers.into_iter();
    let Some(mut acc) = rest.next() else {
        // Unreachable through evaluation: a singleton S-expression returns
        // its only child before application, so every call carries at least
        // one argument.
        return Value::err("Cannot operate on non-number");
    };

    if matches!(op, Op::Sub) && rest.len() == 0 {
        return Value::Num(acc.wrapping_neg());
    }

    for n in rest {
        acc = match op {
            Op::Add => acc.wrapping_add(n),
            Op::Sub => acc.wrapping_sub(n),
            Op::Mul => acc.wrapping_mul(n),
            Op::Div => {
                if n == 0 {
                    return Value::err("Division by zero!");
                }
                acc.wrapping_div(n)
            }
        };
    }

    Value::Num(acc)
}

/// `+` — sum all arguments
pub struct Add;

impl Builtin for Add {
    fn name(&self) -> &str {
        "+"
    }

    fn description(&self) -> &str {
        "Add numbers left to right"
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Value {
        fold(Op::Add, args)
    }
}

/// `-` — subtract subsequent arguments from the first, or negate a single one
pub struct Sub;

impl Builtin for Sub {
    fn name(&self) -> &str {
        "-"
    }

    fn description(&self) -> &str {
        "Subtract numbers left to right; unary form negates"
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Value {
        fold(Op::Sub, args)
    }
}

/// `*` — multiply all arguments
pub struct Mul;

impl Builtin for Mul {
    fn name(&self) -> &str {
        "*"
    }

    fn description(&self) -> &str {
        "Multiply numbers left to right"
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Value {
        fold(Op::Mul, args)
    }
}

/// `/` — divide the first argument by each subsequent one
pub struct Div;

impl Builtin for Div {
    fn name(&self) -> &str {
        "/"
    }

    fn description(&self) -> &str {
        "Divide numbers left to right; zero divisors abort the fold"
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Value {
        fold(Op::Div, args)
    }
}
