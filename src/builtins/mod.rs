//! The fixed library of native operations.
//!
//! Every builtin is a unit struct implementing [`Builtin`] and registered
//! into the global environment at startup under its language-level name.
//! A builtin owns its argument list outright: it consumes the children or
//! drops them, including on every failure path.

mod arithmetic;
mod lists;

pub use arithmetic::{Add, Div, Mul, Sub};
pub use lists::{Eval, Head, Join, List, Tail};

use crate::runtime::{Environment, Value};

/// A native operation callable from the language.
///
/// The function variant of [`Value`] holds one of these behind an `Arc`;
/// copying a function value shares the same native operation, exactly as
/// copying a function pointer would.
pub trait Builtin: Send + Sync {
    /// Language-level name the operation is bound under
    fn name(&self) -> &str;

    /// One-line human description
    fn description(&self) -> &str;

    /// Invoke the operation with the environment and its argument list.
    ///
    /// Failures come back as error *values*, never as Rust errors: a builtin
    /// cannot abort evaluation, only produce a result.
    fn call(&self, env: &mut Environment, args: Vec<Value>) -> Value;
}

/// Registers every builtin into an environment
pub fn register_all(env: &mut Environment) {
    arithmetic::register(env);
    lists::register(env);
}

/// Formats the shared argument-error message used by the list builtins
pub(crate) fn argument_error(name: &str, what: &str) -> Value {
    Value::err(format!("Function '{}' passed {}!", name, what))
}
